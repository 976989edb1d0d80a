//! Statement builders for MySQL-flavoured SQL.
//!
//! Every builder renders identifiers in backticks and values as positional
//! `?` placeholders. The factory functions in this module validate table and
//! database names up front; column names and raw fragments are validated by
//! the builder operation that receives them.
//!
//! # Usage
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! use sqlchain::stmt;
//!
//! // INSERT ... ON DUPLICATE KEY UPDATE
//! stmt::insert_into("users")?
//!     .value("id", 1)?
//!     .value("name", "alice")?
//!     .on_duplicate_key_update_except(["id"])
//!     .execute(&conn)
//!     .await?;
//!
//! // SELECT with mapping
//! let names = stmt::select(["name"])?
//!     .from("users")?
//!     .where_eq("active", true)?
//!     .limit(20)?
//!     .fetch_all(&conn, |row: &UserRow| Ok(row.name.clone()))
//!     .await?;
//! ```

mod assignments;
mod condition;
mod create_table;
mod delete;
mod expr;
mod insert;
mod raw;
mod select;
mod traits;
mod update;


pub use assignments::Assignments;
pub use condition::{Conditional, Conditions};
pub use create_table::{ColumnDef, CreateTable};
pub use delete::Delete;
pub use expr::Expression;
pub use insert::Insert;
pub use raw::Raw;
pub use select::{Select, Selection};
pub use traits::Statement;
pub use update::Update;

use crate::error::QueryResult;
use crate::ident::TableName;
use crate::value::Value;

/// Create a CREATE TABLE builder.
///
/// # Example
/// ```ignore
/// let ddl = sqlchain::stmt::create_table("t")?.int_key("id")?.text("body")?;
/// ```
pub fn create_table(table: &str) -> QueryResult<CreateTable> {
    Ok(CreateTable::new(TableName::new(None, table)?))
}

/// Create a CREATE TABLE builder for `` `database`.`table` ``.
pub fn create_table_in(database: &str, table: &str) -> QueryResult<CreateTable> {
    Ok(CreateTable::new(TableName::new(Some(database), table)?))
}

/// Create an INSERT builder.
pub fn insert_into(table: &str) -> QueryResult<Insert> {
    Ok(Insert::new(TableName::new(None, table)?))
}

pub fn insert_into_in(database: &str, table: &str) -> QueryResult<Insert> {
    Ok(Insert::new(TableName::new(Some(database), table)?))
}

/// Create an UPDATE builder.
pub fn update(table: &str) -> QueryResult<Update> {
    Ok(Update::new(TableName::new(None, table)?))
}

pub fn update_in(database: &str, table: &str) -> QueryResult<Update> {
    Ok(Update::new(TableName::new(Some(database), table)?))
}

/// Create a DELETE builder.
pub fn delete_from(table: &str) -> QueryResult<Delete> {
    Ok(Delete::new(TableName::new(None, table)?))
}

pub fn delete_from_in(database: &str, table: &str) -> QueryResult<Delete> {
    Ok(Delete::new(TableName::new(Some(database), table)?))
}

/// Create a SELECT builder over the given columns.
///
/// Pass an empty list to start from nothing and add `all()` or `expr(...)`.
///
/// # Example
/// ```ignore
/// let q = sqlchain::stmt::select(["a", "b"])?.from("t")?;
/// ```
pub fn select<S: AsRef<str>>(columns: impl IntoIterator<Item = S>) -> QueryResult<Select> {
    Select::new().cols(columns)
}

/// Wrap arbitrary SQL text and parameters.
///
/// Fails with [`crate::QueryError::PlaceholderMismatch`] when the number of
/// `?` in `sql` differs from the number of parameters.
pub fn raw<I>(sql: impl Into<String>, params: I) -> QueryResult<Raw>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Raw::new(sql, params)
}
