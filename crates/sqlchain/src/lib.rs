//! # sqlchain
//!
//! Chainable builders for MySQL-flavoured SQL statements.
//!
//! ## Features
//!
//! - **Quoted identifiers**: every table, database and column name is validated and rendered in backticks
//! - **Positional parameters**: values never enter the SQL text; they are bound to `?` in order
//! - **Fail fast**: invalid names and placeholder/argument mismatches are rejected at the call that introduces them
//! - **Batches**: run many parameter sets against one prepared statement
//! - **Result mapping**: map rows through a closure with guaranteed cursor release
//! - **SQL logging**: wrap any executor to emit `tracing` events per statement
//!
//! ## Statements
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! use sqlchain::stmt;
//!
//! // CREATE TABLE
//! stmt::create_table("users")?
//!     .if_not_exists()
//!     .int_key("id")?
//!     .varchar("name", 64)?
//!     .not_null()?
//!     .execute(&conn)
//!     .await?;
//!
//! // INSERT ... ON DUPLICATE KEY UPDATE
//! stmt::insert_into("users")?
//!     .value("id", 1)?
//!     .value("name", "alice")?
//!     .on_duplicate_key_update_except(["id"])
//!     .execute(&conn)
//!     .await?;
//!
//! // UPDATE
//! stmt::update("users")?
//!     .value_expr("visits", "`visits` + ?", [1])?
//!     .where_eq("id", 1)?
//!     .execute(&conn)
//!     .await?;
//!
//! // SELECT
//! let first = stmt::select(["name"])?
//!     .from("users")?
//!     .where_nullable("deleted_at", None::<i64>)?
//!     .order_by("id")?
//!     .desc()?
//!     .limit(1)?
//!     .fetch_first(&conn, |row: &UserRow| Ok(Some(row.name.clone())))
//!     .await?;
//! ```

pub mod batch;
pub mod client;
pub mod error;
pub mod ident;
pub mod monitor;
pub mod prelude;
pub mod result_set;
pub mod stmt;
pub mod value;

pub use batch::BatchBuilder;
pub use client::Executor;
pub use error::{QueryError, QueryResult};
pub use ident::{TableName, quote_identifier, validate_identifier, validate_placeholder_count};
pub use monitor::{LogLevel, LoggedExecutor, SqlLogConfig, StatementKind};
pub use result_set::{ResultSet, RowCursor, VecCursor};
pub use stmt::{
    Conditional, CreateTable, Delete, Expression, Insert, Raw, Select, Statement, Update,
};
pub use value::Value;
