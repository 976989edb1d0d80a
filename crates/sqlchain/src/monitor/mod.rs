//! SQL logging for executors.
//!
//! Wrap any [`Executor`](crate::client::Executor) in a [`LoggedExecutor`] to
//! emit one `tracing` event per statement on the `sqlchain.sql` target:
//!
//! ```ignore
//! use sqlchain::monitor::{LogLevel, LoggedExecutor, SqlLogConfig};
//!
//! let conn = LoggedExecutor::with_config(
//!     conn,
//!     SqlLogConfig::new().with_level(LogLevel::Info).with_params(true),
//! );
//! stmt::delete_from("sessions")?.execute(&conn).await?;
//! ```

mod config;
mod logged;


pub use config::{LogLevel, SqlLogConfig};
pub use logged::LoggedExecutor;

/// Statement kind detected from the leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    /// CREATE and other DDL
    Create,
    Other,
}

impl StatementKind {
    pub fn from_sql(sql: &str) -> Self {
        let keyword = sql
            .trim_start()
            .split(|c: char| !c.is_ascii_alphabetic())
            .next()
            .unwrap_or("");
        if keyword.eq_ignore_ascii_case("SELECT") {
            StatementKind::Select
        } else if keyword.eq_ignore_ascii_case("INSERT") {
            StatementKind::Insert
        } else if keyword.eq_ignore_ascii_case("UPDATE") {
            StatementKind::Update
        } else if keyword.eq_ignore_ascii_case("DELETE") {
            StatementKind::Delete
        } else if keyword.eq_ignore_ascii_case("CREATE") {
            StatementKind::Create
        } else {
            StatementKind::Other
        }
    }
}

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
