//! Identifier and placeholder validation.
//!
//! Identifiers (database/table/column names) are always rendered inside
//! backticks, so the only requirements are that they are non-empty and do not
//! contain a backtick themselves. Fragments supplied by callers use `?` as the
//! positional placeholder and must carry exactly one argument per `?`.
//!
//! Placeholder counting is purely lexical: a `?` inside a string literal in the
//! fragment still counts as a placeholder.

use crate::error::{QueryError, QueryResult};

/// The identifier quoting character.
pub const QUOTE: char = '`';

/// The positional placeholder marker.
pub const PLACEHOLDER: char = '?';

/// Validate that `s` can be used as a quoted identifier.
pub fn validate_identifier(s: &str) -> QueryResult<()> {
    if s.is_empty() || s.contains(QUOTE) {
        return Err(QueryError::InvalidIdentifier(s.to_string()));
    }
    Ok(())
}

/// Validate that `expr` has exactly `args` placeholders.
pub fn validate_placeholder_count(expr: &str, args: usize) -> QueryResult<()> {
    let found = placeholder_count(expr);
    if found != args {
        return Err(QueryError::PlaceholderMismatch {
            expected: args,
            found,
            expr: expr.to_string(),
        });
    }
    Ok(())
}

/// Count `?` markers in a SQL fragment.
pub fn placeholder_count(expr: &str) -> usize {
    expr.chars().filter(|&c| c == PLACEHOLDER).count()
}

/// Render a pre-validated identifier as `` `name` ``.
pub fn quote_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(&mut out, name);
    out
}

pub(crate) fn write_quoted(out: &mut String, name: &str) {
    out.push(QUOTE);
    out.push_str(name);
    out.push(QUOTE);
}

/// A pre-validated, optionally database-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    database: Option<String>,
    table: String,
}

impl TableName {
    /// Validate and build a table name.
    pub fn new(database: Option<&str>, table: &str) -> QueryResult<Self> {
        if let Some(db) = database {
            validate_identifier(db)?;
        }
        validate_identifier(table)?;
        Ok(Self {
            database: database.map(str::to_string),
            table: table.to_string(),
        })
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Render as `` `db`.`table` `` or `` `table` ``.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        if let Some(db) = &self.database {
            write_quoted(out, db);
            out.push('.');
        }
        write_quoted(out, &self.table);
    }
}
