//! Shared WHERE clause state for UPDATE, DELETE and SELECT.

use crate::error::{QueryError, QueryResult};
use crate::ident::{quote_identifier, validate_identifier};
use crate::stmt::expr::Expression;
use crate::value::Value;

/// Ordered list of WHERE conditions, always joined with `AND`.
///
/// Each condition is rendered in its own parentheses, so raw fragments that
/// contain `OR` keep their meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    exprs: Vec<Expression>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Append `` `column` = ? ``. A NULL value is rejected since `= NULL`
    /// never matches; use [`Conditions::push_null`].
    pub fn push_eq(&mut self, column: &str, value: impl Into<Value>) -> QueryResult<()> {
        validate_identifier(column)?;
        let value: Value = value.into();
        if value.is_null() {
            return Err(QueryError::NullValue(column.to_string()));
        }
        self.push_expr(format!("{} = ?", quote_identifier(column)), [value])
    }

    /// Append a raw condition with `?` placeholders.
    pub fn push_expr<I>(&mut self, expr: impl Into<String>, args: I) -> QueryResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.exprs.push(Expression::new(expr, args)?);
        Ok(())
    }

    /// Append `` `column` IS NULL ``.
    pub fn push_null(&mut self, column: &str) -> QueryResult<()> {
        validate_identifier(column)?;
        self.push_expr(format!("{} IS NULL", quote_identifier(column)), crate::args![])
    }

    /// `None` or a NULL value appends `IS NULL`, anything else `= ?`.
    pub fn push_nullable<V: Into<Value>>(&mut self, column: &str, value: Option<V>) -> QueryResult<()> {
        match value.map(Into::<Value>::into) {
            Some(v) if !v.is_null() => self.push_eq(column, v),
            _ => self.push_null(column),
        }
    }

    /// Write `WHERE (c1) AND (c2) ` or nothing.
    pub(crate) fn write_sql(&self, out: &mut String) {
        if self.exprs.is_empty() {
            return;
        }
        out.push_str("WHERE ");
        for (i, cond) in self.exprs.iter().enumerate() {
            if i > 0 {
                out.push_str(" AND ");
            }
            out.push('(');
            out.push_str(cond.fragment());
            out.push(')');
        }
        out.push(' ');
    }

    /// Render the clause on its own (debug helper).
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<Value>) {
        for cond in &self.exprs {
            out.extend_from_slice(cond.args());
        }
    }
}

/// WHERE-clause operations shared by every filtering statement.
///
/// Implementors only expose their embedded [`Conditions`]; the chainable
/// operations are provided and return the concrete statement type.
pub trait Conditional: Sized {
    fn conditions(&self) -> &Conditions;

    fn conditions_mut(&mut self) -> &mut Conditions;

    /// Add `` `column` = ? ``.
    fn where_eq(mut self, column: &str, value: impl Into<Value>) -> QueryResult<Self> {
        self.conditions_mut().push_eq(column, value)?;
        Ok(self)
    }

    /// Add a raw condition such as `` `d` / 100 = ? ``.
    fn where_expr<I>(mut self, expr: &str, args: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.conditions_mut().push_expr(expr, args)?;
        Ok(self)
    }

    /// Add `` `column` IS NULL ``.
    fn where_null(mut self, column: &str) -> QueryResult<Self> {
        self.conditions_mut().push_null(column)?;
        Ok(self)
    }

    /// Add `IS NULL` for `None`, `= ?` otherwise.
    fn where_nullable<V: Into<Value>>(mut self, column: &str, value: Option<V>) -> QueryResult<Self> {
        self.conditions_mut().push_nullable(column, value)?;
        Ok(self)
    }
}
