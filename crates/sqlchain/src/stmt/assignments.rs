//! Ordered column -> expression map used by INSERT values, ON DUPLICATE KEY
//! UPDATE and UPDATE ... SET.

use crate::ident::write_quoted;
use crate::stmt::expr::Expression;
use crate::value::Value;
use std::collections::HashSet;

/// Insertion-ordered assignments; re-assigning a column replaces its
/// expression but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments {
    entries: Vec<(String, Expression)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Assign `expr` to a pre-validated column.
    pub fn set(&mut self, column: &str, expr: Expression) {
        match self.entries.iter_mut().find(|(c, _)| c == column) {
            Some(slot) => slot.1 = expr,
            None => self.entries.push((column.to_string(), expr)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Expression> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expression)> {
        self.entries.iter().map(|(c, e)| (c.as_str(), e))
    }

    /// Copy of these assignments without the given columns.
    pub fn without<S: AsRef<str>>(&self, keys: impl IntoIterator<Item = S>) -> Self {
        let keys: HashSet<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(c, _)| !keys.contains(c))
                .cloned()
                .collect(),
        }
    }

    /// `` `a`, `b` ``
    pub(crate) fn write_columns(&self, out: &mut String) {
        for (i, (column, _)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_quoted(out, column);
        }
    }

    /// `?, 1 + ?`
    pub(crate) fn write_values(&self, out: &mut String) {
        for (i, (_, expr)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(expr.fragment());
        }
    }

    /// `` `a` = ?, `b` = 1 + ? ``
    pub(crate) fn write_set(&self, out: &mut String) {
        for (i, (column, expr)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_quoted(out, column);
            out.push_str(" = ");
            out.push_str(expr.fragment());
        }
    }

    pub(crate) fn extend_params(&self, out: &mut Vec<Value>) {
        for (_, expr) in &self.entries {
            out.extend_from_slice(expr.args());
        }
    }
}

/// Generate the `value*` setters for a statement holding an [`Assignments`]
/// field.
macro_rules! impl_value_setters {
    ($ty:ty, $field:ident) => {
        impl $ty {
            /// Assign a bound value to `column`.
            pub fn value(
                self,
                column: &str,
                value: impl Into<$crate::value::Value>,
            ) -> $crate::error::QueryResult<Self> {
                let value: $crate::value::Value = value.into();
                self.value_expr(column, "?", [value])
            }

            /// Assign an SQL expression with `?` placeholders to `column`.
            pub fn value_expr<I>(
                mut self,
                column: &str,
                expr: &str,
                args: I,
            ) -> $crate::error::QueryResult<Self>
            where
                I: IntoIterator,
                I::Item: Into<$crate::value::Value>,
            {
                $crate::ident::validate_identifier(column)?;
                let expr = $crate::stmt::expr::Expression::new(expr, args)?;
                self.$field.set(column, expr);
                Ok(self)
            }

            /// Assign a literal `NULL` to `column`.
            pub fn value_null(self, column: &str) -> $crate::error::QueryResult<Self> {
                self.value_expr(column, "NULL", $crate::args![])
            }

            /// `None` assigns `NULL`, `Some(v)` binds `v`.
            pub fn value_nullable<V: Into<$crate::value::Value>>(
                self,
                column: &str,
                value: Option<V>,
            ) -> $crate::error::QueryResult<Self> {
                match value {
                    Some(v) => self.value(column, v),
                    None => self.value_null(column),
                }
            }
        }
    };
}

pub(crate) use impl_value_setters;
