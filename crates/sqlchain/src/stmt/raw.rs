//! Arbitrary SQL text with bound parameters.

use crate::error::QueryResult;
use crate::ident::validate_placeholder_count;
use crate::stmt::traits::Statement;
use crate::value::Value;

/// A statement holding already-rendered SQL text and its parameters.
///
/// Built either from caller-supplied SQL via [`crate::stmt::raw`] or from any
/// other statement via [`Statement::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    sql: String,
    params: Vec<Value>,
}

impl Raw {
    /// Wrap SQL text, validating its placeholder count.
    pub fn new<I>(sql: impl Into<String>, params: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let sql = sql.into();
        let params: Vec<Value> = params.into_iter().map(Into::into).collect();
        validate_placeholder_count(&sql, params.len())?;
        Ok(Self { sql, params })
    }

    pub(crate) fn from_parts(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn bindings(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

impl Statement for Raw {
    fn to_sql(&self) -> QueryResult<String> {
        Ok(self.sql.clone())
    }

    fn params(&self) -> Vec<Value> {
        self.params.clone()
    }

    fn build(&self) -> QueryResult<Raw> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    #[test]
    fn raw_validates_placeholders() {
        let raw = Raw::new("SELECT ? + ?;", [1, 2]).unwrap();
        assert_eq!(raw.to_sql().unwrap(), "SELECT ? + ?;");
        assert_eq!(raw.params(), crate::args![1, 2]);

        assert!(matches!(
            Raw::new("SELECT ?;", crate::args![]),
            Err(QueryError::PlaceholderMismatch { .. })
        ));
    }

    #[test]
    fn build_is_identity() {
        let raw = Raw::new("DELETE FROM `t` WHERE (`a` = ?) ;", ["x"]).unwrap();
        assert_eq!(raw.build().unwrap(), raw);
        let (sql, params) = raw.into_parts();
        assert_eq!(sql, "DELETE FROM `t` WHERE (`a` = ?) ;");
        assert_eq!(params, crate::args!["x"]);
    }
}
