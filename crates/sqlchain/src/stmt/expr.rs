//! The (fragment, arguments) pair every clause is built from.

use crate::error::QueryResult;
use crate::ident::validate_placeholder_count;
use crate::value::Value;

/// An SQL fragment together with the values bound to its `?` placeholders.
///
/// The number of `?` characters in the fragment always equals the number of
/// arguments; [`Expression::new`] is the only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    fragment: String,
    args: Vec<Value>,
}

impl Expression {
    /// Create an expression, validating its placeholder count.
    pub fn new<I>(fragment: impl Into<String>, args: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let fragment = fragment.into();
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        validate_placeholder_count(&fragment, args.len())?;
        Ok(Self { fragment, args })
    }

    /// Single `?` bound to `value`.
    pub fn param(value: impl Into<Value>) -> Self {
        Self {
            fragment: "?".to_string(),
            args: vec![value.into()],
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    #[test]
    fn new_validates_count() {
        let e = Expression::new("1 + ?", [456]).unwrap();
        assert_eq!(e.fragment(), "1 + ?");
        assert_eq!(e.args(), &[Value::Int(456)]);

        let err = Expression::new("1 + ?", crate::args![]).unwrap_err();
        assert!(matches!(err, QueryError::PlaceholderMismatch { .. }));
    }

    #[test]
    fn param_shorthand() {
        assert_eq!(Expression::param("x"), Expression::new("?", ["x"]).unwrap());
    }
}
