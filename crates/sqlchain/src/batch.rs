//! Batched execution of one statement text with many parameter sets.

use crate::client::Executor;
use crate::error::{QueryError, QueryResult};
use crate::stmt::Statement;
use crate::value::Value;

/// Collects statements that share the same SQL text and runs them as one
/// prepared batch.
///
/// ```ignore
/// let mut batch = BatchBuilder::new();
/// for user in users {
///     batch = batch.add(&stmt::insert_into("users")?.value("name", user.name)?)?;
/// }
/// let codes = batch.execute(&conn).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchBuilder {
    sql: Option<String>,
    param_sets: Vec<Vec<Value>>,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    ///
    /// Fails with [`QueryError::BatchTextMismatch`] when its text differs from
    /// the first statement added.
    pub fn add(mut self, stmt: &impl Statement) -> QueryResult<Self> {
        let (sql, params) = stmt.build()?.into_parts();
        match &self.sql {
            Some(expected) if *expected != sql => {
                return Err(QueryError::BatchTextMismatch {
                    expected: expected.clone(),
                    found: sql,
                });
            }
            Some(_) => {}
            None => self.sql = Some(sql),
        }
        self.param_sets.push(params);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.param_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.param_sets.is_empty()
    }

    /// The shared SQL text, once a statement has been added.
    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// Run the batch and return one result code per entry, in order.
    ///
    /// An empty batch returns an empty vector without touching `conn`.
    pub async fn execute(&self, conn: &impl Executor) -> QueryResult<Vec<i64>> {
        let Some(sql) = &self.sql else {
            return Ok(Vec::new());
        };
        tracing::debug!(
            target: "sqlchain.sql",
            entries = self.param_sets.len(),
            sql = %sql,
            "executing batch"
        );
        conn.execute_batch(sql, &self.param_sets).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt;

    #[test]
    fn add_collects_params() {
        let batch = BatchBuilder::new()
            .add(&stmt::insert_into("t").unwrap().value("a", 1).unwrap())
            .unwrap()
            .add(&stmt::insert_into("t").unwrap().value("a", 2).unwrap())
            .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.sql(), Some("INSERT INTO `t` (`a`) VALUES (?);"));
    }

    #[test]
    fn add_rejects_different_text() {
        let err = BatchBuilder::new()
            .add(&stmt::delete_from("t").unwrap())
            .unwrap()
            .add(&stmt::delete_from("u").unwrap())
            .unwrap_err();
        assert!(err.is_batch_mismatch());
    }

    #[test]
    fn add_propagates_render_errors() {
        let err = BatchBuilder::new()
            .add(&stmt::insert_into("t").unwrap())
            .unwrap_err();
        assert!(matches!(err, QueryError::EmptyInsert));
    }
}
