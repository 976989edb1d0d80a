//! Execution boundary between rendered statements and a database driver.

use crate::error::{QueryError, QueryResult};
use crate::result_set::RowCursor;
use crate::value::Value;

/// A connection (or pool, or transaction) that can run rendered SQL.
///
/// Parameters are bound positionally: the n-th `?` in `sql` receives
/// `params[n]`. Implementations translate driver failures into
/// [`QueryError::Execution`].
pub trait Executor: Send + Sync {
    /// Cursor type returned by [`Executor::query`].
    type Cursor: RowCursor;

    /// Execute a statement and return the affected row count.
    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<u64>> + Send;

    /// Execute a statement and return the generated key, if any.
    ///
    /// The default implementation reports that the executor does not support
    /// generated keys.
    fn execute_returning_key(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<Option<Value>>> + Send {
        let _ = (sql, params);
        async { Err(QueryError::Other("generated keys are not supported by this executor".to_string())) }
    }

    /// Execute a query and return an open cursor over its rows.
    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<Self::Cursor>> + Send;

    /// Run one prepared statement once per parameter set.
    ///
    /// Returns one result code per parameter set, in input order. The default
    /// implementation calls [`Executor::execute`] sequentially; drivers with a
    /// native batch API should override it.
    fn execute_batch(
        &self,
        sql: &str,
        param_sets: &[Vec<Value>],
    ) -> impl std::future::Future<Output = QueryResult<Vec<i64>>> + Send {
        async move {
            let mut codes = Vec::with_capacity(param_sets.len());
            for params in param_sets {
                let affected = self.execute(sql, params).await?;
                codes.push(i64::try_from(affected).unwrap_or(i64::MAX));
            }
            Ok(codes)
        }
    }
}

impl<E: Executor> Executor for &E {
    type Cursor = E::Cursor;

    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<u64>> + Send {
        (**self).execute(sql, params)
    }

    fn execute_returning_key(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<Option<Value>>> + Send {
        (**self).execute_returning_key(sql, params)
    }

    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<Self::Cursor>> + Send {
        (**self).query(sql, params)
    }

    fn execute_batch(
        &self,
        sql: &str,
        param_sets: &[Vec<Value>],
    ) -> impl std::future::Future<Output = QueryResult<Vec<i64>>> + Send {
        (**self).execute_batch(sql, param_sets)
    }
}
