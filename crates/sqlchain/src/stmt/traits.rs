//! The capability every statement provides.

use crate::client::Executor;
use crate::error::QueryResult;
use crate::result_set::{ResultSet, RowCursor};
use crate::stmt::raw::Raw;
use crate::value::Value;

/// A renderable SQL statement.
///
/// `to_sql` and `params` describe the same statement: the `?` markers of the
/// text and the returned values line up one to one, left to right. `to_sql`
/// fails when the builder state cannot be rendered (for example an INSERT
/// without values); `params` never fails.
pub trait Statement: Sync {
    /// Render the SQL text with `?` placeholders.
    fn to_sql(&self) -> QueryResult<String>;

    /// Values for the placeholders, in text order.
    fn params(&self) -> Vec<Value>;

    /// Render text and parameters together as a [`Raw`] statement.
    fn build(&self) -> QueryResult<Raw> {
        let sql = self.to_sql()?;
        Ok(Raw::from_parts(sql, self.params()))
    }

    /// Execute and return the affected row count.
    fn execute(
        &self,
        conn: &impl Executor,
    ) -> impl std::future::Future<Output = QueryResult<u64>> + Send {
        async move {
            let built = self.build()?;
            conn.execute(built.sql(), built.bindings()).await
        }
    }

    /// Execute and return the generated key, if the executor reports one.
    fn execute_returning_key(
        &self,
        conn: &impl Executor,
    ) -> impl std::future::Future<Output = QueryResult<Option<Value>>> + Send {
        async move {
            let built = self.build()?;
            conn.execute_returning_key(built.sql(), built.bindings()).await
        }
    }

    /// Execute and return the open result set.
    fn query<E: Executor>(
        &self,
        conn: &E,
    ) -> impl std::future::Future<Output = QueryResult<ResultSet<E::Cursor>>> + Send {
        async move {
            let built = self.build()?;
            let cursor = conn.query(built.sql(), built.bindings()).await?;
            Ok(ResultSet::new(cursor))
        }
    }

    /// Execute and map every row. The cursor is closed before returning.
    fn fetch_all<E, T, F>(
        &self,
        conn: &E,
        mapper: F,
    ) -> impl std::future::Future<Output = QueryResult<Vec<T>>> + Send
    where
        E: Executor,
        T: Send,
        F: FnMut(&<E::Cursor as RowCursor>::Row) -> QueryResult<T> + Send,
    {
        async move { self.query(conn).await?.map_all(mapper).await }
    }

    /// Execute and map the first row, if any. The cursor is closed before
    /// returning.
    fn fetch_first<E, T, F>(
        &self,
        conn: &E,
        mapper: F,
    ) -> impl std::future::Future<Output = QueryResult<Option<T>>> + Send
    where
        E: Executor,
        T: Send,
        F: FnOnce(&<E::Cursor as RowCursor>::Row) -> QueryResult<Option<T>> + Send,
    {
        async move { self.query(conn).await?.map_first(mapper).await }
    }
}
