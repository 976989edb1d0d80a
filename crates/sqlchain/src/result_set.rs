//! Row cursors and result mapping.

use crate::error::{QueryError, QueryResult};
use std::collections::VecDeque;

/// A forward-only cursor over query results.
pub trait RowCursor: Send {
    type Row: Send;

    /// Advance to the next row; `None` once exhausted.
    fn next_row(&mut self) -> impl std::future::Future<Output = QueryResult<Option<Self::Row>>> + Send;

    /// Release the cursor and whatever statement produced it.
    fn close(&mut self) -> impl std::future::Future<Output = QueryResult<()>> + Send;
}

/// An open result set.
///
/// [`ResultSet::map_all`] and [`ResultSet::map_first`] consume the set and
/// always close the cursor, whether mapping succeeds or not. When both the
/// mapping and the close fail, the mapping error is returned.
pub struct ResultSet<C: RowCursor> {
    cursor: C,
}

impl<C: RowCursor> ResultSet<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    pub fn cursor(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Take the cursor out; the caller becomes responsible for closing it.
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    pub async fn close(mut self) -> QueryResult<()> {
        self.cursor.close().await
    }

    /// Map every row, in order.
    pub async fn map_all<T, F>(mut self, mut mapper: F) -> QueryResult<Vec<T>>
    where
        T: Send,
        F: FnMut(&C::Row) -> QueryResult<T> + Send,
    {
        let mut out = Vec::new();
        let result = loop {
            match self.cursor.next_row().await {
                Ok(Some(row)) => match mapper(&row) {
                    Ok(value) => out.push(value),
                    Err(e) => break Err(e),
                },
                Ok(None) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.finish(result).await?;
        Ok(out)
    }

    /// Map the first row, if there is one.
    ///
    /// Returns `None` when the set is empty or the mapper yields `None`.
    pub async fn map_first<T, F>(mut self, mapper: F) -> QueryResult<Option<T>>
    where
        T: Send,
        F: FnOnce(&C::Row) -> QueryResult<Option<T>> + Send,
    {
        let result = match self.cursor.next_row().await {
            Ok(Some(row)) => mapper(&row),
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };
        self.finish(result).await
    }

    async fn finish<T>(mut self, result: QueryResult<T>) -> QueryResult<T> {
        let closed = self.cursor.close().await;
        let value = result?;
        closed?;
        Ok(value)
    }
}

/// In-memory cursor over pre-materialized rows.
#[derive(Debug, Clone)]
pub struct VecCursor<R> {
    rows: VecDeque<R>,
    closed: bool,
}

impl<R> VecCursor<R> {
    pub fn new(rows: impl IntoIterator<Item = R>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Rows not yet read.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl<R: Send> RowCursor for VecCursor<R> {
    type Row = R;

    fn next_row(&mut self) -> impl std::future::Future<Output = QueryResult<Option<R>>> + Send {
        let next = if self.closed {
            Err(QueryError::Other("cursor is closed".to_string()))
        } else {
            Ok(self.rows.pop_front())
        };
        std::future::ready(next)
    }

    fn close(&mut self) -> impl std::future::Future<Output = QueryResult<()>> + Send {
        self.closed = true;
        self.rows.clear();
        std::future::ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn map_all_closes_cursor() {
        let mut set = ResultSet::new(VecCursor::new([1, 2, 3]));
        assert_eq!(set.cursor().remaining(), 3);
        let doubled = set.map_all(|n| Ok(n * 2)).await.unwrap();
        assert_eq!(doubled, [2, 4, 6]);
    }

    #[tokio::test]
    async fn map_first_on_empty() {
        let set = ResultSet::new(VecCursor::<i32>::new([]));
        let first = set.map_first(|n| Ok(Some(*n))).await.unwrap();
        assert_eq!(first, None);
    }

    #[tokio::test]
    async fn map_first_reads_one_row() {
        let set = ResultSet::new(VecCursor::new(["a", "b"]));
        let first = set.map_first(|s| Ok(Some(s.to_string()))).await.unwrap();
        assert_eq!(first.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn mapper_error_propagates() {
        let set = ResultSet::new(VecCursor::new([1, 2]));
        let err = set
            .map_all(|n| {
                if *n == 2 {
                    Err(QueryError::decode("n", "too big"))
                } else {
                    Ok(*n)
                }
            })
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::Decode { .. }));
    }

    #[tokio::test]
    async fn closed_cursor_rejects_reads() {
        let set = ResultSet::new(VecCursor::new([1]));
        let mut cursor = set.into_cursor();
        cursor.close().await.unwrap();
        assert!(cursor.is_closed());
        assert!(cursor.next_row().await.is_err());
    }
}
