#![allow(dead_code)]

use sqlchain::{Executor, QueryError, QueryResult, RowCursor, Value, VecCursor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: i64,
    pub name: Option<String>,
}

pub fn user(id: i64, name: Option<&str>) -> UserRow {
    UserRow {
        id,
        name: name.map(str::to_string),
    }
}

/// Executor that records every call and serves a fixed row set.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    rows: Vec<UserRow>,
    closes: Arc<AtomicUsize>,
    fail_close: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<UserRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    fn record(&self, sql: &str, params: &[Value]) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push((sql.to_string(), params.to_vec()));
        calls.len()
    }
}

pub struct TrackingCursor {
    inner: VecCursor<UserRow>,
    closes: Arc<AtomicUsize>,
    fail_close: bool,
}

impl RowCursor for TrackingCursor {
    type Row = UserRow;

    fn next_row(
        &mut self,
    ) -> impl std::future::Future<Output = QueryResult<Option<UserRow>>> + Send {
        self.inner.next_row()
    }

    fn close(&mut self) -> impl std::future::Future<Output = QueryResult<()>> + Send {
        self.closes.fetch_add(1, Ordering::SeqCst);
        let fail = self.fail_close;
        let closed = self.inner.close();
        async move {
            closed.await?;
            if fail {
                Err(QueryError::execution("close failed"))
            } else {
                Ok(())
            }
        }
    }
}

impl Executor for RecordingExecutor {
    type Cursor = TrackingCursor;

    async fn execute(&self, sql: &str, params: &[Value]) -> QueryResult<u64> {
        self.record(sql, params);
        Ok(1)
    }

    async fn execute_returning_key(
        &self,
        sql: &str,
        params: &[Value],
    ) -> QueryResult<Option<Value>> {
        let n = self.record(sql, params);
        Ok(Some(Value::Int(n as i64)))
    }

    async fn query(&self, sql: &str, params: &[Value]) -> QueryResult<TrackingCursor> {
        self.record(sql, params);
        Ok(TrackingCursor {
            inner: VecCursor::new(self.rows.clone()),
            closes: Arc::clone(&self.closes),
            fail_close: self.fail_close,
        })
    }
}
