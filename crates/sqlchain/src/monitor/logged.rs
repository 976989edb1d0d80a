use super::config::SqlLogConfig;
use super::{StatementKind, truncate_sql_bytes};
use crate::client::Executor;
use crate::error::QueryResult;
use crate::value::Value;
use std::fmt;
use tracing::Level;

/// An [`Executor`] wrapper that logs every statement before running it.
///
/// Events are emitted even when the statement later fails, so the log shows
/// exactly what was sent to the driver.
#[derive(Debug, Clone)]
pub struct LoggedExecutor<E> {
    inner: E,
    config: SqlLogConfig,
}

impl<E: Executor> LoggedExecutor<E> {
    /// Wrap `inner` with the default configuration.
    pub fn new(inner: E) -> Self {
        Self::with_config(inner, SqlLogConfig::default())
    }

    pub fn with_config(inner: E, config: SqlLogConfig) -> Self {
        Self { inner, config }
    }

    pub fn config(&self) -> &SqlLogConfig {
        &self.config
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }

    fn truncate_sql(&self, sql: &str) -> String {
        match self.config.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    /// `params` is one parameter set, or every set of a batch; `param_count`
    /// is the size of one set.
    fn log(&self, sql: &str, param_count: usize, params: &dyn fmt::Debug, batch_size: Option<usize>) {
        if !self.config.enabled {
            return;
        }

        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let level: Level = self.config.level.into();
        let kind = StatementKind::from_sql(sql);
        let sql = self.truncate_sql(sql);
        let batch_size = batch_size.unwrap_or(1);
        if self.config.log_params {
            emit_at_level!(
                level,
                target: "sqlchain.sql",
                kind = ?kind,
                param_count,
                batch_size,
                sql = %sql,
                params = ?params,
            );
        } else {
            emit_at_level!(
                level,
                target: "sqlchain.sql",
                kind = ?kind,
                param_count,
                batch_size,
                sql = %sql,
            );
        }
    }
}

impl<E: Executor> Executor for LoggedExecutor<E> {
    type Cursor = E::Cursor;

    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<u64>> + Send {
        self.log(sql, params.len(), &params, None);
        self.inner.execute(sql, params)
    }

    fn execute_returning_key(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<Option<Value>>> + Send {
        self.log(sql, params.len(), &params, None);
        self.inner.execute_returning_key(sql, params)
    }

    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = QueryResult<Self::Cursor>> + Send {
        self.log(sql, params.len(), &params, None);
        self.inner.query(sql, params)
    }

    fn execute_batch(
        &self,
        sql: &str,
        param_sets: &[Vec<Value>],
    ) -> impl std::future::Future<Output = QueryResult<Vec<i64>>> + Send {
        let param_count = param_sets.first().map_or(0, Vec::len);
        self.log(sql, param_count, &param_sets, Some(param_sets.len()));
        self.inner.execute_batch(sql, param_sets)
    }
}
