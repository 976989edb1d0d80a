use crate::error::{QueryError, QueryResult};
use serde::Deserialize;

/// Level at which SQL events are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Configuration for [`LoggedExecutor`](super::LoggedExecutor).
///
/// Defaults: enabled, `debug` level, SQL truncated to 200 bytes, parameters
/// not logged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqlLogConfig {
    /// Whether events are emitted at all.
    pub enabled: bool,
    pub level: LogLevel,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Include bound parameter values in events.
    pub log_params: bool,
}

impl Default for SqlLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Debug,
            max_sql_length: Some(200),
            log_params: false,
        }
    }
}

#[derive(Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    sql_log: SqlLogConfig,
}

impl SqlLogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the `[sql_log]` table of a TOML document.
    ///
    /// A document without the table yields the defaults.
    pub fn from_toml_str(raw: &str) -> QueryResult<Self> {
        let doc: ConfigDocument = toml::from_str(raw)?;
        doc.sql_log.validate()?;
        Ok(doc.sql_log)
    }

    fn validate(&self) -> QueryResult<()> {
        if self.max_sql_length == Some(0) {
            return Err(QueryError::config(
                "sql_log.max_sql_length must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn enable(mut self) -> Self {
        self.enabled = true;
        self
    }

    pub fn disable(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    pub fn with_params(mut self, log_params: bool) -> Self {
        self.log_params = log_params;
        self
    }
}
