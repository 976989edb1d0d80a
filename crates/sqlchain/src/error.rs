//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for sqlchain operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building, rendering, or executing statements.
///
/// Everything up to [`QueryError::BatchTextMismatch`] is a usage error: the
/// builder was driven into a state it cannot render. The remaining variants
/// come from the execution boundary.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Identifier is empty or contains the quoting character
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Argument count does not match the `?` count of a fragment
    #[error("Expected {expected} placeholders, got {found} in expression {expr:?}")]
    PlaceholderMismatch {
        expected: usize,
        found: usize,
        expr: String,
    },

    /// Column declared twice in one CREATE TABLE
    #[error("Column {0:?} already exists")]
    DuplicateColumn(String),

    /// Column modifier used before any column was added
    #[error("No columns added")]
    NoColumns,

    /// NULL passed where a non-null value is required
    #[error("NULL is not allowed for {0:?}")]
    NullValue(String),

    /// INSERT rendered without values
    #[error("INSERT has no values")]
    EmptyInsert,

    /// INSERT IGNORE combined with ON DUPLICATE KEY UPDATE
    #[error("IGNORE can't be combined with ON DUPLICATE KEY UPDATE")]
    ConflictingModifiers,

    /// UPDATE rendered without SET values
    #[error("UPDATE has no values")]
    EmptyUpdate,

    /// `*` mixed with explicit SELECT expressions
    #[error("Can't mix SELECT * with explicit expressions")]
    MixedSelection,

    /// SELECT rendered with nothing selected
    #[error("Selected expression list is empty")]
    EmptySelection,

    /// DESC requested without an ORDER BY expression
    #[error("Specify order expression first")]
    NoOrderExpression,

    /// LIMIT below 1
    #[error("Invalid LIMIT {0}, must be positive")]
    InvalidLimit(i64),

    /// OFFSET below 0
    #[error("Invalid OFFSET {0}, must be non-negative")]
    InvalidOffset(i64),

    /// Statement text differs from the first statement of a batch
    #[error("Can't add {found:?} to a batch, expected {expected:?}")]
    BatchTextMismatch { expected: String, found: String },

    /// Statement execution failed in the driver
    #[error("Execution error: {0}")]
    Execution(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl QueryError {
    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this error comes from misusing the builder API.
    pub fn is_usage_error(&self) -> bool {
        !matches!(
            self,
            Self::Execution(_)
                | Self::Decode { .. }
                | Self::Serialization(_)
                | Self::Config(_)
                | Self::Other(_)
        )
    }

    /// Check if this is a batch text mismatch
    pub fn is_batch_mismatch(&self) -> bool {
        matches!(self, Self::BatchTextMismatch { .. })
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for QueryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
