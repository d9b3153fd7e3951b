//! Error types for ZQLZ

use thiserror::Error;

/// Core error type for ZQLZ operations
#[derive(Error, Debug)]
pub enum ZqlzError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    /// A result row did not have the shape the caller expected
    #[error("Decode error: {0}")]
    Decode(String),

    /// A value could not be converted to the numeric type a caller required
    #[error("Coercion error: {0}")]
    Coercion(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

impl ZqlzError {
    /// Whether this error came from executing a statement rather than from
    /// reaching the server or reading its answer
    pub fn is_query_error(&self) -> bool {
        matches!(self, ZqlzError::Query(_) | ZqlzError::NotSupported(_))
    }
}

/// Result type alias for ZQLZ operations
pub type Result<T> = std::result::Result<T, ZqlzError>;
