use std::time::Duration;

/// Unified database error type for connection lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// MongoDB driver errors
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection could not be verified
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Connecting did not finish within the configured timeout
    #[error("Connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Closing the client did not finish within the given timeout
    #[error("Disconnect timed out after {0:?}")]
    DisconnectTimeout(Duration),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
