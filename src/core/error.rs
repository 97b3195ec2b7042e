use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Cannot compute interval: batch has no common timestamp")]
    MissingTimestamp,

    #[error("Batch capacity must be greater than 0, got {0}")]
    InvalidCapacity(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for batch operations
pub type Result<T> = std::result::Result<T, BatchError>;

impl BatchError {
    /// Creates a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if this error points at a caller bug rather than bad input
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, Self::MissingTimestamp)
    }

    /// Returns the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingTimestamp => "precondition",
            Self::InvalidCapacity(_) => "validation",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}
