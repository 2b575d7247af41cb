//! Error types for annotab

/// Result type alias using annotab's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for annotab operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Result aggregation errors (treated as fatal to the batch)
    #[error("aggregation error: {0}")]
    Aggregation(String),

    /// Report rendering errors
    #[error("render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Batch deadline expired before all tasks terminated
    #[error("batch deadline exceeded")]
    Timeout,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new aggregation error
    pub fn aggregation(msg: impl Into<String>) -> Self {
        Self::Aggregation(msg.into())
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
