/// Result alias that carries the custom [`SoftStartError`] type.
pub type Result<T> = std::result::Result<T, SoftStartError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SoftStartError {
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// A caller handed the library an argument outside its documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl SoftStartError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SoftStartError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SoftStartError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
