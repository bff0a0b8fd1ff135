use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest schema error: {0}")]
    Schema(String),

    #[error("Invalid version format: {0}")]
    Version(String),

    #[error("Packaging script failed: {0}")]
    Script(String),

    #[error("Git operation failed: {0}")]
    Vcs(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        BumpError::Usage(msg.into())
    }

    /// Create a schema error with context
    pub fn schema(msg: impl Into<String>) -> Self {
        BumpError::Schema(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a script error with context
    pub fn script(msg: impl Into<String>) -> Self {
        BumpError::Script(msg.into())
    }

    /// Create a VCS error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        BumpError::Vcs(msg.into())
    }

    /// Create a clipboard error with context
    pub fn clipboard(msg: impl Into<String>) -> Self {
        BumpError::Clipboard(msg.into())
    }
}
