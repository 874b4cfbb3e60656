//! Error Types

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Dispatcher-level error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool validation failed
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Whether the caller supplied bad input, as opposed to a server-side fault
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::ToolValidation(_))
    }

    /// Convert to a message safe to hand back to the calling agent
    pub fn user_message(&self) -> String {
        match self {
            Self::ToolNotFound(name) => format!("Unknown tool: {name}"),
            Self::ToolValidation(msg) => format!("Invalid tool input: {msg}"),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for CoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
