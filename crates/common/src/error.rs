//! Error types shared across Handsign crates.

use std::path::PathBuf;

/// Top-level error type for Handsign operations.
#[derive(Debug, thiserror::Error)]
pub enum HandsignError {
    #[error("Invalid frame: {message}")]
    InvalidFrame { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Replay error: {message}")]
    Replay { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using HandsignError.
pub type HandsignResult<T> = Result<T, HandsignError>;

impl HandsignError {
    pub fn invalid_frame(msg: impl Into<String>) -> Self {
        Self::InvalidFrame {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay {
            message: msg.into(),
        }
    }

    /// Whether this error was caused by malformed detector output.
    pub fn is_invalid_frame(&self) -> bool {
        matches!(self, Self::InvalidFrame { .. })
    }
}
