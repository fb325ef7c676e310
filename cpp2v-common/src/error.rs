//! Error handling for the cpp2v translator
//!
//! A run either produces a complete IR file for the whole translation unit
//! or fails with one of these errors and produces nothing. The only error
//! raised by type lowering itself is `UnsupportedConstruct`.

use thiserror::Error;

/// Main translator error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    #[error("Unsupported {construct}: {message}")]
    UnsupportedConstruct {
        construct: String,
        message: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Result alias used across the translator crates
pub type Result<T> = std::result::Result<T, TranslationError>;

impl TranslationError {
    /// Create an unsupported-construct error
    pub fn unsupported(construct: impl Into<String>, message: impl Into<String>) -> Self {
        TranslationError::UnsupportedConstruct {
            construct: construct.into(),
            message: message.into(),
        }
    }

    /// True for the fatal lowering outcome
    pub fn is_unsupported(&self) -> bool {
        matches!(self, TranslationError::UnsupportedConstruct { .. })
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for TranslationError {
    fn from(err: std::io::Error) -> Self {
        TranslationError::IoError {
            message: err.to_string(),
        }
    }
}

/// Convert from serde_json::Error (malformed AST dumps)
impl From<serde_json::Error> for TranslationError {
    fn from(err: serde_json::Error) -> Self {
        TranslationError::InvalidInput {
            message: err.to_string(),
        }
    }
}
