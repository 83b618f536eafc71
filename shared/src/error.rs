//! Unified error type for the workforce core
//!
//! Domain store mutations are best-effort and never return errors (unknown
//! ids are ignored); this type covers the fallible edges - input validation
//! and the session cache file.

use thiserror::Error;

/// Result alias for core operations
pub type AppResult<T> = Result<T, AppError>;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }
}
