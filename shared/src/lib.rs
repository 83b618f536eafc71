//! Shared types for the NagarSetu workforce core
//!
//! Domain entities, create payloads, error types, and utility functions
//! used across the workspace crates.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
