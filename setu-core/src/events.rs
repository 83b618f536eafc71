//! Store change events
//!
//! Broadcast by [`WorkforceStore`](crate::store::WorkforceStore) after every
//! mutation so presentation consumers can re-render from the updated
//! snapshot instead of holding copies.

use serde::{Deserialize, Serialize};

/// One store mutation, addressed by resource
///
/// # Example
/// - `resource`: "grievance"
/// - `action`: "updated"
/// - `id`: "grv-001"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEvent {
    /// Resource type ("attendance", "grievance", "notification")
    pub resource: String,
    /// Change type ("created", "updated", "marked", "read", "read_all")
    pub action: String,
    /// Resource id; "*" for collection-wide changes
    pub id: String,
}

impl StoreEvent {
    pub fn new(resource: impl Into<String>, action: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
            id: id.into(),
        }
    }
}
