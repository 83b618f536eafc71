//! Vacancy Model (岗位空缺)

use serde::{Deserialize, Serialize};

/// Sanctioned-vs-filled headcount for one designation
///
/// Static reference data; the transparency dashboard renders it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: String,
    pub department: String,
    pub designation: String,
    /// Officially approved headcount, independent of how many are filled
    pub sanctioned_posts: u32,
    pub filled_posts: u32,
    /// sanctioned - filled, precomputed in the reference data
    pub vacant_posts: u32,
}

impl Vacancy {
    /// Reference-data invariant: vacant = sanctioned - filled
    pub fn counts_consistent(&self) -> bool {
        self.vacant_posts == self.sanctioned_posts.saturating_sub(self.filled_posts)
    }
}
