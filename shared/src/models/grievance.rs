//! Grievance Model (申诉管理)

use serde::{Deserialize, Serialize};

/// Grievance workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrievanceStatus {
    Submitted,
    InReview,
    Resolved,
    Escalated,
}

impl GrievanceStatus {
    /// Wire spelling ("submitted", "in-review", "resolved", "escalated")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::InReview => "in-review",
            Self::Resolved => "resolved",
            Self::Escalated => "escalated",
        }
    }

    /// Timeline label: first letter capitalized, dash replaced by a space
    pub fn human_label(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InReview => "In review",
            Self::Resolved => "Resolved",
            Self::Escalated => "Escalated",
        }
    }

    /// Resolved grievances drop out of the pending count; the dashboard
    /// hides further workflow actions on them
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl std::fmt::Display for GrievanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority assigned at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrievancePriority {
    Low,
    Medium,
    High,
}

/// One audit-trail entry on a grievance, immutable once appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Sequential per-grievance id ("t1", "t2", …)
    pub id: String,
    /// Human status label at the time of the entry
    pub status: String,
    pub message: String,
    /// ISO 8601
    pub timestamp: String,
    /// Acting officer/section; None for the submission entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

/// Grievance with append-only audit timeline, ordered by occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grievance {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub status: GrievanceStatus,
    pub priority: GrievancePriority,
    /// ISO 8601
    pub created_at: String,
    /// ISO 8601, bumped on every status change
    pub updated_at: String,
    pub timeline: Vec<TimelineItem>,
}

/// Submit grievance payload - id, status, timestamps and timeline are
/// assigned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrievanceCreate {
    pub user_id: String,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: GrievancePriority,
}
