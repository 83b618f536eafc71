//! User Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role - decides which dashboard the frontend renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Officer,
    Admin,
    Citizen,
}

impl UserRole {
    /// Roles that move grievances through the review workflow
    pub fn can_review_grievances(&self) -> bool {
        matches!(self, Self::Officer | Self::Admin)
    }

    /// Roles with access to workforce-wide aggregates
    pub fn can_view_department_stats(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => write!(f, "employee"),
            Self::Officer => write!(f, "officer"),
            Self::Admin => write!(f, "admin"),
            Self::Citizen => write!(f, "citizen"),
        }
    }
}

/// Authenticated user profile
///
/// The role is fixed for the lifetime of a session; a new login produces a
/// fresh profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub designation: String,
    /// Municipal employee number (e.g. "NMC-2024-0542"), "N/A" for citizens
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Joining date (YYYY-MM-DD), "N/A" for citizens
    pub join_date: String,
    pub phone: String,
}
