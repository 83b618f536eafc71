//! Department Stats Model

use serde::{Deserialize, Serialize};

/// Aggregate headcount/attendance/grievance counters for one department
///
/// Static reference data consumed by the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: String,
    pub total_employees: u32,
    pub present_today: u32,
    pub on_leave: u32,
    pub pending_grievances: u32,
}
