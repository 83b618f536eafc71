//! Attendance Model (考勤管理)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance status for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    Holiday,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
            Self::Leave => write!(f, "leave"),
            Self::Holiday => write!(f, "holiday"),
        }
    }
}

/// Self-marking input - only present/absent can be marked from the
/// dashboard; leave and holiday rows come from the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceMark {
    Present,
    Absent,
}

impl From<AttendanceMark> for AttendanceStatus {
    fn from(mark: AttendanceMark) -> Self {
        match mark {
            AttendanceMark::Present => Self::Present,
            AttendanceMark::Absent => Self::Absent,
        }
    }
}

impl fmt::Display for AttendanceMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// One attendance record per (user, calendar day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    /// Calendar day (YYYY-MM-DD)
    pub date: String,
    pub status: AttendanceStatus,
    /// Check-in time (HH:MM); reset on every re-mark of the same day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    /// Check-out time (HH:MM); populated by the reference data only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
}
