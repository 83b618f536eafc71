//! Payroll Model (工资单)
//!
//! Read-only to the dashboard; rows are produced by the external payroll
//! process.

use serde::{Deserialize, Serialize};

/// Payment processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    Pending,
    Processed,
    Paid,
}

/// One month's salary slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub id: String,
    pub user_id: String,
    /// Month name ("December")
    pub month: String,
    pub year: i32,
    pub basic_salary: f64,
    pub allowances: f64,
    pub deductions: f64,
    /// basic + allowances - deductions, fixed at creation time
    pub net_salary: f64,
    pub status: PayrollStatus,
    /// Payment date (YYYY-MM-DD), set once paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<String>,
}

impl PayrollRecord {
    /// Creation-time invariant: net = basic + allowances - deductions
    pub fn net_consistent(&self) -> bool {
        (self.basic_salary + self.allowances - self.deductions - self.net_salary).abs() < 1e-6
    }
}
