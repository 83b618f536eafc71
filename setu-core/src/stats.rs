//! Derived aggregation views
//!
//! Stateless read-side helpers, recomputed from the current store snapshot
//! on every call. Zero denominators yield 0% rather than a division error.

use serde::{Deserialize, Serialize};

use shared::models::{AttendanceRecord, AttendanceStatus, DepartmentStats, Grievance, Vacancy};

// ============================================================================
// Response Types
// ============================================================================

/// Workforce-wide headline numbers for the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceOverview {
    pub total_employees: u32,
    pub present_today: u32,
    /// Percentage 0-100
    pub attendance_rate: u32,
    pub pending_grievances: usize,
    pub total_sanctioned: u32,
    pub total_vacant: u32,
    /// Percentage 0-100
    pub fill_rate: u32,
}

/// Per-department sanctioned/filled rollup for vacancy breakdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentFillRate {
    pub department: String,
    pub sanctioned: u32,
    pub filled: u32,
    /// Percentage 0-100
    pub fill_rate: u32,
}

/// The acting user's attendance summary for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    pub present_days: usize,
    /// Days with any record other than holiday
    pub total_work_days: usize,
}

// ============================================================================
// Views
// ============================================================================

/// round(numerator / denominator × 100), 0 when the denominator is 0
fn percentage(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((numerator as f64 / denominator as f64) * 100.0).round() as u32
}

/// Headline totals across all departments
pub fn workforce_overview(
    department_stats: &[DepartmentStats],
    vacancies: &[Vacancy],
    grievances: &[Grievance],
) -> WorkforceOverview {
    let total_employees = department_stats.iter().map(|d| d.total_employees).sum();
    let present_today = department_stats.iter().map(|d| d.present_today).sum();
    let total_sanctioned = vacancies.iter().map(|v| v.sanctioned_posts).sum();
    let total_filled: u32 = vacancies.iter().map(|v| v.filled_posts).sum();
    let total_vacant = vacancies.iter().map(|v| v.vacant_posts).sum();

    WorkforceOverview {
        total_employees,
        present_today,
        attendance_rate: percentage(present_today, total_employees),
        pending_grievances: pending_grievances(grievances),
        total_sanctioned,
        total_vacant,
        fill_rate: percentage(total_filled, total_sanctioned),
    }
}

/// Sanctioned/filled sums grouped by department, in first-seen order
pub fn vacancy_by_department(vacancies: &[Vacancy]) -> Vec<DepartmentFillRate> {
    let mut rollup: Vec<DepartmentFillRate> = Vec::new();
    for v in vacancies {
        match rollup.iter_mut().find(|r| r.department == v.department) {
            Some(row) => {
                row.sanctioned += v.sanctioned_posts;
                row.filled += v.filled_posts;
            }
            None => rollup.push(DepartmentFillRate {
                department: v.department.clone(),
                sanctioned: v.sanctioned_posts,
                filled: v.filled_posts,
                fill_rate: 0,
            }),
        }
    }
    for row in &mut rollup {
        row.fill_rate = percentage(row.filled, row.sanctioned);
    }
    rollup
}

/// Count of grievances still in the workflow (anything not resolved)
pub fn pending_grievances(grievances: &[Grievance]) -> usize {
    grievances.iter().filter(|g| !g.status.is_terminal()).count()
}

/// The given user's attendance for the month of `today` (YYYY-MM-DD)
pub fn monthly_attendance(
    records: &[AttendanceRecord],
    user_id: &str,
    today: &str,
) -> MonthlyAttendance {
    // "YYYY-MM" prefix selects the month
    let month = today.get(..7).unwrap_or(today);
    let monthly: Vec<_> = records
        .iter()
        .filter(|r| r.user_id == user_id && r.date.starts_with(month))
        .collect();

    MonthlyAttendance {
        present_days: monthly
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count(),
        total_work_days: monthly
            .iter()
            .filter(|r| r.status != AttendanceStatus::Holiday)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{GrievanceCreate, GrievancePriority};

    fn vacancy(id: &str, department: &str, sanctioned: u32, filled: u32) -> Vacancy {
        Vacancy {
            id: id.to_string(),
            department: department.to_string(),
            designation: "Engineer".to_string(),
            sanctioned_posts: sanctioned,
            filled_posts: filled,
            vacant_posts: sanctioned - filled,
        }
    }

    fn dept(department: &str, total: u32, present: u32) -> DepartmentStats {
        DepartmentStats {
            department: department.to_string(),
            total_employees: total,
            present_today: present,
            on_leave: 0,
            pending_grievances: 0,
        }
    }

    fn record(user_id: &str, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("att-{date}"),
            user_id: user_id.to_string(),
            date: date.to_string(),
            status,
            check_in: None,
            check_out: None,
        }
    }

    fn grievance(id: &str, status: shared::models::GrievanceStatus) -> Grievance {
        let create = GrievanceCreate {
            user_id: "emp-001".to_string(),
            category: "General".to_string(),
            subject: "subject".to_string(),
            description: "description".to_string(),
            priority: GrievancePriority::Low,
        };
        Grievance {
            id: id.to_string(),
            user_id: create.user_id,
            category: create.category,
            subject: create.subject,
            description: create.description,
            status,
            priority: create.priority,
            created_at: "2026-01-01T09:00:00".to_string(),
            updated_at: "2026-01-01T09:00:00".to_string(),
            timeline: Vec::new(),
        }
    }

    #[test]
    fn test_fill_rate_example() {
        // 42 of 50 sanctioned posts filled → 84%, 8 vacant
        let vacancies = [vacancy("vac-1", "Public Works", 50, 42)];
        let overview = workforce_overview(&[], &vacancies, &[]);

        assert_eq!(overview.fill_rate, 84);
        assert_eq!(overview.total_vacant, 8);
    }

    #[test]
    fn test_attendance_rate_rounds() {
        let stats = [dept("Health", 180, 165), dept("Finance", 45, 42)];
        let overview = workforce_overview(&stats, &[], &[]);

        assert_eq!(overview.total_employees, 225);
        assert_eq!(overview.present_today, 207);
        // 207 / 225 = 92%
        assert_eq!(overview.attendance_rate, 92);
    }

    #[test]
    fn test_zero_denominators_yield_zero_percent() {
        let overview = workforce_overview(&[], &[], &[]);
        assert_eq!(overview.attendance_rate, 0);
        assert_eq!(overview.fill_rate, 0);
    }

    #[test]
    fn test_vacancy_rollup_groups_by_department() {
        let vacancies = [
            vacancy("vac-1", "Public Works", 50, 42),
            vacancy("vac-2", "Public Works", 10, 8),
            vacancy("vac-3", "Health", 30, 22),
        ];

        let rollup = vacancy_by_department(&vacancies);

        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].department, "Public Works");
        assert_eq!(rollup[0].sanctioned, 60);
        assert_eq!(rollup[0].filled, 50);
        assert_eq!(rollup[0].fill_rate, 83);
        assert_eq!(rollup[1].department, "Health");
        assert_eq!(rollup[1].fill_rate, 73);
    }

    #[test]
    fn test_pending_grievances_excludes_resolved() {
        use shared::models::GrievanceStatus;
        let grievances = [
            grievance("grv-1", GrievanceStatus::Submitted),
            grievance("grv-2", GrievanceStatus::InReview),
            grievance("grv-3", GrievanceStatus::Resolved),
            grievance("grv-4", GrievanceStatus::Escalated),
        ];
        assert_eq!(pending_grievances(&grievances), 3);
    }

    #[test]
    fn test_monthly_attendance_filters_month_and_user() {
        let records = [
            record("emp-001", "2026-01-03", AttendanceStatus::Present),
            record("emp-001", "2026-01-02", AttendanceStatus::Present),
            record("emp-001", "2026-01-01", AttendanceStatus::Holiday),
            record("emp-001", "2025-12-31", AttendanceStatus::Present),
            record("emp-002", "2026-01-02", AttendanceStatus::Present),
        ];

        let monthly = monthly_attendance(&records, "emp-001", "2026-01-04");

        assert_eq!(monthly.present_days, 2);
        // Holiday drops out of work days; December rows drop out entirely
        assert_eq!(monthly.total_work_days, 2);
    }

    #[test]
    fn test_monthly_attendance_counts_leave_as_work_day() {
        let records = [
            record("emp-001", "2026-01-02", AttendanceStatus::Leave),
            record("emp-001", "2026-01-03", AttendanceStatus::Absent),
        ];

        let monthly = monthly_attendance(&records, "emp-001", "2026-01-04");

        assert_eq!(monthly.present_days, 0);
        assert_eq!(monthly.total_work_days, 2);
    }
}
