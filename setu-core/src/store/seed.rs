//! Synthetic reference dataset
//!
//! Loaded once at startup so every dashboard renders non-empty on first
//! launch. Seed rows keep stable short ids ("att-1", "grv-001", …) rather
//! than generated ones; everything created at runtime goes through
//! `shared::util::tagged_id`.

use shared::models::{
    AttendanceRecord, AttendanceStatus, DepartmentStats, Grievance, GrievancePriority,
    GrievanceStatus, Notification, NotificationType, PayrollRecord, PayrollStatus, TimelineItem,
    Vacancy,
};

/// The demo employee all personal seed rows belong to
pub const SEED_USER_ID: &str = "emp-001";

fn att(
    id: &str,
    date: &str,
    status: AttendanceStatus,
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        user_id: SEED_USER_ID.to_string(),
        date: date.to_string(),
        status,
        check_in: check_in.map(str::to_string),
        check_out: check_out.map(str::to_string),
    }
}

pub fn attendance() -> Vec<AttendanceRecord> {
    vec![
        att("att-1", "2026-01-03", AttendanceStatus::Present, Some("09:05"), Some("17:30")),
        att("att-2", "2026-01-02", AttendanceStatus::Present, Some("09:00"), Some("17:45")),
        att("att-3", "2026-01-01", AttendanceStatus::Holiday, None, None),
        att("att-4", "2025-12-31", AttendanceStatus::Present, Some("09:10"), Some("17:30")),
        att("att-5", "2025-12-30", AttendanceStatus::Leave, None, None),
    ]
}

fn timeline_item(id: &str, status: &str, message: &str, timestamp: &str, by: Option<&str>) -> TimelineItem {
    TimelineItem {
        id: id.to_string(),
        status: status.to_string(),
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        by: by.map(str::to_string),
    }
}

pub fn grievances() -> Vec<Grievance> {
    vec![
        Grievance {
            id: "grv-001".to_string(),
            user_id: SEED_USER_ID.to_string(),
            category: "Infrastructure".to_string(),
            subject: "Office Air Conditioning Not Working".to_string(),
            description: "The AC in the Public Works department office has not been functioning \
                          for the past week. This is affecting work productivity."
                .to_string(),
            status: GrievanceStatus::InReview,
            priority: GrievancePriority::Medium,
            created_at: "2025-12-28T10:30:00".to_string(),
            updated_at: "2025-12-30T14:00:00".to_string(),
            timeline: vec![
                timeline_item("t1", "Submitted", "Grievance registered successfully", "2025-12-28T10:30:00", None),
                timeline_item("t2", "In Review", "Assigned to Maintenance Department", "2025-12-30T14:00:00", Some("Officer Sharma")),
            ],
        },
        Grievance {
            id: "grv-002".to_string(),
            user_id: SEED_USER_ID.to_string(),
            category: "Payroll".to_string(),
            subject: "Travel Allowance Not Credited".to_string(),
            description: "The travel allowance for December 2025 field visits has not been \
                          credited to my account."
                .to_string(),
            status: GrievanceStatus::Resolved,
            priority: GrievancePriority::Low,
            created_at: "2025-12-20T09:00:00".to_string(),
            updated_at: "2025-12-25T16:00:00".to_string(),
            timeline: vec![
                timeline_item("t1", "Submitted", "Grievance registered successfully", "2025-12-20T09:00:00", None),
                timeline_item("t2", "In Review", "Forwarded to Accounts Section", "2025-12-21T11:00:00", Some("HR Department")),
                timeline_item("t3", "Resolved", "Amount credited. Please check your account.", "2025-12-25T16:00:00", Some("Accounts Officer")),
            ],
        },
    ]
}

fn pay(id: &str, month: &str, allowances: f64, deductions: f64, paid_on: &str) -> PayrollRecord {
    let basic_salary = 45000.0;
    PayrollRecord {
        id: id.to_string(),
        user_id: SEED_USER_ID.to_string(),
        month: month.to_string(),
        year: 2025,
        basic_salary,
        allowances,
        deductions,
        net_salary: basic_salary + allowances - deductions,
        status: PayrollStatus::Paid,
        paid_on: Some(paid_on.to_string()),
    }
}

pub fn payroll() -> Vec<PayrollRecord> {
    vec![
        pay("pay-1", "December", 12000.0, 5200.0, "2025-12-28"),
        pay("pay-2", "November", 12000.0, 5200.0, "2025-11-28"),
        pay("pay-3", "October", 11500.0, 5200.0, "2025-10-28"),
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "not-1".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Salary Credited".to_string(),
            message: "Your December 2025 salary of ₹51,800 has been credited.".to_string(),
            kind: NotificationType::Success,
            read: false,
            created_at: "2025-12-28T10:00:00".to_string(),
            link: Some("/payroll".to_string()),
        },
        Notification {
            id: "not-2".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Grievance Update".to_string(),
            message: "Your grievance regarding AC has been assigned for review.".to_string(),
            kind: NotificationType::Info,
            read: false,
            created_at: "2025-12-30T14:00:00".to_string(),
            link: Some("/grievances".to_string()),
        },
        Notification {
            id: "not-3".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Attendance Reminder".to_string(),
            message: "Please mark your attendance for today.".to_string(),
            kind: NotificationType::Warning,
            read: true,
            created_at: "2026-01-04T09:00:00".to_string(),
            link: Some("/attendance".to_string()),
        },
    ]
}

fn vac(id: &str, department: &str, designation: &str, sanctioned: u32, filled: u32) -> Vacancy {
    Vacancy {
        id: id.to_string(),
        department: department.to_string(),
        designation: designation.to_string(),
        sanctioned_posts: sanctioned,
        filled_posts: filled,
        vacant_posts: sanctioned - filled,
    }
}

pub fn vacancies() -> Vec<Vacancy> {
    vec![
        vac("vac-1", "Public Works", "Junior Engineer", 50, 42),
        vac("vac-2", "Public Works", "Executive Engineer", 10, 8),
        vac("vac-3", "Health", "Medical Officer", 30, 22),
        vac("vac-4", "Health", "Nurse", 100, 78),
        vac("vac-5", "Sanitation", "Sanitary Inspector", 25, 20),
        vac("vac-6", "Sanitation", "Supervisor", 15, 12),
        vac("vac-7", "Finance", "Accountant", 20, 18),
        vac("vac-8", "Administration", "Clerk", 40, 35),
    ]
}

fn dept(department: &str, total: u32, present: u32, on_leave: u32, pending: u32) -> DepartmentStats {
    DepartmentStats {
        department: department.to_string(),
        total_employees: total,
        present_today: present,
        on_leave,
        pending_grievances: pending,
    }
}

pub fn department_stats() -> Vec<DepartmentStats> {
    vec![
        dept("Public Works", 120, 108, 8, 5),
        dept("Health", 180, 165, 12, 8),
        dept("Sanitation", 250, 235, 10, 3),
        dept("Finance", 45, 42, 2, 1),
        dept("Administration", 60, 55, 4, 2),
    ]
}
