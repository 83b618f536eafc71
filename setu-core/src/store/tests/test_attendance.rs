use super::*;
use shared::models::NotificationType;

#[test]
fn test_mark_present_creates_record() {
    let mut store = create_test_store();

    store.mark_attendance("emp-001", AttendanceMark::Present);

    let record = store.today_attendance("emp-001").unwrap();
    assert_eq!(record.status, AttendanceStatus::Present);
    assert!(record.check_in.as_deref().is_some_and(|t| !t.is_empty()));
    assert!(record.check_out.is_none());
    assert_eq!(store.attendance().len(), 1);
}

#[test]
fn test_mark_absent_creates_record_without_check_in() {
    let mut store = create_test_store();

    store.mark_attendance("emp-001", AttendanceMark::Absent);

    let record = store.today_attendance("emp-001").unwrap();
    assert_eq!(record.status, AttendanceStatus::Absent);
    assert!(record.check_in.is_none());
}

#[test]
fn test_remark_updates_in_place() {
    let mut store = create_test_store();

    store.mark_attendance("emp-001", AttendanceMark::Present);
    let first_id = store.today_attendance("emp-001").unwrap().id.clone();

    store.mark_attendance("emp-001", AttendanceMark::Absent);

    // Still one record for the day, same identity, new status
    assert_eq!(store.attendance().len(), 1);
    let record = store.today_attendance("emp-001").unwrap();
    assert_eq!(record.id, first_id);
    assert_eq!(record.status, AttendanceStatus::Absent);
}

#[test]
fn test_remark_resets_check_in() {
    let mut store = create_test_store();

    // First absent mark leaves check_in empty (create path)
    store.mark_attendance("emp-001", AttendanceMark::Absent);
    assert!(store.today_attendance("emp-001").unwrap().check_in.is_none());

    // Re-marking goes through the update path, which always stamps check_in
    // with the current call time - the documented non-idempotence
    store.mark_attendance("emp-001", AttendanceMark::Absent);
    assert!(store.today_attendance("emp-001").unwrap().check_in.is_some());
}

#[test]
fn test_at_most_one_record_per_user_and_day() {
    let mut store = create_test_store();

    store.mark_attendance("emp-001", AttendanceMark::Present);
    store.mark_attendance("emp-001", AttendanceMark::Present);
    store.mark_attendance("emp-001", AttendanceMark::Absent);
    store.mark_attendance("emp-002", AttendanceMark::Present);

    let today = shared::util::today_date();
    for user in ["emp-001", "emp-002"] {
        let count = store
            .attendance()
            .iter()
            .filter(|r| r.user_id == user && r.date == today)
            .count();
        assert_eq!(count, 1, "expected one record for {user}");
    }
    assert_eq!(store.attendance().len(), 2);
}

#[test]
fn test_today_attendance_none_when_unmarked() {
    let store = create_test_store();
    assert!(store.today_attendance("emp-001").is_none());
}

#[test]
fn test_mark_appends_success_notification() {
    let mut store = create_test_store();

    store.mark_attendance("emp-001", AttendanceMark::Present);

    let notification = latest_notification(&store);
    assert_eq!(notification.user_id, "emp-001");
    assert_eq!(notification.title, "Attendance Marked");
    assert_eq!(notification.kind, NotificationType::Success);
    assert!(notification.message.contains("present"));
    assert!(!notification.read);
}
