use super::*;

#[test]
fn test_mutations_broadcast_store_events() {
    let mut store = create_test_store();
    let mut events = store.subscribe();

    store.mark_attendance("emp-001", AttendanceMark::Present);

    // The side-effect notification broadcasts first, then the attendance event
    let first = events.try_recv().unwrap();
    assert_eq!(first.resource, "notification");
    assert_eq!(first.action, "created");

    let second = events.try_recv().unwrap();
    assert_eq!(second.resource, "attendance");
    assert_eq!(second.action, "marked");
    assert_eq!(second.id, store.attendance()[0].id);

    assert!(events.try_recv().is_err());
}

#[test]
fn test_mutation_without_subscribers_still_applies() {
    let mut store = create_test_store();

    store.add_grievance(create_grievance_payload("emp-001", "No listeners"));

    assert_eq!(store.grievances().len(), 1);
}

#[test]
fn test_noop_mutation_broadcasts_nothing() {
    let mut store = create_test_store();
    let mut events = store.subscribe();

    store.update_grievance_status("grv-missing", GrievanceStatus::Resolved, "nope");
    store.mark_notification_read("not-missing");

    assert!(events.try_recv().is_err());
}
