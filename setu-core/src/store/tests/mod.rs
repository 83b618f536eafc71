use super::*;
use shared::models::{GrievanceCreate, GrievancePriority};

mod test_attendance;
mod test_events;

fn create_test_store() -> WorkforceStore {
    WorkforceStore::empty()
}

fn create_grievance_payload(user_id: &str, subject: &str) -> GrievanceCreate {
    GrievanceCreate {
        user_id: user_id.to_string(),
        category: "Infrastructure".to_string(),
        subject: subject.to_string(),
        description: "Streetlights on the ward access road have been out for a week.".to_string(),
        priority: GrievancePriority::Medium,
    }
}

/// Latest notification (front of the collection)
fn latest_notification(store: &WorkforceStore) -> &Notification {
    store.notifications().first().expect("expected a notification")
}
