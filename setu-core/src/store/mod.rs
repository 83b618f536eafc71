//! WorkforceStore - single source of truth for dashboard state
//!
//! Owns the mutable collections (attendance, grievances, notifications) and
//! the immutable reference data loaded once at startup (payroll, vacancies,
//! department stats). Consumers hold no copies; they read through the
//! accessors and re-render when a [`StoreEvent`] arrives.
//!
//! # Mutation flow
//!
//! ```text
//! mark_attendance(user, mark)
//!     ├─ 1. Update today's record in place, or insert a fresh one
//!     ├─ 2. Append the confirmation notification
//!     └─ 3. Broadcast StoreEvent { "attendance", "marked", id }
//! ```
//!
//! Mutations execute synchronously and never fail: unknown ids are ignored
//! so a stale reference from the UI can never crash the process.

mod seed;

#[cfg(test)]
mod tests;

use tokio::sync::broadcast;

use shared::models::{
    AttendanceMark, AttendanceRecord, AttendanceStatus, DepartmentStats, Grievance,
    GrievanceCreate, GrievanceStatus, Notification, NotificationCreate, PayrollRecord,
    TimelineItem, Vacancy,
};
use shared::util;

use crate::events::StoreEvent;

/// Event broadcast channel capacity (single-consumer UI, small burst headroom)
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// In-memory domain state store
pub struct WorkforceStore {
    attendance: Vec<AttendanceRecord>,
    grievances: Vec<Grievance>,
    notifications: Vec<Notification>,
    // Reference data, read-only after startup
    payroll: Vec<PayrollRecord>,
    vacancies: Vec<Vacancy>,
    department_stats: Vec<DepartmentStats>,
    event_tx: broadcast::Sender<StoreEvent>,
}

impl std::fmt::Debug for WorkforceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkforceStore")
            .field("attendance", &self.attendance.len())
            .field("grievances", &self.grievances.len())
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

impl WorkforceStore {
    /// Create a store pre-loaded with the synthetic reference dataset
    pub fn new() -> Self {
        Self {
            attendance: seed::attendance(),
            grievances: seed::grievances(),
            notifications: seed::notifications(),
            payroll: seed::payroll(),
            vacancies: seed::vacancies(),
            department_stats: seed::department_stats(),
            event_tx: broadcast::channel(EVENT_CHANNEL_CAPACITY).0,
        }
    }

    /// Create an empty store (no seed rows), for deterministic tests
    pub fn empty() -> Self {
        Self {
            attendance: Vec::new(),
            grievances: Vec::new(),
            notifications: Vec::new(),
            payroll: Vec::new(),
            vacancies: Vec::new(),
            department_stats: Vec::new(),
            event_tx: broadcast::channel(EVENT_CHANNEL_CAPACITY).0,
        }
    }

    /// Subscribe to mutation broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    fn broadcast(&self, resource: &str, action: &str, id: &str) {
        // A send error only means no live receivers; mutations never fail on it
        let _ = self.event_tx.send(StoreEvent::new(resource, action, id));
    }

    // ==================== Attendance ====================

    /// Today's record for the given user, if attendance was already marked
    ///
    /// "Today" is the current calendar date at call time.
    pub fn today_attendance(&self, user_id: &str) -> Option<&AttendanceRecord> {
        let today = util::today_date();
        self.attendance
            .iter()
            .find(|r| r.user_id == user_id && r.date == today)
    }

    /// Mark (or re-mark) today's attendance for the acting user
    ///
    /// Re-marking the same day updates the record in place, preserving its
    /// id but resetting `check_in` to the current call time - marking twice
    /// is deliberately not idempotent at the storage level.
    pub fn mark_attendance(&mut self, user_id: &str, mark: AttendanceMark) {
        let today = util::today_date();
        let time_str = util::time_hhmm();
        let status = AttendanceStatus::from(mark);

        let existing = self
            .attendance
            .iter()
            .position(|r| r.user_id == user_id && r.date == today);
        let id = match existing {
            Some(idx) => {
                let record = &mut self.attendance[idx];
                record.status = status;
                record.check_in = Some(time_str);
                record.id.clone()
            }
            None => {
                let record = AttendanceRecord {
                    id: util::tagged_id("att"),
                    user_id: user_id.to_string(),
                    date: today,
                    status,
                    check_in: (mark == AttendanceMark::Present).then_some(time_str),
                    check_out: None,
                };
                let id = record.id.clone();
                self.attendance.insert(0, record);
                id
            }
        };

        self.add_notification(NotificationCreate::success(
            user_id,
            "Attendance Marked",
            format!("Your attendance for today has been marked as {}.", mark),
        ));
        self.broadcast("attendance", "marked", &id);
        tracing::debug!(user_id = %user_id, status = %mark, "Attendance marked");
    }

    // ==================== Grievances ====================

    /// Register a new grievance; the collection stays most-recent-first
    ///
    /// The status is forced to `submitted` and the timeline is seeded with
    /// the registration entry.
    pub fn add_grievance(&mut self, create: GrievanceCreate) {
        let now = util::now_iso();
        let grievance = Grievance {
            id: util::tagged_id("grv"),
            user_id: create.user_id.clone(),
            category: create.category,
            subject: create.subject.clone(),
            description: create.description,
            status: GrievanceStatus::Submitted,
            priority: create.priority,
            created_at: now.clone(),
            updated_at: now.clone(),
            timeline: vec![TimelineItem {
                id: "t1".to_string(),
                status: GrievanceStatus::Submitted.human_label().to_string(),
                message: "Grievance registered successfully".to_string(),
                timestamp: now,
                by: None,
            }],
        };
        let id = grievance.id.clone();
        self.grievances.insert(0, grievance);

        self.add_notification(
            NotificationCreate::info(
                create.user_id,
                "Grievance Submitted",
                format!("Your grievance \"{}\" has been registered.", create.subject),
            )
            .with_link("/grievances"),
        );
        self.broadcast("grievance", "created", &id);
        tracing::info!(grievance_id = %id, "Grievance registered");
    }

    /// Move a grievance through the workflow, appending a timeline entry
    ///
    /// Unknown ids are ignored. Transition order is not validated here;
    /// hiding actions on resolved grievances is a presentation concern.
    pub fn update_grievance_status(
        &mut self,
        id: &str,
        status: GrievanceStatus,
        message: impl Into<String>,
    ) {
        let Some(grievance) = self.grievances.iter_mut().find(|g| g.id == id) else {
            tracing::debug!(grievance_id = %id, "Status update for unknown grievance ignored");
            return;
        };

        let now = util::now_iso();
        grievance.timeline.push(TimelineItem {
            id: format!("t{}", grievance.timeline.len() + 1),
            status: status.human_label().to_string(),
            message: message.into(),
            timestamp: now.clone(),
            by: Some("Officer".to_string()),
        });
        grievance.status = status;
        grievance.updated_at = now;

        self.broadcast("grievance", "updated", id);
        tracing::info!(grievance_id = %id, status = %status, "Grievance status updated");
    }

    // ==================== Notifications ====================

    /// Append a notification; the collection stays most-recent-first
    pub fn add_notification(&mut self, create: NotificationCreate) {
        let notification = Notification {
            id: util::tagged_id("not"),
            user_id: create.user_id,
            title: create.title,
            message: create.message,
            kind: create.kind,
            read: false,
            created_at: util::now_iso(),
            link: create.link,
        };
        let id = notification.id.clone();
        self.notifications.insert(0, notification);
        self.broadcast("notification", "created", &id);
    }

    /// Mark one notification read; unknown ids are ignored
    pub fn mark_notification_read(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = true;
            self.broadcast("notification", "read", id);
        }
    }

    /// Mark every notification read
    pub fn mark_all_notifications_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
        self.broadcast("notification", "read_all", "*");
    }

    /// Count of unread notifications, recomputed on every call
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    // ==================== Accessors ====================

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn grievances(&self) -> &[Grievance] {
        &self.grievances
    }

    pub fn payroll(&self) -> &[PayrollRecord] {
        &self.payroll
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn department_stats(&self) -> &[DepartmentStats] {
        &self.department_stats
    }
}

impl Default for WorkforceStore {
    fn default() -> Self {
        Self::new()
    }
}
