//! Notification Model

use serde::{Deserialize, Serialize};

/// Notification severity shown in the bell dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Alert,
}

/// In-app notification addressed to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Monotonic false → true; notifications are never deleted
    pub read: bool,
    /// ISO 8601
    pub created_at: String,
    /// Dashboard route the notification points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Create payload - id, created_at and read are assigned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreate {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationType,
    pub link: Option<String>,
}

// ==================== Convenience Constructors ====================

impl NotificationCreate {
    pub fn info(
        user_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            message: message.into(),
            kind: NotificationType::Info,
            link: None,
        }
    }

    pub fn success(
        user_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            message: message.into(),
            kind: NotificationType::Success,
            link: None,
        }
    }

    pub fn warning(
        user_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            message: message.into(),
            kind: NotificationType::Warning,
            link: None,
        }
    }

    /// Attach the dashboard route the notification should open
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
