//! Domain models for persisted in-app notifications.

use chrono::{DateTime, Utc};

/// Kind recorded for emergency request alerts sent to donors.
pub const EMERGENCY_REQUEST_KIND: &str = "emergency_request";

/// Append-only notification addressed to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub request_id: Option<i32>,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            request_id: entity.request_id,
            kind: entity.kind,
            title: entity.title,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for appending a notification.
#[derive(Debug, Clone)]
pub struct AppendNotificationParams {
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub request_id: Option<i32>,
}
