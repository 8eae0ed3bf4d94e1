//! Payloads pushed over the real-time channel.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushEvent {
    /// Sent to the targeted donor when a request is created.
    EmergencyRequest {
        request_id: i32,
        title: String,
        message: String,
        blood_group: String,
        hospital_name: String,
        location: String,
    },
    /// Sent to connected admins whenever a request changes status.
    RequestStatusChanged {
        request_id: i32,
        donor_id: i32,
        status: String,
    },
}
