//! Best-effort delivery of donor alerts and admin status broadcasts.
//!
//! This module provides the `NotificationDispatcher`, which fans a donor alert out over
//! three independent paths once the triggering state change has committed:
//!
//! - `persisted` - an in-app notification record for the donor's user
//! - `push` - a real-time message if the user has an open channel
//! - `sms` - a text message to the donor's phone, carrying the OTP
//!
//! A failure on one path is logged and never stops the others, and nothing is reported
//! back to the operation that triggered the alert.
//!
//! The service is organized into separate modules by concern:
//! - `message` - Title, message and SMS body builders
//! - `sms` - SMS sender trait and implementations

pub mod message;
pub mod sms;

use sea_orm::{ActiveEnum, DatabaseConnection};
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::{
    model::realtime::PushEvent,
    server::{
        data::notification::NotificationRepository,
        model::{
            blood_request::BloodRequest,
            donor::DonorContact,
            notification::{AppendNotificationParams, EMERGENCY_REQUEST_KIND},
            otp::Otp,
        },
        realtime::registry::ConnectionRegistry,
    },
};

use self::sms::SmsSender;

/// Everything needed to alert a donor about a new request.
#[derive(Debug, Clone)]
pub struct DonorAlert {
    pub request: BloodRequest,
    pub donor: DonorContact,
    pub otp: Otp,
}

/// Dispatches notifications on background tasks.
///
/// Cheap to clone; clones share the connection pool, registry and SMS sender.
#[derive(Clone)]
pub struct NotificationDispatcher {
    /// Database connection used for persisted notifications
    db: DatabaseConnection,
    /// Open real-time channels
    registry: ConnectionRegistry,
    /// SMS delivery backend
    sms: Arc<dyn SmsSender>,
}

impl NotificationDispatcher {
    /// Creates a new NotificationDispatcher instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `registry` - Registry shared with the WebSocket handler
    /// - `sms` - SMS sender selected at startup
    ///
    /// # Returns
    /// - `NotificationDispatcher` - New dispatcher instance
    pub fn new(
        db: DatabaseConnection,
        registry: ConnectionRegistry,
        sms: Arc<dyn SmsSender>,
    ) -> Self {
        Self { db, registry, sms }
    }

    /// Alerts a donor about a new request on a background task.
    ///
    /// Call only after the request has been committed. The returned handle can be
    /// awaited to observe completion; dropping it leaves the task running.
    pub fn notify_donor(&self, alert: DonorAlert) -> JoinHandle<()> {
        let dispatcher = self.clone();

        tokio::spawn(async move { dispatcher.deliver(alert).await })
    }

    /// Tells connected admins that a request changed status, on a background task.
    pub fn broadcast_status_change(&self, request: &BloodRequest) -> JoinHandle<()> {
        let registry = self.registry.clone();
        let event = PushEvent::RequestStatusChanged {
            request_id: request.id,
            donor_id: request.donor_id,
            status: request.status.to_value(),
        };

        tokio::spawn(async move {
            let Some(payload) = to_payload(&event) else {
                return;
            };

            let delivered = registry.broadcast_to_admins(&payload).await;
            tracing::debug!("Status change broadcast to {} admin(s)", delivered);
        })
    }

    /// Runs the three delivery paths in order, logging each failure.
    async fn deliver(&self, alert: DonorAlert) {
        let DonorAlert {
            request,
            donor,
            otp,
        } = alert;

        let title = message::emergency_title(&request);
        let body = message::emergency_message(&request);

        let notification_repo = NotificationRepository::new(&self.db);
        if let Err(e) = notification_repo
            .append(AppendNotificationParams {
                user_id: donor.user_id,
                kind: EMERGENCY_REQUEST_KIND.to_string(),
                title: title.clone(),
                message: body.clone(),
                request_id: Some(request.id),
            })
            .await
        {
            tracing::error!(
                "Failed to store notification for user {} on request {}: {}",
                donor.user_id,
                request.id,
                e
            );
        }

        let event = PushEvent::EmergencyRequest {
            request_id: request.id,
            title,
            message: body,
            blood_group: request.blood_group.to_value(),
            hospital_name: request.hospital_name.clone(),
            location: request.location.clone(),
        };
        if let Some(payload) = to_payload(&event) {
            if !self.registry.send_if_open(donor.user_id, &payload).await {
                tracing::debug!("User {} has no open channel, skipping push", donor.user_id);
            }
        }

        let sms_body = message::emergency_sms(&request, &otp);
        if let Err(e) = self.sms.send(&donor.phone, &sms_body).await {
            tracing::warn!(
                "Failed to send SMS for request {} to donor {}: {}",
                request.id,
                donor.donor_id,
                e
            );
        }
    }
}

fn to_payload(event: &PushEvent) -> Option<Value> {
    match serde_json::to_value(event) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::error!("Failed to serialize push event: {}", e);
            None
        }
    }
}
