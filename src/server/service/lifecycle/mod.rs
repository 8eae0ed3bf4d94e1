//! Emergency request lifecycle.
//!
//! This module provides the `RequestLifecycleService`, the state machine that moves a
//! request through `Pending -> Accepted -> Completed`, `Pending -> Rejected` and operator
//! cancellation of `Pending` or `Accepted` requests. `Completed` and `Rejected` are final.
//!
//! Every transition is a compare-and-set on the request's status, run in a database
//! transaction together with the donation and inventory writes it implies. Notifications
//! are handed to the dispatcher only after the transaction commits.
//!
//! The service is organized into separate modules by operation:
//! - `create` - Emergency request creation and donor alert
//! - `respond` - Donor accept / reject
//! - `cancel` - Operator cancellation
//! - `verify` - OTP verification and donation completion

pub mod cancel;
pub mod create;
pub mod respond;
pub mod verify;

use sea_orm::{ActiveEnum, DatabaseConnection, DatabaseTransaction};

use crate::server::{
    data::blood_request::BloodRequestRepository,
    error::{internal::InternalError, AppError},
    model::blood_request::BloodRequest,
    service::notification::NotificationDispatcher,
};

/// Service coordinating request state transitions and their side effects.
///
/// Holds references to the database connection and the notification dispatcher. The
/// service does not perform direct queries or entity conversions; those belong to the
/// repository layer.
pub struct RequestLifecycleService<'a> {
    /// Database connection used to open transactions and read requests
    db: &'a DatabaseConnection,
    /// Dispatcher receiving alerts and broadcasts after commit
    dispatcher: &'a NotificationDispatcher,
}

impl<'a> RequestLifecycleService<'a> {
    /// Creates a new RequestLifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `dispatcher` - Reference to the notification dispatcher
    ///
    /// # Returns
    /// - `RequestLifecycleService` - New service instance
    pub fn new(db: &'a DatabaseConnection, dispatcher: &'a NotificationDispatcher) -> Self {
        Self { db, dispatcher }
    }

    /// Gets a request by ID.
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The request
    /// - `Err(AppError::NotFound)` - No request with that ID
    pub async fn get_request(&self, request_id: i32) -> Result<BloodRequest, AppError> {
        BloodRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))
    }

    /// Re-reads a request that was just written in the same operation.
    async fn reload(&self, request_id: i32) -> Result<BloodRequest, AppError> {
        reload_in(self.db, request_id).await
    }
}

/// Reads a request that must exist, on any connection or transaction.
async fn reload_in<C: sea_orm::ConnectionTrait>(
    db: &C,
    request_id: i32,
) -> Result<BloodRequest, AppError> {
    BloodRequestRepository::new(db)
        .find_by_id(request_id)
        .await?
        .ok_or_else(|| {
            InternalError::RecordVanished {
                table: "blood_request",
                id: request_id,
            }
            .into()
        })
}

/// Commits `txn` when `result` is `Ok`, rolls it back otherwise.
async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            txn.rollback().await?;
            Err(err)
        }
    }
}

/// Error returned when a transition guard rejects the request's current status.
fn invalid_transition(request: &BloodRequest, action: &str) -> AppError {
    AppError::InvalidState(format!(
        "Cannot {} request {} while it is {}",
        action,
        request.id,
        request.status.to_value()
    ))
}
