use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{DatabaseTransaction, TransactionTrait};

use super::{finish, invalid_transition, RequestLifecycleService};
use crate::server::{
    data::{blood_request::BloodRequestRepository, donation::DonationRepository},
    error::AppError,
    model::blood_request::BloodRequest,
};

impl<'a> RequestLifecycleService<'a> {
    /// Cancels a pending or accepted request on behalf of the operator
    ///
    /// The request moves to `Rejected`. If the donor had already accepted, the scheduled
    /// donation is marked `Cancelled` in the same transaction.
    ///
    /// # Arguments
    /// - `request_id` - ID of the request
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The rejected request
    /// - `Err(AppError::NotFound)` - Request does not exist
    /// - `Err(AppError::InvalidState)` - Request is already completed or rejected
    pub async fn cancel_request(&self, request_id: i32) -> Result<BloodRequest, AppError> {
        let request = self.get_request(request_id).await?;

        let txn = self.db.begin().await?;
        let result = apply_cancel(&txn, &request).await;
        let cancelled_donations = finish(txn, result).await?;

        let request = self.reload(request_id).await?;
        tracing::info!(
            "Cancelled request {} ({} scheduled donation(s) cancelled)",
            request_id,
            cancelled_donations
        );
        self.dispatcher.broadcast_status_change(&request);

        Ok(request)
    }
}

async fn apply_cancel(txn: &DatabaseTransaction, request: &BloodRequest) -> Result<u64, AppError> {
    let moved = BloodRequestRepository::new(txn)
        .transition(
            request.id,
            &[RequestStatus::Pending, RequestStatus::Accepted],
            RequestStatus::Rejected,
        )
        .await?;
    if !moved {
        return Err(invalid_transition(request, "cancel"));
    }

    let cancelled = DonationRepository::new(txn)
        .cancel_scheduled(request.id)
        .await?;

    Ok(cancelled)
}
