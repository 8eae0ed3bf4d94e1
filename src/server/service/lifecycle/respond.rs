use chrono::Utc;
use entity::sea_orm_active_enums::{DonationStatus, RequestStatus};
use sea_orm::{ActiveEnum, DatabaseTransaction, TransactionTrait};

use super::{finish, invalid_transition, RequestLifecycleService};
use crate::server::{
    data::{blood_request::BloodRequestRepository, donation::DonationRepository},
    error::AppError,
    model::{blood_request::BloodRequest, donation::CreateDonationParams},
};

impl<'a> RequestLifecycleService<'a> {
    /// Records the target donor's answer to a pending request
    ///
    /// Accepting moves the request to `Accepted` and schedules a donation carrying the
    /// request's blood group, hospital and location. Declining moves it to `Rejected`.
    /// Admins are informed of the new status once the change commits.
    ///
    /// # Arguments
    /// - `request_id` - ID of the request
    /// - `donor_id` - Donor submitting the answer, must be the request's target donor
    /// - `accepted` - Whether the donor accepted
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The request in its new status
    /// - `Err(AppError::NotFound)` - Request does not exist
    /// - `Err(AppError::BadRequest)` - Donor is not the request's target donor
    /// - `Err(AppError::InvalidState)` - Request is no longer pending
    pub async fn record_donor_response(
        &self,
        request_id: i32,
        donor_id: i32,
        accepted: bool,
    ) -> Result<BloodRequest, AppError> {
        let request = self.get_request(request_id).await?;

        if request.donor_id != donor_id {
            return Err(AppError::BadRequest(format!(
                "Donor {} is not the donor for request {}",
                donor_id, request_id
            )));
        }

        let txn = self.db.begin().await?;
        let result = apply_response(&txn, &request, accepted).await;
        finish(txn, result).await?;

        let request = self.reload(request_id).await?;
        tracing::info!(
            "Donor {} {} request {}",
            donor_id,
            if accepted { "accepted" } else { "declined" },
            request_id
        );
        self.dispatcher.broadcast_status_change(&request);

        Ok(request)
    }
}

async fn apply_response(
    txn: &DatabaseTransaction,
    request: &BloodRequest,
    accepted: bool,
) -> Result<(), AppError> {
    let target = if accepted {
        RequestStatus::Accepted
    } else {
        RequestStatus::Rejected
    };

    let moved = BloodRequestRepository::new(txn)
        .transition(request.id, &[RequestStatus::Pending], target)
        .await?;
    if !moved {
        tracing::warn!(
            "Rejected response to request {}: status is {}",
            request.id,
            request.status.to_value()
        );
        return Err(invalid_transition(request, "respond to"));
    }

    if accepted {
        DonationRepository::new(txn)
            .create(CreateDonationParams {
                request_id: request.id,
                donor_id: request.donor_id,
                blood_group: request.blood_group,
                hospital_name: request.hospital_name.clone(),
                location: request.location.clone(),
                status: DonationStatus::Scheduled,
                donated_at: Utc::now(),
                units_donated: None,
            })
            .await?;
    }

    Ok(())
}
