use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DonationStatus, RequestStatus};
use sea_orm::{ActiveEnum, DatabaseTransaction, TransactionTrait};

use super::{finish, reload_in, RequestLifecycleService};
use crate::server::{
    data::{
        blood_request::BloodRequestRepository,
        donation::{DonationRepository, UNITS_PER_DONATION},
        donor::DonorRepository,
    },
    error::AppError,
    model::{
        blood_request::BloodRequest,
        donation::CreateDonationParams,
        otp::{CompletedDonation, OtpFailure, OtpVerification},
    },
    service::{inventory::InventoryAdjuster, otp::OtpService},
};

impl<'a> RequestLifecycleService<'a> {
    /// Checks the donor's OTP and, if valid, completes the donation
    ///
    /// Refusals are returned as `OtpVerification::Failed` and leave every row untouched:
    /// - request missing or not `Accepted` gives `NotAccepted`
    /// - a code that differs from the stored one gives `InvalidOtp`
    /// - a matching code past its expiry gives `Expired`
    ///
    /// On success the request moves to `Completed`, the scheduled donation (or a new one)
    /// is recorded as `Completed` at the current time, the donor's last donation time is
    /// refreshed and the blood group's inventory goes up by one, all in one transaction.
    ///
    /// # Arguments
    /// - `request_id` - ID of the request
    /// - `submitted` - Code entered by the operator, compared exactly
    ///
    /// # Returns
    /// - `Ok(OtpVerification::Completed)` - Donation completed
    /// - `Ok(OtpVerification::Failed)` - Verification refused, nothing changed
    /// - `Err(AppError::IntegrityErr)` - No inventory row for the blood group, rolled back
    /// - `Err(AppError::DbErr)` - Database error, rolled back
    pub async fn verify_otp_and_complete(
        &self,
        request_id: i32,
        submitted: &str,
    ) -> Result<OtpVerification, AppError> {
        let request = BloodRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?;

        let request = match request {
            Some(request) if request.status == RequestStatus::Accepted => request,
            _ => return Ok(refuse(request_id, OtpFailure::NotAccepted)),
        };

        let Some(otp) = request.otp.as_ref() else {
            return Ok(refuse(request_id, OtpFailure::InvalidOtp));
        };

        let now = Utc::now();
        if let Err(failure) = OtpService::validate(otp, submitted, now) {
            return Ok(refuse(request_id, failure));
        }

        let txn = self.db.begin().await?;
        let result = complete(&txn, &request, now).await;
        let Some(completed) = finish(txn, result).await? else {
            return Ok(refuse(request_id, OtpFailure::NotAccepted));
        };

        tracing::info!(
            "Completed request {}: {} inventory now {} unit(s)",
            request_id,
            completed.inventory.blood_group.to_value(),
            completed.inventory.units
        );
        self.dispatcher.broadcast_status_change(&completed.request);

        Ok(OtpVerification::Completed(Box::new(completed)))
    }
}

fn refuse(request_id: i32, failure: OtpFailure) -> OtpVerification {
    tracing::warn!(
        "OTP verification for request {} refused: {}",
        request_id,
        failure.reason()
    );

    OtpVerification::Failed(failure)
}

/// Applies the completion writes. `Ok(None)` means the request left `Accepted` after
/// it was read, so nothing may be written.
async fn complete(
    txn: &DatabaseTransaction,
    request: &BloodRequest,
    now: DateTime<Utc>,
) -> Result<Option<CompletedDonation>, AppError> {
    let moved = BloodRequestRepository::new(txn)
        .transition(request.id, &[RequestStatus::Accepted], RequestStatus::Completed)
        .await?;
    if !moved {
        return Ok(None);
    }

    let donation_repo = DonationRepository::new(txn);
    let donation = match donation_repo.complete_for_request(request.id, now).await? {
        Some(donation) => donation,
        None => {
            donation_repo
                .create(CreateDonationParams {
                    request_id: request.id,
                    donor_id: request.donor_id,
                    blood_group: request.blood_group,
                    hospital_name: request.hospital_name.clone(),
                    location: request.location.clone(),
                    status: DonationStatus::Completed,
                    donated_at: now,
                    units_donated: Some(UNITS_PER_DONATION),
                })
                .await?
        }
    };

    DonorRepository::new(txn)
        .record_donation(request.donor_id, now)
        .await?;

    let inventory = InventoryAdjuster::new(txn)
        .increment_on_donation(request.blood_group, now)
        .await?;

    let request = reload_in(txn, request.id).await?;

    Ok(Some(CompletedDonation {
        request,
        donation,
        inventory,
    }))
}
