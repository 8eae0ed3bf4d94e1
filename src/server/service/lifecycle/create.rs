use chrono::Utc;
use entity::sea_orm_active_enums::Urgency;
use sea_orm::ActiveEnum;

use super::RequestLifecycleService;
use crate::server::{
    data::{blood_request::BloodRequestRepository, donor::DonorRepository},
    error::AppError,
    model::blood_request::{
        CreateBloodRequestParams, CreateEmergencyRequestParams, EmergencyRequestCreated,
    },
    service::{notification::DonorAlert, otp::OtpService},
};

impl<'a> RequestLifecycleService<'a> {
    /// Creates an emergency request for one donor and alerts them
    ///
    /// The request is stored as `Pending` with `Critical` urgency and a fresh OTP expiring
    /// 30 minutes after creation. The donor alert runs in the background after the insert,
    /// so delivery failures never affect the result.
    ///
    /// # Arguments
    /// - `params` - Validated request fields and target donor
    ///
    /// # Returns
    /// - `Ok(EmergencyRequestCreated)` - The stored request and the donor's contact details
    /// - `Err(AppError::NotFound)` - Donor does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_emergency_request(
        &self,
        params: CreateEmergencyRequestParams,
    ) -> Result<EmergencyRequestCreated, AppError> {
        let donor = DonorRepository::new(self.db)
            .find_contact(params.donor_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donor {} not found", params.donor_id)))?;

        if !donor.available {
            tracing::warn!(
                "Donor {} is marked unavailable, sending the request anyway",
                donor.donor_id
            );
        }

        let now = Utc::now();
        let otp = OtpService::issue(now);

        let request = BloodRequestRepository::new(self.db)
            .create(CreateBloodRequestParams {
                patient_name: params.patient_name,
                blood_group: params.blood_group,
                donor_id: donor.donor_id,
                hospital_name: params.hospital_name,
                location: params.location,
                contact_number: params.contact_number,
                urgency: Urgency::Critical,
                otp: otp.clone(),
                created_at: now,
            })
            .await?;

        tracing::info!(
            "Created emergency request {} for {} blood, donor {}",
            request.id,
            request.blood_group.to_value(),
            donor.donor_id
        );

        self.dispatcher.notify_donor(DonorAlert {
            request: request.clone(),
            donor: donor.clone(),
            otp: otp.clone(),
        });

        Ok(EmergencyRequestCreated {
            request,
            otp_expires_at: otp.expires_at,
            donor,
        })
    }
}
