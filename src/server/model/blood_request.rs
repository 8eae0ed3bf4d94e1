//! Domain models for emergency blood requests.
//!
//! Defines the request domain model, creation parameters and the result returned to the
//! operator after a request has been created and the donor has been notified.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BloodGroup, RequestStatus, Urgency};
use sea_orm::ActiveEnum;

use crate::{
    model::blood_request::{BloodRequestDto, CreateEmergencyRequestDto, EmergencyRequestCreatedDto},
    server::{
        error::AppError,
        model::{donor::DonorContact, otp::Otp},
        util::parse::{parse_blood_group, require_non_empty},
    },
};

/// Emergency blood request targeting exactly one donor.
#[derive(Debug, Clone, PartialEq)]
pub struct BloodRequest {
    /// Unique identifier for the request.
    pub id: i32,
    /// Name of the patient needing blood.
    pub patient_name: String,
    /// Blood group requested.
    pub blood_group: BloodGroup,
    /// The single donor this request was sent to.
    pub donor_id: i32,
    /// Hospital where the donation takes place.
    pub hospital_name: String,
    /// Location within or around the hospital.
    pub location: String,
    /// Number the donor should call.
    pub contact_number: String,
    /// Timestamp when the request was created.
    pub created_at: DateTime<Utc>,
    /// Current lifecycle state.
    pub status: RequestStatus,
    /// Request urgency. Emergency requests are always `Critical`.
    pub urgency: Urgency,
    /// OTP issued for the request, if any.
    pub otp: Option<Otp>,
}

impl BloodRequest {
    /// Converts an entity model to a request domain model at the repository boundary.
    ///
    /// The OTP is only populated when both its columns are set.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `BloodRequest` - The converted request domain model
    pub fn from_entity(entity: entity::blood_request::Model) -> Self {
        let otp = match (entity.otp_code, entity.otp_expires_at) {
            (Some(code), Some(expires_at)) => Some(Otp { code, expires_at }),
            _ => None,
        };

        Self {
            id: entity.id,
            patient_name: entity.patient_name,
            blood_group: entity.blood_group,
            donor_id: entity.donor_id,
            hospital_name: entity.hospital_name,
            location: entity.location,
            contact_number: entity.contact_number,
            created_at: entity.created_at,
            status: entity.status,
            urgency: entity.urgency,
            otp,
        }
    }

    /// Converts the request to its operator-facing DTO. The OTP code is left out.
    pub fn into_dto(self) -> BloodRequestDto {
        BloodRequestDto {
            id: self.id,
            patient_name: self.patient_name,
            blood_group: self.blood_group.to_value(),
            donor_id: self.donor_id,
            hospital_name: self.hospital_name,
            location: self.location,
            contact_number: self.contact_number,
            status: self.status.to_value(),
            urgency: self.urgency.to_value(),
            created_at: self.created_at,
            otp_expires_at: self.otp.map(|otp| otp.expires_at),
        }
    }
}

/// Validated input for creating an emergency request.
#[derive(Debug, Clone)]
pub struct CreateEmergencyRequestParams {
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub donor_id: i32,
    pub hospital_name: String,
    pub location: String,
    pub contact_number: String,
}

impl CreateEmergencyRequestParams {
    /// Validates and converts the creation DTO.
    ///
    /// # Arguments
    /// - `dto` - Request body submitted by the operator
    ///
    /// # Returns
    /// - `Ok(CreateEmergencyRequestParams)` - All text fields present and blood group valid
    /// - `Err(AppError::BadRequest)` - A text field is blank or the blood group is unknown
    pub fn from_dto(dto: CreateEmergencyRequestDto) -> Result<Self, AppError> {
        require_non_empty("patient_name", &dto.patient_name)?;
        require_non_empty("blood_group", &dto.blood_group)?;
        require_non_empty("hospital_name", &dto.hospital_name)?;
        require_non_empty("location", &dto.location)?;
        require_non_empty("contact_number", &dto.contact_number)?;

        Ok(Self {
            patient_name: dto.patient_name,
            blood_group: parse_blood_group(dto.blood_group.trim())?,
            donor_id: dto.donor_id,
            hospital_name: dto.hospital_name,
            location: dto.location,
            contact_number: dto.contact_number,
        })
    }
}

/// Row-level parameters for inserting a request.
#[derive(Debug, Clone)]
pub struct CreateBloodRequestParams {
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub donor_id: i32,
    pub hospital_name: String,
    pub location: String,
    pub contact_number: String,
    pub urgency: Urgency,
    pub otp: Otp,
    pub created_at: DateTime<Utc>,
}

/// Result of creating an emergency request.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyRequestCreated {
    pub request: BloodRequest,
    /// Expiry of the OTP issued for the request.
    pub otp_expires_at: DateTime<Utc>,
    pub donor: DonorContact,
}

impl EmergencyRequestCreated {
    pub fn into_dto(self) -> EmergencyRequestCreatedDto {
        EmergencyRequestCreatedDto {
            request_id: self.request.id,
            status: self.request.status.to_value(),
            otp_expires_at: self.otp_expires_at,
            donor: self.donor.into_dto(),
        }
    }
}
