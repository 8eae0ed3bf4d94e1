use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEmergencyRequestDto {
    pub patient_name: String,
    /// One of `A+`, `A-`, `B+`, `B-`, `AB+`, `AB-`, `O+`, `O-`.
    pub blood_group: String,
    pub donor_id: i32,
    pub hospital_name: String,
    pub location: String,
    pub contact_number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DonorContactDto {
    pub donor_id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmergencyRequestCreatedDto {
    pub request_id: i32,
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub otp_expires_at: DateTime<Utc>,
    pub donor: DonorContactDto,
}

/// Request state as seen by operators. The OTP itself is only ever sent to the donor.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BloodRequestDto {
    pub id: i32,
    pub patient_name: String,
    pub blood_group: String,
    pub donor_id: i32,
    pub hospital_name: String,
    pub location: String,
    pub contact_number: String,
    pub status: String,
    pub urgency: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub otp_expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DonorResponseDto {
    pub donor_id: i32,
    pub accepted: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VerifyOtpDto {
    pub otp: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OtpVerificationDto {
    pub request_id: i32,
    pub success: bool,
    /// Present when `success` is false.
    pub reason: Option<String>,
}
