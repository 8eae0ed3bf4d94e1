//! Text for donor alerts.

use sea_orm::ActiveEnum;

use crate::server::model::{blood_request::BloodRequest, otp::Otp};

pub fn emergency_title(request: &BloodRequest) -> String {
    format!("Emergency: {} blood needed", request.blood_group.to_value())
}

pub fn emergency_message(request: &BloodRequest) -> String {
    format!(
        "Patient {} urgently needs {} blood at {}, {}. Contact {}.",
        request.patient_name,
        request.blood_group.to_value(),
        request.hospital_name,
        request.location,
        request.contact_number
    )
}

/// SMS body for the donor. Carries the OTP the donor hands over at the hospital.
pub fn emergency_sms(request: &BloodRequest, otp: &Otp) -> String {
    format!(
        "URGENT: {} blood needed at {}, {}. Call {}. Your donation code is {}.",
        request.blood_group.to_value(),
        request.hospital_name,
        request.location,
        request.contact_number,
        otp.code
    )
}
