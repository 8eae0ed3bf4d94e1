//! One-time password values and verification outcomes.

use chrono::{DateTime, Utc};

use crate::{
    model::blood_request::OtpVerificationDto,
    server::model::{blood_request::BloodRequest, donation::Donation, inventory::InventoryEntry},
};

/// One-time password bound to a single request.
///
/// Code and expiry are always stored together on the request row.
#[derive(Debug, Clone, PartialEq)]
pub struct Otp {
    /// Six ASCII digits, `100000` through `999999`.
    pub code: String,
    /// Instant after which the code is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

/// Reason an OTP verification attempt was refused.
///
/// These are expected outcomes rather than errors, so they are returned to the caller
/// as a structured result and never roll back anything (nothing was written).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpFailure {
    /// Request does not exist or is not in the accepted state.
    NotAccepted,
    /// Submitted code differs from the stored code.
    InvalidOtp,
    /// Submitted code matches but the validity window has passed.
    Expired,
}

impl OtpFailure {
    /// Human readable reason returned to the operator.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotAccepted => "Invalid request or not accepted",
            Self::InvalidOtp => "Invalid OTP",
            Self::Expired => "OTP expired",
        }
    }
}

/// State written by a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedDonation {
    /// The request after moving to `Completed`.
    pub request: BloodRequest,
    /// The single completed donation recorded for the request.
    pub donation: Donation,
    /// Inventory row after the increment.
    pub inventory: InventoryEntry,
}

/// Outcome of `VerifyOtpAndComplete`.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpVerification {
    Completed(Box<CompletedDonation>),
    Failed(OtpFailure),
}

impl OtpVerification {
    pub fn into_dto(self, request_id: i32) -> OtpVerificationDto {
        match self {
            Self::Completed(_) => OtpVerificationDto {
                request_id,
                success: true,
                reason: None,
            },
            Self::Failed(failure) => OtpVerificationDto {
                request_id,
                success: false,
                reason: Some(failure.reason().to_string()),
            },
        }
    }
}
