use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::server::model::otp::{Otp, OtpFailure};

/// Minutes an issued OTP stays valid
pub const OTP_VALIDITY_MINUTES: i64 = 30;

/// Issues and checks the one-time passwords that confirm a donation took place.
///
/// Codes are stored inline on the request row, so the service itself holds no state.
pub struct OtpService;

impl OtpService {
    /// Generates a new code valid for 30 minutes from `now`.
    ///
    /// # Arguments
    /// * `now` - Issuance time, normally the request's creation time
    ///
    /// # Returns
    /// An `Otp` with a 6-digit code drawn uniformly from 100000..=999999.
    pub fn issue(now: DateTime<Utc>) -> Otp {
        Otp {
            code: Self::generate_code(),
            expires_at: now + Duration::minutes(OTP_VALIDITY_MINUTES),
        }
    }

    /// Checks a submitted code against the stored OTP.
    ///
    /// The code is compared first; expiry is only reported for a matching code, so a
    /// wrong guess never reveals whether the window has passed. The code stays valid
    /// up to and including `expires_at`.
    ///
    /// # Returns
    /// * `Ok(())` - Code matches and has not expired
    /// * `Err(OtpFailure::InvalidOtp)` - Code differs from the stored one
    /// * `Err(OtpFailure::Expired)` - Code matches but `now` is past the expiry
    pub fn validate(otp: &Otp, submitted: &str, now: DateTime<Utc>) -> Result<(), OtpFailure> {
        if otp.code != submitted {
            return Err(OtpFailure::InvalidOtp);
        }

        if now > otp.expires_at {
            return Err(OtpFailure::Expired);
        }

        Ok(())
    }

    fn generate_code() -> String {
        let mut rng = rand::rng();

        rng.random_range(100_000..=999_999u32).to_string()
    }
}
