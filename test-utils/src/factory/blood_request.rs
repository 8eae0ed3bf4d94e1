//! Emergency request factory.
//!
//! Requests can be created directly in any lifecycle state so tests can exercise
//! transitions without walking the whole flow first.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{BloodGroup, RequestStatus, Urgency};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::blood_request::BloodRequestFactory;
///
/// let request = BloodRequestFactory::new(&db, donor.id)
///     .status(RequestStatus::Accepted)
///     .otp("482193", Utc::now() + Duration::minutes(30))
///     .build()
///     .await?;
/// ```
pub struct BloodRequestFactory<'a> {
    db: &'a DatabaseConnection,
    donor_id: i32,
    patient_name: String,
    blood_group: BloodGroup,
    hospital_name: String,
    location: String,
    contact_number: String,
    status: RequestStatus,
    urgency: Urgency,
    otp_code: Option<String>,
    otp_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> BloodRequestFactory<'a> {
    /// Creates a new BloodRequestFactory with default values.
    ///
    /// Defaults:
    /// - patient_name: `"Patient {id}"`
    /// - blood_group: `O+`
    /// - status: `Pending`, urgency: `Critical`
    /// - otp: `"123456"` expiring 30 minutes from now
    pub fn new(db: &'a DatabaseConnection, donor_id: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            donor_id,
            patient_name: format!("Patient {}", id),
            blood_group: BloodGroup::OPositive,
            hospital_name: "City General".to_string(),
            location: "Ward 3".to_string(),
            contact_number: "+15550100".to_string(),
            status: RequestStatus::Pending,
            urgency: Urgency::Critical,
            otp_code: Some("123456".to_string()),
            otp_expires_at: Some(now + Duration::minutes(30)),
            created_at: now,
        }
    }

    pub fn blood_group(mut self, blood_group: BloodGroup) -> Self {
        self.blood_group = blood_group;
        self
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets both OTP columns.
    pub fn otp(mut self, code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        self.otp_code = Some(code.into());
        self.otp_expires_at = Some(expires_at);
        self
    }

    /// Clears both OTP columns.
    pub fn without_otp(mut self) -> Self {
        self.otp_code = None;
        self.otp_expires_at = None;
        self
    }

    /// Builds and inserts the request entity into the database.
    pub async fn build(self) -> Result<entity::blood_request::Model, DbErr> {
        entity::blood_request::ActiveModel {
            patient_name: ActiveValue::Set(self.patient_name),
            blood_group: ActiveValue::Set(self.blood_group),
            donor_id: ActiveValue::Set(self.donor_id),
            hospital_name: ActiveValue::Set(self.hospital_name),
            location: ActiveValue::Set(self.location),
            contact_number: ActiveValue::Set(self.contact_number),
            created_at: ActiveValue::Set(self.created_at),
            status: ActiveValue::Set(self.status),
            urgency: ActiveValue::Set(self.urgency),
            otp_code: ActiveValue::Set(self.otp_code),
            otp_expires_at: ActiveValue::Set(self.otp_expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending request for `donor_id` with default values.
pub async fn create_request(
    db: &DatabaseConnection,
    donor_id: i32,
) -> Result<entity::blood_request::Model, DbErr> {
    BloodRequestFactory::new(db, donor_id).build().await
}
