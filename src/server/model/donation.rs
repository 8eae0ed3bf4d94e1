//! Domain models for donation records.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BloodGroup, DonationStatus};

/// Donation recorded as a side effect of a request transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i32,
    pub request_id: i32,
    pub donor_id: i32,
    pub blood_group: BloodGroup,
    pub hospital_name: String,
    pub location: String,
    pub status: DonationStatus,
    /// Scheduling time for `Scheduled` donations, completion time once `Completed`.
    pub donated_at: DateTime<Utc>,
    pub units_donated: Option<f64>,
    pub notes: Option<String>,
}

impl Donation {
    /// Converts an entity model to a donation domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Donation` - The converted donation domain model
    pub fn from_entity(entity: entity::donation::Model) -> Self {
        Self {
            id: entity.id,
            request_id: entity.request_id,
            donor_id: entity.donor_id,
            blood_group: entity.blood_group,
            hospital_name: entity.hospital_name,
            location: entity.location,
            status: entity.status,
            donated_at: entity.donated_at,
            units_donated: entity.units_donated,
            notes: entity.notes,
        }
    }
}

/// Parameters for inserting a donation row.
///
/// Blood group, hospital and location are copied from the originating request.
#[derive(Debug, Clone)]
pub struct CreateDonationParams {
    pub request_id: i32,
    pub donor_id: i32,
    pub blood_group: BloodGroup,
    pub hospital_name: String,
    pub location: String,
    pub status: DonationStatus,
    pub donated_at: DateTime<Utc>,
    pub units_donated: Option<f64>,
}
