//! Domain models for donors.

use crate::model::blood_request::DonorContactDto;

/// Donor joined with the user it belongs to.
///
/// This is the donor lookup result the lifecycle needs: who to notify, by which user
/// key, and which phone number receives the SMS.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorContact {
    pub donor_id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub available: bool,
}

impl DonorContact {
    /// Builds the contact from a donor row and its owning user row.
    ///
    /// # Arguments
    /// - `donor` - The donor entity model
    /// - `user` - The user entity model the donor belongs to
    ///
    /// # Returns
    /// - `DonorContact` - Combined contact details
    pub fn from_entities(donor: entity::donor::Model, user: entity::user::Model) -> Self {
        Self {
            donor_id: donor.id,
            user_id: user.id,
            name: user.name,
            phone: user.phone,
            available: donor.available,
        }
    }

    pub fn into_dto(self) -> DonorContactDto {
        DonorContactDto {
            donor_id: self.donor_id,
            user_id: self.user_id,
            name: self.name,
            phone: self.phone,
        }
    }
}
