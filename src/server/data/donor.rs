use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::donor::DonorContact;

pub struct DonorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Looks up a donor together with the user it belongs to
    ///
    /// Resolves the donor's name, phone number and user key in one query.
    ///
    /// # Arguments
    /// - `donor_id`: ID of the donor
    ///
    /// # Returns
    /// - `Ok(Some(DonorContact))`: Donor and its user were found
    /// - `Ok(None)`: No donor with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_contact(&self, donor_id: i32) -> Result<Option<DonorContact>, DbErr> {
        let result = entity::prelude::Donor::find_by_id(donor_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(donor, user)| {
            user.map(|user| DonorContact::from_entities(donor, user))
        }))
    }

    /// Refreshes the donor's last donation timestamp
    ///
    /// # Returns
    /// - `Ok(true)`: Donor row updated
    /// - `Ok(false)`: No donor with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn record_donation(
        &self,
        donor_id: i32,
        donated_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Donor::update_many()
            .set(entity::donor::ActiveModel {
                last_donation_at: ActiveValue::Set(Some(donated_at)),
                ..Default::default()
            })
            .filter(entity::donor::Column::Id.eq(donor_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
