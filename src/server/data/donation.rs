use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::DonationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::donation::{CreateDonationParams, Donation};

/// Units recorded for a completed whole-blood donation.
pub const UNITS_PER_DONATION: f64 = 1.0;

pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a donation record
    ///
    /// # Returns
    /// - `Ok(Donation)`: The created donation
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateDonationParams) -> Result<Donation, DbErr> {
        let entity = entity::donation::ActiveModel {
            request_id: ActiveValue::Set(params.request_id),
            donor_id: ActiveValue::Set(params.donor_id),
            blood_group: ActiveValue::Set(params.blood_group),
            hospital_name: ActiveValue::Set(params.hospital_name),
            location: ActiveValue::Set(params.location),
            status: ActiveValue::Set(params.status),
            donated_at: ActiveValue::Set(params.donated_at),
            units_donated: ActiveValue::Set(params.units_donated),
            notes: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Donation::from_entity(entity))
    }

    /// Gets all donations recorded for a request, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<Donation>)`: Donations for the request
    /// - `Err(DbErr)`: Database error
    #[cfg(test)]
    pub async fn find_by_request(&self, request_id: i32) -> Result<Vec<Donation>, DbErr> {
        let entities = entity::prelude::Donation::find()
            .filter(entity::donation::Column::RequestId.eq(request_id))
            .order_by_asc(entity::donation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Donation::from_entity).collect())
    }

    /// Marks the request's scheduled donation as completed
    ///
    /// Sets the status to `Completed`, the donation time to `completed_at` and records one
    /// unit donated.
    ///
    /// # Returns
    /// - `Ok(Some(Donation))`: The scheduled donation after completion
    /// - `Ok(None)`: The request has no scheduled donation
    /// - `Err(DbErr)`: Database error
    pub async fn complete_for_request(
        &self,
        request_id: i32,
        completed_at: DateTime<Utc>,
    ) -> Result<Option<Donation>, DbErr> {
        let Some(scheduled) = entity::prelude::Donation::find()
            .filter(entity::donation::Column::RequestId.eq(request_id))
            .filter(entity::donation::Column::Status.eq(DonationStatus::Scheduled))
            .order_by_asc(entity::donation::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = scheduled.into_active_model();
        active.status = ActiveValue::Set(DonationStatus::Completed);
        active.donated_at = ActiveValue::Set(completed_at);
        active.units_donated = ActiveValue::Set(Some(UNITS_PER_DONATION));
        let updated = active.update(self.db).await?;

        Ok(Some(Donation::from_entity(updated)))
    }

    /// Cancels any scheduled donation for the request
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of donations cancelled
    /// - `Err(DbErr)`: Database error
    pub async fn cancel_scheduled(&self, request_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Donation::update_many()
            .set(entity::donation::ActiveModel {
                status: ActiveValue::Set(DonationStatus::Cancelled),
                ..Default::default()
            })
            .filter(entity::donation::Column::RequestId.eq(request_id))
            .filter(entity::donation::Column::Status.eq(DonationStatus::Scheduled))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

