use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BloodGroup;
use sea_orm::{ActiveEnum, ConnectionTrait};

use crate::server::{
    data::inventory::InventoryRepository,
    error::{integrity::IntegrityFault, AppError},
    model::inventory::InventoryEntry,
};

/// Adjusts blood-group stock. Stock only ever goes up, one unit per confirmed donation.
pub struct InventoryAdjuster<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryAdjuster<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one unit for `blood_group` and refreshes the row's timestamp.
    ///
    /// Run against the completion transaction so the increment commits or rolls back
    /// together with the request and donation updates.
    ///
    /// # Arguments
    /// - `blood_group` - Group of the completed donation
    /// - `donated_at` - Completion time, stored as the row's last-updated timestamp
    ///
    /// # Returns
    /// - `Ok(InventoryEntry)` - The row after the increment
    /// - `Err(AppError::IntegrityErr)` - No inventory row exists for the group
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn increment_on_donation(
        &self,
        blood_group: BloodGroup,
        donated_at: DateTime<Utc>,
    ) -> Result<InventoryEntry, AppError> {
        let repo = InventoryRepository::new(self.db);

        match repo.increment(blood_group, donated_at).await? {
            Some(entry) => Ok(entry),
            None => {
                let blood_group = blood_group.to_value();
                tracing::error!("No inventory row for blood group {}", blood_group);

                Err(IntegrityFault::MissingInventoryRow { blood_group }.into())
            }
        }
    }

    /// Current stock for every blood group.
    pub async fn levels(&self) -> Result<Vec<InventoryEntry>, AppError> {
        let entries = InventoryRepository::new(self.db).get_all().await?;

        Ok(entries)
    }
}
