use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BloodGroup;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::inventory::InventoryEntry;

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one unit to the blood group's stock and refreshes its timestamp
    ///
    /// The unit count is incremented in SQL so concurrent increments never overwrite each
    /// other, then the row is read back.
    ///
    /// # Arguments
    /// - `blood_group`: Group whose row is incremented
    /// - `updated_at`: New last-updated timestamp
    ///
    /// # Returns
    /// - `Ok(Some(InventoryEntry))`: The row after the increment
    /// - `Ok(None)`: No row exists for the blood group
    /// - `Err(DbErr)`: Database error
    pub async fn increment(
        &self,
        blood_group: BloodGroup,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<InventoryEntry>, DbErr> {
        let result = entity::prelude::Inventory::update_many()
            .col_expr(
                entity::inventory::Column::Units,
                Expr::col(entity::inventory::Column::Units).add(1),
            )
            .col_expr(entity::inventory::Column::UpdatedAt, Expr::value(updated_at))
            .filter(entity::inventory::Column::BloodGroup.eq(blood_group))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_blood_group(blood_group).await
    }

    /// Finds the stock row for a blood group
    ///
    /// # Returns
    /// - `Ok(Some(InventoryEntry))`: The row if present
    /// - `Ok(None)`: No row for the blood group
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_blood_group(
        &self,
        blood_group: BloodGroup,
    ) -> Result<Option<InventoryEntry>, DbErr> {
        let row = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::BloodGroup.eq(blood_group))
            .one(self.db)
            .await?;

        Ok(row.map(InventoryEntry::from_entity))
    }

    /// Gets every inventory row in insertion order
    ///
    /// # Returns
    /// - `Ok(Vec<InventoryEntry>)`: All rows
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<InventoryEntry>, DbErr> {
        let rows = entity::prelude::Inventory::find()
            .order_by_asc(entity::inventory::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(InventoryEntry::from_entity).collect())
    }
}
