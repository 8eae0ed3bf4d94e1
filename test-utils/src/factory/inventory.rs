//! Inventory seeding.
//!
//! Production databases get their eight rows from the inventory migration; tests build
//! tables straight from the entities, so they seed explicitly.

use chrono::Utc;
use entity::sea_orm_active_enums::BloodGroup;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, Iterable};

/// Inserts one inventory row for `blood_group` with `units` units.
pub async fn create_entry(
    db: &DatabaseConnection,
    blood_group: BloodGroup,
    units: i32,
) -> Result<entity::inventory::Model, DbErr> {
    entity::inventory::ActiveModel {
        blood_group: ActiveValue::Set(blood_group),
        units: ActiveValue::Set(units),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a zero-unit row for every blood group.
pub async fn seed_all(db: &DatabaseConnection) -> Result<Vec<entity::inventory::Model>, DbErr> {
    let mut rows = Vec::new();
    for blood_group in BloodGroup::iter() {
        rows.push(create_entry(db, blood_group, 0).await?);
    }
    Ok(rows)
}
