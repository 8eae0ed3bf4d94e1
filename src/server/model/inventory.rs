//! Domain model for blood inventory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BloodGroup;
use sea_orm::ActiveEnum;

use crate::model::inventory::InventoryEntryDto;

/// Stock level for a single blood group.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub blood_group: BloodGroup,
    /// Units on hand, never negative.
    pub units: i32,
    pub updated_at: DateTime<Utc>,
}

impl InventoryEntry {
    pub fn from_entity(entity: entity::inventory::Model) -> Self {
        Self {
            blood_group: entity.blood_group,
            units: entity.units,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> InventoryEntryDto {
        InventoryEntryDto {
            blood_group: self.blood_group.to_value(),
            units: self.units,
            updated_at: self.updated_at,
        }
    }
}
