//! SeaORM entities for the blood-donation coordination schema.

pub mod prelude;

pub mod blood_request;
pub mod donation;
pub mod donor;
pub mod inventory;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod user;
