//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same repository can run
//! against the connection pool or inside an open `DatabaseTransaction`.

pub mod blood_request;
pub mod donation;
pub mod donor;
pub mod inventory;
pub mod notification;
pub mod user;
