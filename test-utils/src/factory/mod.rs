//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, donor) = factory::helpers::create_donor_with_user(&db).await?;
//!     let request = factory::blood_request::create_request(&db, donor.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `donor` - Create donor entities
//! - `blood_request` - Create emergency request entities in any lifecycle state
//! - `donation` - Create donation entities
//! - `inventory` - Seed inventory rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod blood_request;
pub mod donation;
pub mod donor;
pub mod helpers;
pub mod inventory;
pub mod user;

pub use blood_request::create_request;
pub use donor::create_donor;
pub use helpers::create_donor_with_user;
pub use user::create_user;
