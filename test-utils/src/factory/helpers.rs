//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a donor profile linked to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, donor))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_donor_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::donor::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let donor = crate::factory::donor::create_donor(db, user.id).await?;

    Ok((user, donor))
}

/// Creates a donor with its user and a pending request targeting that donor.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, donor, request))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_request_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::donor::Model,
        entity::blood_request::Model,
    ),
    DbErr,
> {
    let (user, donor) = create_donor_with_user(db).await?;
    let request = crate::factory::blood_request::create_request(db, donor.id).await?;

    Ok((user, donor, request))
}
