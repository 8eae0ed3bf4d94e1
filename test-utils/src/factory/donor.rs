//! Donor factory for creating test donor profiles.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating donor profiles linked to an existing user.
pub struct DonorFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    available: bool,
    health_status: String,
}

impl<'a> DonorFactory<'a> {
    /// Creates a new DonorFactory with default values.
    ///
    /// Defaults:
    /// - available: `true`
    /// - health_status: `"Healthy"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            available: true,
            health_status: "Healthy".to_string(),
        }
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn health_status(mut self, health_status: impl Into<String>) -> Self {
        self.health_status = health_status.into();
        self
    }

    /// Builds and inserts the donor entity into the database.
    pub async fn build(self) -> Result<entity::donor::Model, DbErr> {
        entity::donor::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            available: ActiveValue::Set(self.available),
            last_donation_at: ActiveValue::Set(None),
            health_status: ActiveValue::Set(self.health_status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a donor profile for `user_id` with default values.
pub async fn create_donor(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::donor::Model, DbErr> {
    DonorFactory::new(db, user_id).build().await
}
