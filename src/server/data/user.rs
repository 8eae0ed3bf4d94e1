use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::user::User;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(User))`: The user if found
    /// - `Ok(None)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }
}
