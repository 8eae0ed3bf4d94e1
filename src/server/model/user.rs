//! Domain model for application users.

/// Registered user as needed by the request lifecycle.
///
/// Login and registration live outside this service; only the fields needed to open
/// a real-time channel are carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Whether the user receives admin status broadcasts.
    pub admin: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            admin: entity.admin,
        }
    }
}
