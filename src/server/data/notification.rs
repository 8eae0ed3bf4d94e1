use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::notification::{AppendNotificationParams, Notification};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an unread notification for a user
    ///
    /// # Returns
    /// - `Ok(Notification)`: The stored notification
    /// - `Err(DbErr)`: Database error
    pub async fn append(&self, params: AppendNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            request_id: ActiveValue::Set(params.request_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets all notifications for a user, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)`: Notifications addressed to the user
    /// - `Err(DbErr)`: Database error
    #[cfg(test)]
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Notification>, DbErr> {
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }
}
