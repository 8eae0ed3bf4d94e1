use crate::server::{
    data::notification::NotificationRepository, model::notification::AppendNotificationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append;
