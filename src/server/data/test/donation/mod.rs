use crate::server::{
    data::donation::{DonationRepository, UNITS_PER_DONATION},
    model::donation::CreateDonationParams,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::DonationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod cancel_scheduled;
mod create;
