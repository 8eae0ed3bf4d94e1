use crate::server::{
    data::blood_request::BloodRequestRepository,
    model::{blood_request::CreateBloodRequestParams, otp::Otp},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{BloodGroup, RequestStatus, Urgency};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod transition;
