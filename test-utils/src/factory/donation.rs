//! Donation factory.

use chrono::Utc;
use entity::sea_orm_active_enums::DonationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a donation for `request` in the given status, copying the request's
/// blood group, hospital and location.
pub async fn create_donation(
    db: &DatabaseConnection,
    request: &entity::blood_request::Model,
    status: DonationStatus,
) -> Result<entity::donation::Model, DbErr> {
    entity::donation::ActiveModel {
        request_id: ActiveValue::Set(request.id),
        donor_id: ActiveValue::Set(request.donor_id),
        blood_group: ActiveValue::Set(request.blood_group),
        hospital_name: ActiveValue::Set(request.hospital_name.clone()),
        location: ActiveValue::Set(request.location.clone()),
        status: ActiveValue::Set(status),
        donated_at: ActiveValue::Set(Utc::now()),
        units_donated: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
