use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BloodGroup, RequestStatus, Urgency};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub donor_id: i32,
    pub hospital_name: String,
    pub location: String,
    pub contact_number: String,
    pub created_at: DateTimeUtc,
    pub status: RequestStatus,
    pub urgency: Urgency,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::donor::Entity",
        from = "Column::DonorId",
        to = "super::donor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Donor,
    #[sea_orm(has_many = "super::donation::Entity")]
    Donation,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::donor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donor.def()
    }
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donation.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
