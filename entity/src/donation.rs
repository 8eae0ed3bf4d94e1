use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BloodGroup, DonationStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "donation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub request_id: i32,
    pub donor_id: i32,
    pub blood_group: BloodGroup,
    pub hospital_name: String,
    pub location: String,
    pub status: DonationStatus,
    pub donated_at: DateTimeUtc,
    pub units_donated: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blood_request::Entity",
        from = "Column::RequestId",
        to = "super::blood_request::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BloodRequest,
    #[sea_orm(
        belongs_to = "super::donor::Entity",
        from = "Column::DonorId",
        to = "super::donor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Donor,
}

impl Related<super::blood_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodRequest.def()
    }
}

impl Related<super::donor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
