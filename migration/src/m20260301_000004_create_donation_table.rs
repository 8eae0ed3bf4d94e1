use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_donor_table::Donor,
    m20260301_000003_create_blood_request_table::BloodRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(integer(Donation::RequestId))
                    .col(integer(Donation::DonorId))
                    .col(string_len(Donation::BloodGroup, 3))
                    .col(string(Donation::HospitalName))
                    .col(string(Donation::Location))
                    .col(string_len(Donation::Status, 16))
                    .col(timestamp(Donation::DonatedAt))
                    .col(double_null(Donation::UnitsDonated))
                    .col(text_null(Donation::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donation_request_id")
                            .from(Donation::Table, Donation::RequestId)
                            .to(BloodRequest::Table, BloodRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donation_donor_id")
                            .from(Donation::Table, Donation::DonorId)
                            .to(Donor::Table, Donor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    Table,
    Id,
    RequestId,
    DonorId,
    BloodGroup,
    HospitalName,
    Location,
    Status,
    DonatedAt,
    UnitsDonated,
    Notes,
}
