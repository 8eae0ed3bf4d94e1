use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_donor_table::Donor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodRequest::Id))
                    .col(string(BloodRequest::PatientName))
                    .col(string_len(BloodRequest::BloodGroup, 3))
                    .col(integer(BloodRequest::DonorId))
                    .col(string(BloodRequest::HospitalName))
                    .col(string(BloodRequest::Location))
                    .col(string(BloodRequest::ContactNumber))
                    .col(
                        timestamp(BloodRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(BloodRequest::Status, 16).default("pending"))
                    .col(string_len(BloodRequest::Urgency, 16).default("critical"))
                    .col(string_len_null(BloodRequest::OtpCode, 6))
                    .col(timestamp_null(BloodRequest::OtpExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_request_donor_id")
                            .from(BloodRequest::Table, BloodRequest::DonorId)
                            .to(Donor::Table, Donor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blood_request_status")
                    .table(BloodRequest::Table)
                    .col(BloodRequest::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodRequest {
    Table,
    Id,
    PatientName,
    BloodGroup,
    DonorId,
    HospitalName,
    Location,
    ContactNumber,
    CreatedAt,
    Status,
    Urgency,
    OtpCode,
    OtpExpiresAt,
}
