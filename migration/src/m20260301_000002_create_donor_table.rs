use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donor::Table)
                    .if_not_exists()
                    .col(pk_auto(Donor::Id))
                    .col(integer_uniq(Donor::UserId))
                    .col(boolean(Donor::Available).default(true))
                    .col(timestamp_null(Donor::LastDonationAt))
                    .col(text(Donor::HealthStatus))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donor_user_id")
                            .from(Donor::Table, Donor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Donor {
    Table,
    Id,
    UserId,
    Available,
    LastDonationAt,
    HealthStatus,
}
