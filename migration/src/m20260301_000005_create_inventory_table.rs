use sea_orm_migration::{prelude::*, schema::*};

/// Every group gets exactly one row; the adjuster never inserts.
const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(pk_auto(Inventory::Id))
                    .col(string_len_uniq(Inventory::BloodGroup, 3))
                    .col(integer(Inventory::Units).default(0))
                    .col(
                        timestamp(Inventory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Inventory::Table)
            .columns([Inventory::BloodGroup, Inventory::Units]);
        for group in BLOOD_GROUPS {
            seed.values_panic([group.into(), 0.into()]);
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inventory {
    Table,
    Id,
    BloodGroup,
    Units,
    UpdatedAt,
}
