//! Index backing the per-user monthly report and per-user totals.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Costs {
    Table,
    Userid,
    Date,
}

const INDEX_NAME: &str = "idx-costs-userid-date";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Costs::Table)
                    .col(Costs::Userid)
                    .col(Costs::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Costs::Table).to_owned())
            .await
    }
}
