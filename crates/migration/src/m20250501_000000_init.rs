//! Initial schema migration.
//!
//! - `users`: people costs are reported for; keyed by their canonical id
//! - `costs`: one row per recorded expense

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Birthday,
    MaritalStatus,
}

#[derive(Iden)]
enum Costs {
    Table,
    Id,
    Description,
    Category,
    Userid,
    Sum,
    Date,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Birthday).date().not_null())
                    .col(ColumnDef::new(Users::MaritalStatus).string().not_null())
                    .to_owned(),
            )
            .await?;

        // No foreign key on `userid`: a cost may name a user that was never
        // registered.
        manager
            .create_table(
                Table::create()
                    .table(Costs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Costs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Costs::Description).string().not_null())
                    .col(ColumnDef::new(Costs::Category).string().not_null())
                    .col(ColumnDef::new(Costs::Userid).big_integer().not_null())
                    .col(ColumnDef::new(Costs::Sum).double().not_null())
                    .col(
                        ColumnDef::new(Costs::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Costs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
