//! Create `owner` table.
//!
//! Owner ids are supplied by the shop, not generated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(integer(Owner::Id).primary_key())
                    .col(string_len(Owner::Name, 128).not_null())
                    .col(string_len(Owner::Phone, 32).not_null())
                    .col(string_len(Owner::Email, 255).not_null())
                    .col(string_len(Owner::Address, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Owner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Owner { Table, Id, Name, Phone, Email, Address }
