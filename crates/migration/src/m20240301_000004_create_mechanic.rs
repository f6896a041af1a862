//! Create `mechanic` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mechanic::Table)
                    .if_not_exists()
                    .col(pk_auto(Mechanic::Id))
                    .col(string_len(Mechanic::Name, 128).not_null())
                    .col(string_len(Mechanic::Phone, 32).not_null())
                    .col(string_len(Mechanic::Specialization, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Mechanic::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Mechanic { Table, Id, Name, Phone, Specialization }
