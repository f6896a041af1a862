//! Create `payment` table.
//!
//! Payments reference a service record and the mechanic being paid.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::RecordId).not_null())
                    .col(integer(Payment::MechanicId).not_null())
                    .col(double(Payment::Amount).not_null())
                    .col(ColumnDef::new(Payment::Upi).string_len(64).null())
                    .col(ColumnDef::new(Payment::CreditCard).string_len(32).null())
                    .col(string_len(Payment::Status, 32).not_null())
                    .col(timestamp_with_time_zone(Payment::Timestamp).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_service_record")
                            .from(Payment::Table, Payment::RecordId)
                            .to(ServiceRecord::Table, ServiceRecord::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_mechanic")
                            .from(Payment::Table, Payment::MechanicId)
                            .to(Mechanic::Table, Mechanic::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Payment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Payment { Table, Id, RecordId, MechanicId, Amount, Upi, CreditCard, Status, Timestamp }

#[derive(DeriveIden)]
enum ServiceRecord { Table, Id }

#[derive(DeriveIden)]
enum Mechanic { Table, Id }
