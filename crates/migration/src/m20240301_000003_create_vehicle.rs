//! Create `vehicle` table with FK to `owner`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::OwnerId).not_null())
                    .col(string_len(Vehicle::LicensePlate, 32).not_null())
                    .col(string_len(Vehicle::Model, 128).not_null())
                    .col(integer(Vehicle::Mileage).not_null())
                    .col(string_len(Vehicle::VehicleNumber, 32).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_owner")
                            .from(Vehicle::Table, Vehicle::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, Id, OwnerId, LicensePlate, Model, Mileage, VehicleNumber }

#[derive(DeriveIden)]
enum Owner { Table, Id }
