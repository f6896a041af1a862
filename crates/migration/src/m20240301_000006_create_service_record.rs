//! Create `service_record` table.
//!
//! One row per job done on a vehicle; source of the rating and cost rollups.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRecord::Id))
                    .col(integer(ServiceRecord::VehicleId).not_null())
                    .col(integer(ServiceRecord::MechanicId).not_null())
                    .col(integer(ServiceRecord::ServiceTypeId).not_null())
                    .col(timestamp_with_time_zone(ServiceRecord::ServicedAt).not_null())
                    .col(string_len(ServiceRecord::Description, 512).not_null())
                    .col(double(ServiceRecord::Cost).not_null())
                    .col(ColumnDef::new(ServiceRecord::Rating).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_record_vehicle")
                            .from(ServiceRecord::Table, ServiceRecord::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_record_mechanic")
                            .from(ServiceRecord::Table, ServiceRecord::MechanicId)
                            .to(Mechanic::Table, Mechanic::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_record_service_type")
                            .from(ServiceRecord::Table, ServiceRecord::ServiceTypeId)
                            .to(ServiceType::Table, ServiceType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceRecord {
    Table,
    Id,
    VehicleId,
    MechanicId,
    ServiceTypeId,
    ServicedAt,
    Description,
    Cost,
    Rating,
}

#[derive(DeriveIden)]
enum Vehicle { Table, Id }

#[derive(DeriveIden)]
enum Mechanic { Table, Id }

#[derive(DeriveIden)]
enum ServiceType { Table, Id }
