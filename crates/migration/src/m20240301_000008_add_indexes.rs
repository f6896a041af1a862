use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Vehicle: lookups by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_owner")
                    .table(Vehicle::Table)
                    .col(Vehicle::OwnerId)
                    .to_owned(),
            )
            .await?;

        // ServiceRecord: cost rollup per vehicle, rating rollup per service type
        manager
            .create_index(
                Index::create()
                    .name("idx_service_record_vehicle")
                    .table(ServiceRecord::Table)
                    .col(ServiceRecord::VehicleId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_record_service_type")
                    .table(ServiceRecord::Table)
                    .col(ServiceRecord::ServiceTypeId)
                    .to_owned(),
            )
            .await?;

        // Payment: per-mechanic summary and newest-first listing
        manager
            .create_index(
                Index::create()
                    .name("idx_payment_mechanic")
                    .table(Payment::Table)
                    .col(Payment::MechanicId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_payment_timestamp")
                    .table(Payment::Table)
                    .col(Payment::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_vehicle_owner").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_record_vehicle").table(ServiceRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_record_service_type").table(ServiceRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_payment_mechanic").table(Payment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_payment_timestamp").table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, OwnerId }

#[derive(DeriveIden)]
enum ServiceRecord { Table, VehicleId, ServiceTypeId }

#[derive(DeriveIden)]
enum Payment { Table, MechanicId, Timestamp }
