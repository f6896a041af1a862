//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_app_user;
mod m20240301_000002_create_owner;
mod m20240301_000003_create_vehicle;
mod m20240301_000004_create_mechanic;
mod m20240301_000005_create_service_type;
mod m20240301_000006_create_service_record;
mod m20240301_000007_create_payment;
mod m20240301_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_app_user::Migration),
            Box::new(m20240301_000002_create_owner::Migration),
            Box::new(m20240301_000003_create_vehicle::Migration),
            Box::new(m20240301_000004_create_mechanic::Migration),
            Box::new(m20240301_000005_create_service_type::Migration),
            Box::new(m20240301_000006_create_service_record::Migration),
            Box::new(m20240301_000007_create_payment::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000008_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn up_and_down_on_sqlite() -> Result<(), DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await?;

        Migrator::up(&db, None).await?;
        let manager = SchemaManager::new(&db);
        for table in ["app_user", "owner", "vehicle", "mechanic", "service_type", "service_record", "payment"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("vehicle").await?);
        Ok(())
    }
}
