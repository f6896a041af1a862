use async_trait::async_trait;
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, LikeExpr},
    Condition, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

use models::{owner, vehicle};

use super::domain::{like_pattern, matches_query, VehicleCreated};
use crate::errors::ServiceError;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Case-insensitive substring match on model or vehicle number; `None` lists all.
    async fn search(&self, q: Option<&str>) -> Result<Vec<vehicle::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<vehicle::Model>, ServiceError>;
    /// Find-or-create the owner and insert the vehicle in one transaction.
    async fn create_with_owner(&self, input: &vehicle::NewVehicle) -> Result<VehicleCreated, ServiceError>;
    /// `false` when nothing matched.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmVehicleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn search(&self, q: Option<&str>) -> Result<Vec<vehicle::Model>, ServiceError> {
        let query = vehicle::Entity::find().order_by_asc(vehicle::Column::Id);
        let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) else {
            return Ok(query.all(&self.db).await?);
        };
        if self.db.get_database_backend() == DbBackend::Postgres {
            let pattern = like_pattern(q);
            let ilike = |col: vehicle::Column| Expr::col((vehicle::Entity, col)).ilike(LikeExpr::new(pattern.clone()).escape('!'));
            let hits = query
                .filter(Condition::any().add(ilike(vehicle::Column::Model)).add(ilike(vehicle::Column::VehicleNumber)))
                .all(&self.db)
                .await?;
            return Ok(hits);
        }
        // SQLite's LOWER()/LIKE fold ASCII only, so match in process
        let all = query.all(&self.db).await?;
        Ok(all.into_iter().filter(|v| matches_query(v, q)).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<vehicle::Model>, ServiceError> {
        Ok(vehicle::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_with_owner(&self, input: &vehicle::NewVehicle) -> Result<VehicleCreated, ServiceError> {
        // dropping `txn` on any early return rolls back
        let txn = self.db.begin().await?;
        let (_, owner_created) = owner::find_or_create_placeholder(&txn, input.owner_id).await?;
        let created = vehicle::create(&txn, input).await?;
        txn.commit().await?;
        info!(vehicle_id = created.id, owner_id = created.owner_id, owner_created, event = "vehicle_created");
        Ok(VehicleCreated { vehicle: created, owner_created })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = vehicle::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// In-memory double that records how often storage was touched.
pub mod mock {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockVehicleRepository {
        vehicles: Mutex<Vec<vehicle::Model>>,
        owners: Mutex<BTreeSet<i32>>,
        calls: AtomicUsize,
    }

    impl MockVehicleRepository {
        pub fn with_owners(ids: impl IntoIterator<Item = i32>) -> Self {
            let repo = Self::default();
            repo.owners.lock().unwrap().extend(ids);
            repo
        }

        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

        pub fn owner_count(&self) -> usize { self.owners.lock().unwrap().len() }

        fn touch(&self) { self.calls.fetch_add(1, Ordering::SeqCst); }
    }

    #[async_trait]
    impl VehicleRepository for MockVehicleRepository {
        async fn search(&self, q: Option<&str>) -> Result<Vec<vehicle::Model>, ServiceError> {
            self.touch();
            let needle = q.map(str::trim).unwrap_or_default();
            let vehicles = self.vehicles.lock().unwrap();
            Ok(vehicles
                .iter()
                .filter(|v| needle.is_empty() || matches_query(v, needle))
                .cloned()
                .collect())
        }

        async fn get(&self, id: i32) -> Result<Option<vehicle::Model>, ServiceError> {
            self.touch();
            Ok(self.vehicles.lock().unwrap().iter().find(|v| v.id == id).cloned())
        }

        async fn create_with_owner(&self, input: &vehicle::NewVehicle) -> Result<VehicleCreated, ServiceError> {
            self.touch();
            let owner_created = self.owners.lock().unwrap().insert(input.owner_id);
            let mut vehicles = self.vehicles.lock().unwrap();
            let created = vehicle::Model {
                id: vehicles.iter().map(|v| v.id).max().unwrap_or(0) + 1,
                owner_id: input.owner_id,
                license_plate: input.license_plate.clone(),
                model: input.model.clone(),
                mileage: input.mileage,
                vehicle_number: input.vehicle_number.clone(),
            };
            vehicles.push(created.clone());
            Ok(VehicleCreated { vehicle: created, owner_created })
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            self.touch();
            let mut vehicles = self.vehicles.lock().unwrap();
            let before = vehicles.len();
            vehicles.retain(|v| v.id != id);
            Ok(vehicles.len() != before)
        }
    }
}
