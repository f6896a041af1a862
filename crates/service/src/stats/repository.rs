use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use serde::Serialize;

use models::{app_user, mechanic, owner, payment, service_record, vehicle};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub vehicles: u64,
    pub payments: u64,
    /// Sum of `Completed` payments.
    pub total_collected: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminStats {
    pub users: u64,
    pub owners: u64,
    pub vehicles: u64,
    pub mechanics: u64,
    pub service_records: u64,
    pub payments: u64,
    pub pending_payments: u64,
    pub total_collected: f64,
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardStats, ServiceError>;
    async fn admin(&self) -> Result<AdminStats, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStatsRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStatsRepository {
    async fn total_collected(&self) -> Result<f64, ServiceError> {
        let sum = payment::Entity::find()
            .select_only()
            .column_as(Expr::col(payment::Column::Amount).sum(), "total")
            .filter(payment::Column::Status.eq(payment::STATUS_COMPLETED))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await?;
        Ok(sum.flatten().unwrap_or(0.0))
    }
}

#[async_trait]
impl StatsRepository for SeaOrmStatsRepository {
    async fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
        Ok(DashboardStats {
            vehicles: vehicle::Entity::find().count(&self.db).await?,
            payments: payment::Entity::find().count(&self.db).await?,
            total_collected: self.total_collected().await?,
        })
    }

    async fn admin(&self) -> Result<AdminStats, ServiceError> {
        Ok(AdminStats {
            users: app_user::Entity::find().count(&self.db).await?,
            owners: owner::Entity::find().count(&self.db).await?,
            vehicles: vehicle::Entity::find().count(&self.db).await?,
            mechanics: mechanic::Entity::find().count(&self.db).await?,
            service_records: service_record::Entity::find().count(&self.db).await?,
            payments: payment::Entity::find().count(&self.db).await?,
            pending_payments: payment::Entity::find()
                .filter(payment::Column::Status.eq(payment::STATUS_PENDING))
                .count(&self.db)
                .await?,
            total_collected: self.total_collected().await?,
        })
    }
}

pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct MockStatsRepository {
        pub dashboard: DashboardStats,
        pub admin: AdminStats,
        calls: AtomicUsize,
    }

    impl MockStatsRepository {
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl StatsRepository for MockStatsRepository {
        async fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.dashboard.clone())
        }

        async fn admin(&self) -> Result<AdminStats, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.admin.clone())
        }
    }
}
