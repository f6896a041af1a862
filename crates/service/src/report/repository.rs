use async_trait::async_trait;
use sea_orm::{
    sea_query::{Alias, Expr, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use models::{mechanic, payment, service_record, service_type};

use super::domain::{ServiceDetailRow, TotalRow};
use crate::errors::ServiceError;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// `AVG(rating)` over rated records of the service type; `None` when there are none.
    async fn average_rating(&self, service_type_id: i32) -> Result<Option<f64>, ServiceError>;
    /// `SUM(cost)` over the vehicle's records; `None` when there are none.
    async fn total_cost(&self, vehicle_id: i32) -> Result<Option<f64>, ServiceError>;
    async fn mechanic_payments(&self, mechanic_id: i32) -> Result<Vec<payment::Model>, ServiceError>;
    async fn mechanic_totals(&self, mechanic_id: i32) -> Result<Vec<TotalRow>, ServiceError>;
    async fn service_details(&self, vehicle_id: i32) -> Result<Vec<ServiceDetailRow>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmReportRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ReportRepository for SeaOrmReportRepository {
    async fn average_rating(&self, service_type_id: i32) -> Result<Option<f64>, ServiceError> {
        // postgres returns NUMERIC for AVG(integer)
        let avg = Func::cast_as(Func::avg(Expr::col(service_record::Column::Rating)), Alias::new("DOUBLE PRECISION"));
        let row = service_record::Entity::find()
            .select_only()
            .column_as(Expr::expr(avg), "avg_rating")
            .filter(service_record::Column::ServiceTypeId.eq(service_type_id))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await?;
        Ok(row.flatten())
    }

    async fn total_cost(&self, vehicle_id: i32) -> Result<Option<f64>, ServiceError> {
        let row = service_record::Entity::find()
            .select_only()
            .column_as(Expr::col(service_record::Column::Cost).sum(), "total_cost")
            .filter(service_record::Column::VehicleId.eq(vehicle_id))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await?;
        Ok(row.flatten())
    }

    async fn mechanic_payments(&self, mechanic_id: i32) -> Result<Vec<payment::Model>, ServiceError> {
        Ok(payment::Entity::find()
            .filter(payment::Column::MechanicId.eq(mechanic_id))
            .order_by_desc(payment::Column::Timestamp)
            .order_by_desc(payment::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn mechanic_totals(&self, mechanic_id: i32) -> Result<Vec<TotalRow>, ServiceError> {
        Ok(payment::Entity::find()
            .select_only()
            .column(payment::Column::Status)
            .column_as(Expr::col(payment::Column::Amount).sum(), "total_amount")
            .column_as(Expr::col(payment::Column::Id).count(), "payment_count")
            .filter(payment::Column::MechanicId.eq(mechanic_id))
            .group_by(payment::Column::Status)
            .order_by_asc(payment::Column::Status)
            .into_model::<TotalRow>()
            .all(&self.db)
            .await?)
    }

    async fn service_details(&self, vehicle_id: i32) -> Result<Vec<ServiceDetailRow>, ServiceError> {
        Ok(service_record::Entity::find()
            .select_only()
            .column_as(service_record::Column::Id, "record_id")
            .column(service_record::Column::ServicedAt)
            .column_as(service_type::Column::Name, "service_type")
            .column_as(mechanic::Column::Name, "mechanic")
            .column(service_record::Column::Description)
            .column(service_record::Column::Cost)
            .column(service_record::Column::Rating)
            .join(JoinType::LeftJoin, service_record::Relation::ServiceType.def())
            .join(JoinType::LeftJoin, service_record::Relation::Mechanic.def())
            .filter(service_record::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(service_record::Column::ServicedAt)
            .order_by_asc(service_record::Column::Id)
            .into_model::<ServiceDetailRow>()
            .all(&self.db)
            .await?)
    }
}

/// Canned answers plus a call counter.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct MockReportRepository {
        pub ratings: HashMap<i32, f64>,
        pub costs: HashMap<i32, f64>,
        pub payments: HashMap<i32, Vec<payment::Model>>,
        pub totals: HashMap<i32, Vec<TotalRow>>,
        pub details: HashMap<i32, Vec<ServiceDetailRow>>,
        /// Every call fails with a storage error when set.
        pub fail_with: Option<String>,
        calls: AtomicUsize,
    }

    impl MockReportRepository {
        /// Double whose every call fails with a storage error.
        pub fn failing(msg: &str) -> Self {
            Self { fail_with: Some(msg.to_string()), ..Default::default() }
        }

        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

        fn touch(&self) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(msg) => Err(ServiceError::Storage(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ReportRepository for MockReportRepository {
        async fn average_rating(&self, service_type_id: i32) -> Result<Option<f64>, ServiceError> {
            self.touch()?;
            Ok(self.ratings.get(&service_type_id).copied())
        }

        async fn total_cost(&self, vehicle_id: i32) -> Result<Option<f64>, ServiceError> {
            self.touch()?;
            Ok(self.costs.get(&vehicle_id).copied())
        }

        async fn mechanic_payments(&self, mechanic_id: i32) -> Result<Vec<payment::Model>, ServiceError> {
            self.touch()?;
            Ok(self.payments.get(&mechanic_id).cloned().unwrap_or_default())
        }

        async fn mechanic_totals(&self, mechanic_id: i32) -> Result<Vec<TotalRow>, ServiceError> {
            self.touch()?;
            Ok(self.totals.get(&mechanic_id).cloned().unwrap_or_default())
        }

        async fn service_details(&self, vehicle_id: i32) -> Result<Vec<ServiceDetailRow>, ServiceError> {
            self.touch()?;
            Ok(self.details.get(&vehicle_id).cloned().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_history};

    #[tokio::test]
    async fn average_rating_ignores_unrated_records() -> anyhow::Result<()> {
        let db = get_db().await?;
        let seed = seed_history(&db).await?;
        let repo = SeaOrmReportRepository { db };

        let avg = repo.average_rating(seed.oil_change_id).await?.expect("rated records");
        assert!((avg - 4.5).abs() < 1e-9);
        // only an unrated record
        assert_eq!(repo.average_rating(seed.brakes_id).await?, None);
        assert_eq!(repo.average_rating(9_999).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn total_cost_sums_in_the_database() -> anyhow::Result<()> {
        let db = get_db().await?;
        let seed = seed_history(&db).await?;
        let repo = SeaOrmReportRepository { db };

        let total = repo.total_cost(seed.vehicle_id).await?.expect("has records");
        assert!((total - 320.5).abs() < 1e-9);
        assert_eq!(repo.total_cost(seed.other_vehicle_id).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn mechanic_totals_grouped_by_status() -> anyhow::Result<()> {
        let db = get_db().await?;
        let seed = seed_history(&db).await?;
        let record_id = repo_first_record(&db).await?;
        for (amount, status) in [(100.0, "Completed"), (50.0, "Completed"), (25.0, "Pending")] {
            payment::create(&db, &payment::NewPayment {
                record_id,
                mechanic_id: seed.mechanic_id,
                amount,
                upi: None,
                credit_card: Some("4111".into()),
                status: Some(status.into()),
            })
            .await?;
        }
        let repo = SeaOrmReportRepository { db };

        let totals = repo.mechanic_totals(seed.mechanic_id).await?;
        assert_eq!(
            totals,
            vec![
                TotalRow { status: "Completed".into(), total_amount: 150.0, payment_count: 2 },
                TotalRow { status: "Pending".into(), total_amount: 25.0, payment_count: 1 },
            ]
        );
        assert_eq!(repo.mechanic_payments(seed.mechanic_id).await?.len(), 3);
        assert!(repo.mechanic_payments(seed.mechanic_id + 1).await?.is_empty());
        assert!(repo.mechanic_totals(seed.mechanic_id + 1).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn service_details_join_names() -> anyhow::Result<()> {
        let db = get_db().await?;
        let seed = seed_history(&db).await?;
        let repo = SeaOrmReportRepository { db };

        let rows = repo.service_details(seed.vehicle_id).await?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].service_type.as_deref(), Some("Oil Change"));
        assert_eq!(rows[2].service_type.as_deref(), Some("Brake Service"));
        assert!(rows.iter().all(|r| r.mechanic.as_deref() == Some("Asha")));
        assert_eq!(rows[2].rating, None);
        assert!(repo.service_details(seed.other_vehicle_id).await?.is_empty());
        Ok(())
    }

    async fn repo_first_record(db: &DatabaseConnection) -> anyhow::Result<i32> {
        let rec = service_record::Entity::find()
            .order_by_asc(service_record::Column::Id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("no seeded record"))?;
        Ok(rec.id)
    }
}
