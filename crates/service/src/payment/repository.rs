use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::info;

use models::payment;

use crate::errors::ServiceError;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<payment::Model>, ServiceError>;
    async fn create(&self, input: &payment::NewPayment) -> Result<payment::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPaymentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn list(&self) -> Result<Vec<payment::Model>, ServiceError> {
        Ok(payment::Entity::find()
            .order_by_desc(payment::Column::Timestamp)
            .order_by_desc(payment::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, input: &payment::NewPayment) -> Result<payment::Model, ServiceError> {
        let created = payment::create(&self.db, input).await?;
        info!(payment_id = created.id, mechanic_id = created.mechanic_id, status = %created.status, event = "payment_created");
        Ok(created)
    }
}

/// In-memory double that records how often storage was touched.
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPaymentRepository {
        payments: Mutex<Vec<payment::Model>>,
        calls: AtomicUsize,
    }

    impl MockPaymentRepository {
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl PaymentRepository for MockPaymentRepository {
        async fn list(&self) -> Result<Vec<payment::Model>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut all = self.payments.lock().unwrap().clone();
            all.reverse();
            Ok(all)
        }

        async fn create(&self, input: &payment::NewPayment) -> Result<payment::Model, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut payments = self.payments.lock().unwrap();
            let created = payment::Model {
                id: payments.len() as i32 + 1,
                record_id: input.record_id,
                mechanic_id: input.mechanic_id,
                amount: input.amount,
                upi: input.upi.clone(),
                credit_card: input.credit_card.clone(),
                status: input.status.clone().unwrap_or_else(|| payment::STATUS_PENDING.to_string()),
                timestamp: chrono::Utc::now().into(),
            };
            payments.push(created.clone());
            Ok(created)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_history};
    use sea_orm::{EntityTrait, QueryOrder};

    #[tokio::test]
    async fn list_is_newest_first() -> anyhow::Result<()> {
        let db = get_db().await?;
        let seed = seed_history(&db).await?;
        let record = models::service_record::Entity::find()
            .order_by_asc(models::service_record::Column::Id)
            .one(&db)
            .await?
            .expect("seeded record");
        let repo = SeaOrmPaymentRepository { db };
        for amount in [10.0, 20.0, 30.0] {
            repo.create(&payment::NewPayment {
                record_id: record.id,
                mechanic_id: seed.mechanic_id,
                amount,
                upi: Some("shop@upi".into()),
                credit_card: None,
                status: None,
            })
            .await?;
        }
        let amounts: Vec<f64> = repo.list().await?.into_iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![30.0, 20.0, 10.0]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_record_is_rejected_by_the_store() -> anyhow::Result<()> {
        let repo = SeaOrmPaymentRepository { db: get_db().await? };
        let err = repo
            .create(&payment::NewPayment { record_id: 999, mechanic_id: 999, amount: 1.0, upi: None, credit_card: None, status: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        Ok(())
    }
}
