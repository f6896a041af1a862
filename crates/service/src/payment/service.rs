use std::sync::Arc;

use tracing::instrument;

use super::domain::PaymentForm;
use super::repository::PaymentRepository;
use crate::errors::ServiceError;

pub struct PaymentService<R: PaymentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PaymentRepository + ?Sized> PaymentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<models::payment::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Validate before any storage call; status defaults to `Pending`.
    #[instrument(skip(self, form))]
    pub async fn add(&self, form: &PaymentForm) -> Result<models::payment::Model, ServiceError> {
        let input = form.parse()?;
        self.repo.create(&input).await
    }
}
