use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{VehicleCreated, VehicleForm};
use super::repository::VehicleRepository;
use crate::errors::ServiceError;
use crate::validation;

/// Application service for the vehicle screens.
pub struct VehicleService<R: VehicleRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: VehicleRepository + ?Sized> VehicleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Blank or absent `q` returns every vehicle.
    pub async fn search(&self, q: Option<&str>) -> Result<Vec<models::vehicle::Model>, ServiceError> {
        self.repo.search(q.map(str::trim).filter(|q| !q.is_empty())).await
    }

    /// Look up by the raw path segment.
    pub async fn get(&self, raw_id: &str) -> Result<models::vehicle::Model, ServiceError> {
        let id = validation::parse_id("vehicle id", Some(raw_id))?;
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("vehicle"))
    }

    /// Validate the form, then find-or-create the owner and insert the vehicle.
    #[instrument(skip(self, form))]
    pub async fn add(&self, form: &VehicleForm) -> Result<VehicleCreated, ServiceError> {
        let input = form.parse()?;
        self.repo.create_with_owner(&input).await
    }

    /// Idempotent; returns whether a row was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<bool, ServiceError> {
        let id = validation::parse_id("vehicle id", Some(raw_id))?;
        let removed = self.repo.delete(id).await?;
        info!(vehicle_id = id, removed, event = "vehicle_delete");
        Ok(removed)
    }
}
