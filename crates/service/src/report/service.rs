use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{MechanicPaymentSummary, ServiceDetailRow};
use super::repository::ReportRepository;
use crate::errors::ServiceError;
use crate::validation;

/// Thin typed wrapper over the aggregation queries. Identifiers arrive raw
/// from forms or paths and are validated before the store is touched.
pub struct ReportService<R: ReportRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ReportRepository + ?Sized> ReportService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// `None` means the service type has no rated records, which is not `Some(0.0)`.
    #[instrument(skip(self))]
    pub async fn average_service_rating(&self, service_type_id: Option<&str>) -> Result<Option<f64>, ServiceError> {
        let id = validation::parse_id("service_type_id", service_type_id)?;
        let avg = self.repo.average_rating(id).await?;
        info!(service_type_id = id, found = avg.is_some(), event = "average_service_rating");
        Ok(avg)
    }

    /// `None` means no cost data for the vehicle.
    #[instrument(skip(self))]
    pub async fn total_service_cost(&self, vehicle_id: Option<&str>) -> Result<Option<f64>, ServiceError> {
        let id = validation::parse_id("vehicle_id", vehicle_id)?;
        let total = self.repo.total_cost(id).await?;
        info!(vehicle_id = id, found = total.is_some(), event = "total_service_cost");
        Ok(total)
    }

    #[instrument(skip(self))]
    pub async fn mechanic_payment_summary(&self, mechanic_id: Option<&str>) -> Result<MechanicPaymentSummary, ServiceError> {
        let id = validation::parse_id("mechanic_id", mechanic_id)?;
        let line_items = self.repo.mechanic_payments(id).await?;
        let totals = self.repo.mechanic_totals(id).await?;
        Ok(MechanicPaymentSummary { line_items, totals })
    }

    #[instrument(skip(self))]
    pub async fn vehicle_service_details(&self, vehicle_id: Option<&str>) -> Result<Vec<ServiceDetailRow>, ServiceError> {
        let id = validation::parse_id("vehicle_id", vehicle_id)?;
        self.repo.service_details(id).await
    }
}
