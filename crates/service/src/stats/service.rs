use std::sync::Arc;

use super::repository::{AdminStats, DashboardStats, StatsRepository};
use crate::errors::ServiceError;

pub struct StatsService<R: StatsRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StatsRepository + ?Sized> StatsService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn dashboard(&self) -> Result<DashboardStats, ServiceError> { self.repo.dashboard().await }

    pub async fn admin(&self) -> Result<AdminStats, ServiceError> { self.repo.admin().await }
}
