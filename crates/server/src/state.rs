use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    auth::{
        repo::seaorm::SeaOrmAuthRepository,
        repository::AuthRepository,
        service::{AuthConfig, AuthService},
    },
    payment::{repository::{PaymentRepository, SeaOrmPaymentRepository}, PaymentService},
    report::{repository::{ReportRepository, SeaOrmReportRepository}, ReportService},
    stats::{repository::{SeaOrmStatsRepository, StatsRepository}, StatsService},
    vehicle::{repository::{SeaOrmVehicleRepository, VehicleRepository}, VehicleService},
};

/// Persistence seams behind the services. Tests swap single entries for mocks.
#[derive(Clone)]
pub struct Repositories {
    pub auth: Arc<dyn AuthRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub stats: Arc<dyn StatsRepository>,
}

impl Repositories {
    pub fn seaorm(db: &DatabaseConnection) -> Self {
        Self {
            auth: Arc::new(SeaOrmAuthRepository { db: db.clone() }),
            vehicles: Arc::new(SeaOrmVehicleRepository { db: db.clone() }),
            payments: Arc::new(SeaOrmPaymentRepository { db: db.clone() }),
            reports: Arc::new(SeaOrmReportRepository { db: db.clone() }),
            stats: Arc::new(SeaOrmStatsRepository { db: db.clone() }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CookieSettings {
    pub secure: bool,
}

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<dyn AuthRepository>>,
    pub vehicles: Arc<VehicleService<dyn VehicleRepository>>,
    pub payments: Arc<PaymentService<dyn PaymentRepository>>,
    pub reports: Arc<ReportService<dyn ReportRepository>>,
    pub stats: Arc<StatsService<dyn StatsRepository>>,
    pub cookies: CookieSettings,
}

impl ServerState {
    pub fn new(repos: Repositories, auth: &configs::AuthConfig) -> Self {
        let auth_cfg = AuthConfig { jwt_secret: auth.jwt_secret.clone(), token_ttl_hours: auth.token_ttl_hours };
        Self {
            auth: Arc::new(AuthService::new(repos.auth, auth_cfg)),
            vehicles: Arc::new(VehicleService::new(repos.vehicles)),
            payments: Arc::new(PaymentService::new(repos.payments)),
            reports: Arc::new(ReportService::new(repos.reports)),
            stats: Arc::new(StatsService::new(repos.stats)),
            cookies: CookieSettings { secure: auth.cookie_secure },
        }
    }
}
