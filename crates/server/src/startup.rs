use axum::Router;
use common::utils::logging::init_logging_default;
use configs::AppConfig;
use dotenvy::dotenv;
use service::auth::domain::Role;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::{Repositories, ServerState};

/// Connect, migrate when configured and create the bootstrap admin.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await.map_err(|e| StartupError::Database(e.to_string()))?;
        info!(event = "migrations_applied", "schema up to date");
    }

    let state = ServerState::new(Repositories::seaorm(&db), &cfg.auth);

    if let Some(admin) = &cfg.auth.bootstrap_admin {
        let created = state.auth.ensure_user(&admin.username, &admin.password, Role::Admin).await?;
        if created {
            info!(username = %admin.username, event = "bootstrap_admin_created", "bootstrap admin account created");
        }
    }
    if cfg.auth.jwt_secret == configs::DEV_JWT_SECRET {
        warn!("using the development JWT secret; set JWT_SECRET in production");
    }
    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: load configuration, build the app and serve until Ctrl+C.
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging_default();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(anyhow::Error::from)?;
    info!(%addr, "motorshop listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
