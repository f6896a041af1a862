use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use service::stats::{AdminStats, DashboardStats};

use crate::context::{AdminOnly, Authenticated};
use crate::errors::service_notice;
use crate::routes::{render, Page};
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
}

#[derive(Debug, Serialize)]
pub struct AdminPanelView {
    pub stats: AdminStats,
}

pub async fn dashboard(
    Authenticated(user): Authenticated,
    State(state): State<ServerState>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<DashboardView>>) {
    let (stats, extra) = match state.stats.dashboard().await {
        Ok(s) => (s, Vec::new()),
        Err(e) => (DashboardStats::default(), vec![service_notice("dashboard", &e)]),
    };
    render(jar, "dashboard", Some(user), DashboardView { stats }, extra)
}

pub async fn admin_panel(
    AdminOnly(admin): AdminOnly,
    State(state): State<ServerState>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<AdminPanelView>>) {
    let (stats, extra) = match state.stats.admin().await {
        Ok(s) => (s, Vec::new()),
        Err(e) => (AdminStats::default(), vec![service_notice("admin panel", &e)]),
    };
    render(jar, "admin_panel", Some(admin), AdminPanelView { stats }, extra)
}
