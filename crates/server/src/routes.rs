use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use service::auth::domain::Identity;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::context::{resolve_identity, MaybeIdentity};
use crate::notice::{self, Notice};
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod dashboard;
pub mod payments;
pub mod reports;
pub mod vehicles;

/// JSON view: page data plus the notices to show with it.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub page: &'static str,
    pub user: Option<Identity>,
    pub notices: Vec<Notice>,
    #[serde(flatten)]
    pub data: T,
}

/// Build a view, draining pending flash notices ahead of `extra`.
pub fn render<T: Serialize>(
    jar: CookieJar,
    page: &'static str,
    user: Option<Identity>,
    data: T,
    extra: Vec<Notice>,
) -> (CookieJar, Json<Page<T>>) {
    let (jar, mut notices) = notice::take(jar);
    notices.extend(extra);
    (jar, Json(Page { page, user, notices, data }))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub links: Vec<&'static str>,
}

pub async fn home(MaybeIdentity(user): MaybeIdentity, jar: CookieJar) -> (CookieJar, Json<Page<HomeView>>) {
    let mut links = vec!["/vehicles", "/add_vehicle", "/dashboard", "/rating", "/service_cost"];
    match &user {
        Some(u) if u.is_admin() => links.extend(["/payments", "/admin_panel", "/logout"]),
        Some(_) => links.push("/logout"),
        None => links.push("/login"),
    }
    render(jar, "home", user, HomeView { links }, Vec::new())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router with identity resolution and tracing.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::detail))
        .route("/vehicles/delete/:id", post(vehicles::delete))
        .route("/add_vehicle", get(vehicles::add_page).post(vehicles::add))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/admin_panel", get(dashboard::admin_panel))
        .route("/payments", get(payments::list))
        .route("/add_payments", post(payments::add))
        .route("/rating", get(reports::rating_page).post(reports::rating))
        .route("/service_cost", get(reports::service_cost_page).post(reports::service_cost))
        .route("/mechanic_payments/:id", get(reports::mechanic_payments))
        .route("/vehicle_service_details/:id", get(reports::vehicle_service_details))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_identity))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
