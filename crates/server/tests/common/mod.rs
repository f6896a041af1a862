#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use sea_orm::DatabaseConnection;
use service::auth::domain::{AuthUser, Role};

use server::state::{Repositories, ServerState};

pub const SECRET: &str = "integration-test-secret";
pub const ADMIN_PASSWORD: &str = "admin-pass-123";
pub const STAFF_PASSWORD: &str = "staff-pass-123";

pub fn auth_config() -> configs::AuthConfig {
    configs::AuthConfig { jwt_secret: SECRET.into(), token_ttl_hours: 1, cookie_secure: false, bootstrap_admin: None }
}

/// Migrated in-memory database with an `admin` and a `staff` account.
pub async fn sqlite_state() -> anyhow::Result<(DatabaseConnection, ServerState)> {
    let db = models::db::connect_in_memory().await?;
    let state = ServerState::new(Repositories::seaorm(&db), &auth_config());
    state.auth.ensure_user("admin", ADMIN_PASSWORD, Role::Admin).await?;
    state.auth.ensure_user("staff", STAFF_PASSWORD, Role::Staff).await?;
    Ok((db, state))
}

/// Signed token without a password round-trip.
pub fn token(state: &ServerState, role: Role) -> String {
    let user = match role {
        Role::Admin => AuthUser { id: 1, username: "admin".into(), role },
        Role::Staff => AuthUser { id: 2, username: "staff".into(), role },
    };
    state.auth.issue_token(&user).expect("issue token")
}

pub fn auth_cookie(token: &str) -> String {
    format!("auth_token={token}")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut b = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        b = b.header(header::COOKIE, c);
    }
    b.body(Body::empty()).expect("request")
}

pub fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut b = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        b = b.header(header::COOKIE, c);
    }
    b.body(Body::from(body.to_string())).expect("request")
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()).map(str::to_string)
}

/// Value of a cookie set by the response, if any.
pub fn set_cookie(resp: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix(&prefix).map(|rest| rest.split(';').next().unwrap_or("").to_string()))
}

/// Notices queued in the response's flash cookie.
pub fn flashed(resp: &Response<Body>) -> Vec<serde_json::Value> {
    set_cookie(resp, "flash")
        .and_then(|raw| URL_SAFE_NO_PAD.decode(raw).ok())
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

pub async fn body_json(resp: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
