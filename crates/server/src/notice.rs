//! One-shot user notices carried across a redirect in the `flash` cookie.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self { Self { severity, message: message.into() } }
    pub fn success(message: impl Into<String>) -> Self { Self::new(Severity::Success, message) }
    pub fn info(message: impl Into<String>) -> Self { Self::new(Severity::Info, message) }
    pub fn warning(message: impl Into<String>) -> Self { Self::new(Severity::Warning, message) }
    pub fn danger(message: impl Into<String>) -> Self { Self::new(Severity::Danger, message) }
}

pub fn encode(notices: &[Notice]) -> Option<String> {
    serde_json::to_vec(notices).ok().map(|bytes| URL_SAFE_NO_PAD.encode(bytes))
}

/// Malformed payloads decode to nothing.
pub fn decode(raw: &str) -> Vec<Notice> {
    URL_SAFE_NO_PAD
        .decode(raw)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value)).path("/").http_only(true).same_site(SameSite::Lax).build()
}

/// Queue a notice for the next rendered view, keeping any already pending.
pub fn push(jar: CookieJar, notice: Notice) -> CookieJar {
    let mut pending = jar.get(FLASH_COOKIE).map(|c| decode(c.value())).unwrap_or_default();
    pending.push(notice);
    match encode(&pending) {
        Some(value) => jar.add(flash_cookie(value)),
        None => jar,
    }
}

/// Drain pending notices; the cookie is cleared when there were any.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<Notice>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, Vec::new());
    };
    let notices = decode(&raw);
    debug!(count = notices.len(), "flash notices consumed");
    let mut removal = Cookie::from(FLASH_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), notices)
}

/// `303 See Other` to `to` with `notice` queued.
pub fn redirect(jar: CookieJar, to: &str, notice: Notice) -> (CookieJar, Redirect) {
    (push(jar, notice), Redirect::to(to))
}
