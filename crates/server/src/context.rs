//! Access control: identity is resolved once per request by [`resolve_identity`];
//! handlers opt in with the [`Authenticated`] or [`AdminOnly`] extractors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use service::auth::domain::Identity;
use tracing::{debug, warn};

use crate::notice::{self, Notice};
use crate::state::ServerState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Request-scoped caller information.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub identity: Option<Identity>,
}

fn bearer_or_cookie(headers: &HeaderMap) -> Option<String> {
    if let Some(h) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        if let Some(token) = h.strip_prefix("Bearer ") {
            return Some(token.trim().to_string());
        }
    }
    CookieJar::from_headers(headers)
        .get(AUTH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// Verify the caller's token, if any, and attach a [`RequestContext`].
/// A bad or expired token yields an anonymous context.
pub async fn resolve_identity(State(state): State<ServerState>, mut req: Request, next: Next) -> Response {
    let identity = match bearer_or_cookie(req.headers()) {
        Some(token) => match state.auth.verify_token(&token) {
            Ok(identity) => {
                debug!(user_id = identity.user_id, role = identity.role.as_str(), "identity resolved");
                Some(identity)
            }
            Err(e) => {
                warn!(path = %req.uri().path(), code = e.code(), error = %e, "token rejected");
                None
            }
        },
        None => None,
    };
    req.extensions_mut().insert(RequestContext { identity });
    next.run(req).await
}

/// Rejection of the access extractors: redirect with a notice.
pub struct AuthRedirect {
    jar: CookieJar,
    to: &'static str,
    notice: Notice,
}

impl AuthRedirect {
    fn login(parts: &Parts) -> Self {
        Self { jar: CookieJar::from_headers(&parts.headers), to: "/login", notice: Notice::warning("Please log in first.") }
    }

    fn forbidden(parts: &Parts) -> Self {
        Self { jar: CookieJar::from_headers(&parts.headers), to: "/", notice: Notice::danger("Access denied: administrators only.") }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        notice::redirect(self.jar, self.to, self.notice).into_response()
    }
}

fn context(parts: &Parts) -> RequestContext {
    parts.extensions.get::<RequestContext>().cloned().unwrap_or_default()
}

/// Any signed-in user.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match context(parts).identity {
            Some(identity) => Ok(Authenticated(identity)),
            None => Err(AuthRedirect::login(parts)),
        }
    }
}

/// Signed-in user with the admin role.
#[derive(Debug, Clone)]
pub struct AdminOnly(pub Identity);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminOnly {
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match context(parts).identity {
            Some(identity) if identity.is_admin() => Ok(AdminOnly(identity)),
            Some(identity) => {
                warn!(user_id = identity.user_id, path = %parts.uri.path(), "admin route denied");
                Err(AuthRedirect::forbidden(parts))
            }
            None => Err(AuthRedirect::login(parts)),
        }
    }
}

/// Identity if present, never rejects.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for MaybeIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeIdentity(context(parts).identity))
    }
}
