use axum::{extract::State, response::Redirect, Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use service::auth::{domain::LoginInput, errors::AuthError};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::context::{MaybeIdentity, AUTH_COOKIE};
use crate::notice::{self, Notice};
use crate::routes::{render, Page};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginView {
    pub fields: [&'static str; 2],
}

pub async fn login_page(MaybeIdentity(user): MaybeIdentity, jar: CookieJar) -> (CookieJar, Json<Page<LoginView>>) {
    render(jar, "login", user, LoginView { fields: ["username", "password"] }, Vec::new())
}

/// Admins land on the admin panel, everyone else on the dashboard.
#[utoipa::path(post, path = "/login", tag = "auth", request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"), responses((status = 303, description = "Redirect with auth cookie on success, back to /login otherwise")))]
pub async fn login(State(state): State<ServerState>, jar: CookieJar, Form(form): Form<LoginForm>) -> (CookieJar, Redirect) {
    if form.username.trim().is_empty() || form.password.is_empty() {
        return notice::redirect(jar, "/login", Notice::warning("Username and password are required."));
    }
    let input = LoginInput { username: form.username, password: form.password };
    match state.auth.login(input).await {
        Ok(session) => {
            let cookie = Cookie::build((AUTH_COOKIE, session.token))
                .path("/")
                .http_only(true)
                .secure(state.cookies.secure)
                .same_site(SameSite::Lax)
                .build();
            let to = if session.user.role.is_admin() { "/admin_panel" } else { "/dashboard" };
            info!(user_id = session.user.id, event = "login_ok", "signed in");
            notice::redirect(jar.add(cookie), to, Notice::success(format!("Welcome, {}!", session.user.username)))
        }
        Err(AuthError::BadCredentials) => notice::redirect(jar, "/login", Notice::danger("Invalid username or password.")),
        Err(e) if e.is_user_error() => {
            warn!(code = e.code(), error = %e, "login rejected");
            notice::redirect(jar, "/login", Notice::warning(format!("Login failed: {e}")))
        }
        Err(e) => {
            error!(code = e.code(), error = %e, "login failed");
            notice::redirect(jar, "/login", Notice::danger("Sign-in is unavailable right now."))
        }
    }
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let mut removal = Cookie::from(AUTH_COOKIE);
    removal.set_path("/");
    notice::redirect(jar.remove(removal), "/login", Notice::info("You have been logged out."))
}
