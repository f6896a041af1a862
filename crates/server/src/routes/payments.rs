use axum::{extract::State, response::Redirect, Form, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use service::payment::domain::PaymentForm;
use utoipa::ToSchema;

use crate::context::AdminOnly;
use crate::errors::service_notice;
use crate::notice::{self, Notice};
use crate::routes::{render, Page};
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct PaymentListView {
    pub payments: Vec<models::payment::Model>,
}

#[utoipa::path(get, path = "/payments", tag = "payments", responses((status = 200, description = "Payments, newest first"), (status = 303, description = "Not an administrator")))]
pub async fn list(
    AdminOnly(admin): AdminOnly,
    State(state): State<ServerState>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<PaymentListView>>) {
    let (payments, extra) = match state.payments.list().await {
        Ok(p) => (p, Vec::new()),
        Err(e) => (Vec::new(), vec![service_notice("list payments", &e)]),
    };
    render(jar, "payments", Some(admin), PaymentListView { payments }, extra)
}

#[utoipa::path(post, path = "/add_payments", tag = "payments", request_body(content = PaymentFormDoc, content_type = "application/x-www-form-urlencoded"), responses((status = 303, description = "Redirect to /payments")))]
pub async fn add(
    AdminOnly(_admin): AdminOnly,
    State(state): State<ServerState>,
    jar: CookieJar,
    Form(form): Form<PaymentForm>,
) -> (CookieJar, Redirect) {
    let notice = match state.payments.add(&form).await {
        Ok(p) => Notice::success(format!("Payment {} recorded ({}).", p.id, p.status)),
        Err(e) => service_notice("add payment", &e),
    };
    notice::redirect(jar, "/payments", notice)
}

/// Form fields of `POST /add_payments`.
#[derive(ToSchema)]
pub struct PaymentFormDoc {
    pub record_id: String,
    pub mechanic_id: String,
    pub amount: String,
    pub upi: Option<String>,
    pub credit_card: Option<String>,
    /// Defaults to `Pending`.
    pub status: Option<String>,
}
