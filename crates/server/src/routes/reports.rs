use axum::{
    extract::{Path, State},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use service::report::domain::{MechanicPaymentSummary, ServiceDetailRow};
use utoipa::ToSchema;

use crate::context::{AdminOnly, Authenticated};
use crate::errors::service_notice;
use crate::notice::Notice;
use crate::routes::{render, Page};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RatingForm {
    pub service_type_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ServiceCostForm {
    pub vehicle_id: Option<String>,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct RatingView {
    pub service_type_id: Option<String>,
    /// `null` when the service type has no rated records.
    pub average_rating: Option<f64>,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ServiceCostView {
    pub vehicle_id: Option<String>,
    /// `null` when there is no cost data.
    pub total_cost: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MechanicPaymentsView {
    pub mechanic_id: String,
    #[serde(flatten)]
    pub summary: MechanicPaymentSummary,
}

#[derive(Debug, Serialize)]
pub struct ServiceDetailsView {
    pub vehicle_id: String,
    pub records: Vec<ServiceDetailRow>,
}

pub async fn rating_page(Authenticated(user): Authenticated, jar: CookieJar) -> (CookieJar, Json<Page<RatingView>>) {
    render(jar, "rating", Some(user), RatingView::default(), Vec::new())
}

#[utoipa::path(post, path = "/rating", tag = "reports", request_body(content = RatingForm, content_type = "application/x-www-form-urlencoded"), responses((status = 200, description = "Average rating of a service type", body = RatingView)))]
pub async fn rating(
    Authenticated(user): Authenticated,
    State(state): State<ServerState>,
    jar: CookieJar,
    Form(form): Form<RatingForm>,
) -> (CookieJar, Json<Page<RatingView>>) {
    let raw = form.service_type_id.as_deref();
    let (average_rating, extra) = match state.reports.average_service_rating(raw).await {
        Ok(Some(avg)) => (Some(avg), Vec::new()),
        Ok(None) => (None, vec![Notice::info("No ratings recorded for this service type.")]),
        Err(e) => (None, vec![service_notice("average rating", &e)]),
    };
    render(jar, "rating", Some(user), RatingView { service_type_id: form.service_type_id, average_rating }, extra)
}

pub async fn service_cost_page(Authenticated(user): Authenticated, jar: CookieJar) -> (CookieJar, Json<Page<ServiceCostView>>) {
    render(jar, "service_cost", Some(user), ServiceCostView::default(), Vec::new())
}

#[utoipa::path(post, path = "/service_cost", tag = "reports", request_body(content = ServiceCostForm, content_type = "application/x-www-form-urlencoded"), responses((status = 200, description = "Total service cost of a vehicle", body = ServiceCostView)))]
pub async fn service_cost(
    Authenticated(user): Authenticated,
    State(state): State<ServerState>,
    jar: CookieJar,
    Form(form): Form<ServiceCostForm>,
) -> (CookieJar, Json<Page<ServiceCostView>>) {
    let raw = form.vehicle_id.as_deref();
    let (total_cost, extra) = match state.reports.total_service_cost(raw).await {
        Ok(Some(total)) => (Some(total), Vec::new()),
        Ok(None) => (None, vec![Notice::info("No cost data for this vehicle.")]),
        Err(e) => (None, vec![service_notice("total service cost", &e)]),
    };
    render(jar, "service_cost", Some(user), ServiceCostView { vehicle_id: form.vehicle_id, total_cost }, extra)
}

#[utoipa::path(get, path = "/mechanic_payments/{id}", tag = "reports", params(("id" = String, Path, description = "Mechanic id")), responses((status = 200, description = "Payment line items and per-status totals")))]
pub async fn mechanic_payments(
    AdminOnly(admin): AdminOnly,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<MechanicPaymentsView>>) {
    let (summary, extra) = match state.reports.mechanic_payment_summary(Some(&id)).await {
        Ok(s) => (s, Vec::new()),
        Err(e) => (MechanicPaymentSummary::default(), vec![service_notice("mechanic payments", &e)]),
    };
    render(jar, "mechanic_payments", Some(admin), MechanicPaymentsView { mechanic_id: id, summary }, extra)
}

#[utoipa::path(get, path = "/vehicle_service_details/{id}", tag = "reports", params(("id" = String, Path, description = "Vehicle id")), responses((status = 200, description = "Service history of a vehicle")))]
pub async fn vehicle_service_details(
    Authenticated(user): Authenticated,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<ServiceDetailsView>>) {
    let (records, extra) = match state.reports.vehicle_service_details(Some(&id)).await {
        Ok(rows) => (rows, Vec::new()),
        Err(e) => (Vec::new(), vec![service_notice("vehicle service details", &e)]),
    };
    render(jar, "vehicle_service_details", Some(user), ServiceDetailsView { vehicle_id: id, records }, extra)
}
