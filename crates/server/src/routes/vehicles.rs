use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use service::vehicle::domain::VehicleForm;
use utoipa::{IntoParams, ToSchema};

use crate::context::{AdminOnly, Authenticated};
use crate::errors::service_notice;
use crate::notice::{self, Notice};
use crate::routes::{render, Page};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of model or vehicle number.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VehicleListView {
    pub q: Option<String>,
    pub vehicles: Vec<models::vehicle::Model>,
}

#[derive(Debug, Serialize)]
pub struct VehicleView {
    pub vehicle: Option<models::vehicle::Model>,
}

#[derive(Debug, Serialize)]
pub struct AddVehicleView {
    pub fields: [&'static str; 5],
}

#[utoipa::path(get, path = "/vehicles", tag = "vehicles", params(SearchQuery), responses((status = 200, description = "Vehicle list view"), (status = 303, description = "Not signed in")))]
pub async fn list(
    Authenticated(user): Authenticated,
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<VehicleListView>>) {
    let (vehicles, extra) = match state.vehicles.search(query.q.as_deref()).await {
        Ok(v) => (v, Vec::new()),
        Err(e) => (Vec::new(), vec![service_notice("vehicle search", &e)]),
    };
    render(jar, "vehicles", Some(user), VehicleListView { q: query.q, vehicles }, extra)
}

pub async fn detail(
    Authenticated(user): Authenticated,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<VehicleView>>) {
    let (vehicle, extra) = match state.vehicles.get(&id).await {
        Ok(v) => (Some(v), Vec::new()),
        Err(e) => (None, vec![service_notice("vehicle lookup", &e)]),
    };
    render(jar, "vehicle", Some(user), VehicleView { vehicle }, extra)
}

pub async fn add_page(Authenticated(user): Authenticated, jar: CookieJar) -> (CookieJar, Json<Page<AddVehicleView>>) {
    render(jar, "add_vehicle", Some(user), AddVehicleView { fields: ["owner_id", "license", "model", "milage", "v_no"] }, Vec::new())
}

#[utoipa::path(post, path = "/add_vehicle", tag = "vehicles", request_body(content = VehicleFormDoc, content_type = "application/x-www-form-urlencoded"), responses((status = 303, description = "Redirect to /vehicles on success, back to the form otherwise")))]
pub async fn add(
    Authenticated(_user): Authenticated,
    State(state): State<ServerState>,
    jar: CookieJar,
    Form(form): Form<VehicleForm>,
) -> (CookieJar, Redirect) {
    match state.vehicles.add(&form).await {
        Ok(created) => {
            let mut msg = format!("Vehicle {} added.", created.vehicle.vehicle_number);
            if created.owner_created {
                msg.push_str(&format!(" Owner {} was not on file; a placeholder record was created.", created.vehicle.owner_id));
            }
            notice::redirect(jar, "/vehicles", Notice::success(msg))
        }
        Err(e) => notice::redirect(jar, "/add_vehicle", service_notice("add vehicle", &e)),
    }
}

#[utoipa::path(post, path = "/vehicles/delete/{id}", tag = "vehicles", params(("id" = String, Path, description = "Vehicle id")), responses((status = 303, description = "Redirect to /vehicles")))]
pub async fn delete(
    AdminOnly(_admin): AdminOnly,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let notice = match state.vehicles.delete(&id).await {
        Ok(true) => Notice::success("Vehicle deleted."),
        Ok(false) => Notice::info("No such vehicle; nothing to delete."),
        Err(e) => service_notice("delete vehicle", &e),
    };
    notice::redirect(jar, "/vehicles", notice)
}

/// Form fields of `POST /add_vehicle`.
#[derive(ToSchema)]
pub struct VehicleFormDoc {
    pub owner_id: String,
    pub license: String,
    pub model: String,
    pub milage: String,
    pub v_no: String,
}
