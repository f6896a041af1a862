use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::notice::{Notice, Severity};
use crate::routes::{auth::LoginForm, payments::PaymentFormDoc, reports, vehicles::VehicleFormDoc};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub version: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::vehicles::list,
        crate::routes::vehicles::add,
        crate::routes::vehicles::delete,
        crate::routes::payments::list,
        crate::routes::payments::add,
        crate::routes::reports::rating,
        crate::routes::reports::service_cost,
        crate::routes::reports::mechanic_payments,
        crate::routes::reports::vehicle_service_details,
    ),
    components(
        schemas(
            HealthResponse,
            LoginForm,
            VehicleFormDoc,
            PaymentFormDoc,
            reports::RatingForm,
            reports::ServiceCostForm,
            reports::RatingView,
            reports::ServiceCostView,
            Notice,
            Severity,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "vehicles"),
        (name = "payments"),
        (name = "reports")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_report_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/rating", "/service_cost", "/mechanic_payments/{id}", "/vehicles"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
