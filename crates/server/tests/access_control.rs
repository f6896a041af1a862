mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use service::auth::{domain::Role, repository::mock::MockAuthRepository};
use service::payment::repository::mock::MockPaymentRepository;
use service::report::repository::mock::MockReportRepository;
use service::stats::repository::mock::MockStatsRepository;
use service::vehicle::repository::mock::MockVehicleRepository;
use tower::ServiceExt;

use server::routes;
use server::state::{Repositories, ServerState};

use common::*;

struct Doubles {
    vehicles: Arc<MockVehicleRepository>,
    payments: Arc<MockPaymentRepository>,
    reports: Arc<MockReportRepository>,
    stats: Arc<MockStatsRepository>,
}

fn app() -> (axum::Router, ServerState, Doubles) {
    let d = Doubles {
        vehicles: Arc::new(MockVehicleRepository::default()),
        payments: Arc::new(MockPaymentRepository::default()),
        reports: Arc::new(MockReportRepository::default()),
        stats: Arc::new(MockStatsRepository::default()),
    };
    let repos = Repositories {
        auth: Arc::new(MockAuthRepository::default()),
        vehicles: d.vehicles.clone(),
        payments: d.payments.clone(),
        reports: d.reports.clone(),
        stats: d.stats.clone(),
    };
    let state = ServerState::new(repos, &auth_config());
    (routes::build_router(state.clone()), state, d)
}

#[tokio::test]
async fn staff_cannot_list_payments_or_open_admin_panel() -> anyhow::Result<()> {
    let (app, state, d) = app();
    let cookie = auth_cookie(&token(&state, Role::Staff));

    for uri in ["/payments", "/admin_panel", "/mechanic_payments/1"] {
        let resp = app.clone().oneshot(get(uri, Some(&cookie))).await?;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp).as_deref(), Some("/"), "{uri}");
        let notices = flashed(&resp);
        assert_eq!(notices[0]["severity"], "danger");
    }
    assert_eq!(d.payments.calls(), 0);
    assert_eq!(d.stats.calls(), 0);
    assert_eq!(d.reports.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn staff_cannot_mutate_admin_resources() -> anyhow::Result<()> {
    let (app, state, d) = app();
    let cookie = auth_cookie(&token(&state, Role::Staff));

    let resp = app.clone().oneshot(post_form("/add_payments", Some(&cookie), "record_id=1&mechanic_id=1&amount=10")).await?;
    assert_eq!(location(&resp).as_deref(), Some("/"));
    let resp = app.clone().oneshot(post_form("/vehicles/delete/1", Some(&cookie), "")).await?;
    assert_eq!(location(&resp).as_deref(), Some("/"));

    assert_eq!(d.payments.calls(), 0);
    assert_eq!(d.vehicles.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn anonymous_requests_go_to_login() -> anyhow::Result<()> {
    let (app, _state, d) = app();
    for uri in ["/vehicles", "/dashboard", "/payments", "/admin_panel", "/vehicle_service_details/1"] {
        let resp = app.clone().oneshot(get(uri, None)).await?;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp).as_deref(), Some("/login"), "{uri}");
        assert_eq!(flashed(&resp)[0]["severity"], "warning");
    }
    assert_eq!(d.vehicles.calls() + d.payments.calls() + d.stats.calls() + d.reports.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn forged_token_is_treated_as_anonymous() -> anyhow::Result<()> {
    let (app, _state, d) = app();
    let other = ServerState::new(
        Repositories {
            auth: Arc::new(MockAuthRepository::default()),
            vehicles: Arc::new(MockVehicleRepository::default()),
            payments: Arc::new(MockPaymentRepository::default()),
            reports: Arc::new(MockReportRepository::default()),
            stats: Arc::new(MockStatsRepository::default()),
        },
        &configs::AuthConfig { jwt_secret: "some-other-secret".into(), ..auth_config() },
    );
    let forged = auth_cookie(&token(&other, Role::Admin));
    let resp = app.clone().oneshot(get("/payments", Some(&forged))).await?;
    assert_eq!(location(&resp).as_deref(), Some("/login"));
    assert_eq!(d.payments.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn admin_reaches_payments_and_panel() -> anyhow::Result<()> {
    let (app, state, d) = app();
    let cookie = auth_cookie(&token(&state, Role::Admin));

    let resp = app.clone().oneshot(get("/payments", Some(&cookie))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(body["page"], "payments");
    assert_eq!(body["payments"], serde_json::json!([]));
    assert_eq!(d.payments.calls(), 1);

    let resp = app.clone().oneshot(get("/admin_panel", Some(&cookie))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(d.stats.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn bearer_header_is_accepted() -> anyhow::Result<()> {
    let (app, state, _d) = app();
    let req = axum::http::Request::builder()
        .uri("/dashboard")
        .header("authorization", format!("Bearer {}", token(&state, Role::Staff)))
        .body(axum::body::Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn payment_without_amount_is_rejected_before_storage() -> anyhow::Result<()> {
    let (app, state, d) = app();
    let cookie = auth_cookie(&token(&state, Role::Admin));
    let resp = app.clone().oneshot(post_form("/add_payments", Some(&cookie), "record_id=1&mechanic_id=2&upi=x%40upi")).await?;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/payments"));
    let notices = flashed(&resp);
    assert_eq!(notices[0]["severity"], "warning");
    assert!(notices[0]["message"].as_str().unwrap_or_default().contains("amount"));
    assert_eq!(d.payments.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn report_storage_failure_degrades_to_empty_view() -> anyhow::Result<()> {
    let reports = Arc::new(MockReportRepository::failing("db down"));
    let repos = Repositories {
        auth: Arc::new(MockAuthRepository::default()),
        vehicles: Arc::new(MockVehicleRepository::default()),
        payments: Arc::new(MockPaymentRepository::default()),
        reports: reports.clone(),
        stats: Arc::new(MockStatsRepository::default()),
    };
    let state = ServerState::new(repos, &auth_config());
    let app = routes::build_router(state.clone());
    let cookie = auth_cookie(&token(&state, Role::Admin));

    let resp = app.clone().oneshot(get("/mechanic_payments/4", Some(&cookie))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(body["line_items"], serde_json::json!([]));
    assert_eq!(body["totals"], serde_json::json!([]));
    assert_eq!(body["notices"][0]["severity"], "danger");
    assert_eq!(reports.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn public_routes_need_no_identity() -> anyhow::Result<()> {
    let (app, _state, _d) = app();
    let resp = app.clone().oneshot(get("/health", None)).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?["status"], "ok");

    let resp = app.clone().oneshot(get("/", None)).await?;
    let body = body_json(resp).await?;
    assert_eq!(body["page"], "home");
    assert!(body["links"].as_array().map(|l| l.iter().any(|x| x == "/login")).unwrap_or(false));

    let resp = app.oneshot(get("/api-docs/openapi.json", None)).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}
