mod common;

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use tokio::net::TcpListener;

use server::routes;

use common::*;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let (_db, state) = sqlite_state().await?;
    let app = routes::build_router(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_login_session_and_logout() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // follows the 303 to the admin panel carrying the new cookies
    let res = c
        .post(format!("{}/login", app.base_url))
        .form(&[("username", "admin"), ("password", ADMIN_PASSWORD)])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["page"], "admin_panel");
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["notices"][0]["severity"], "success");

    let res = c.get(format!("{}/payments", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["page"], "payments");
    // flash is consumed once
    assert_eq!(body["notices"], serde_json::json!([]));

    let res = c.get(format!("{}/logout", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["page"], "login");
    assert_eq!(body["notices"][0]["severity"], "info");

    let res = c.get(format!("{}/dashboard", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["page"], "login");
    assert_eq!(body["notices"][0]["severity"], "warning");
    Ok(())
}

#[tokio::test]
async fn e2e_staff_is_bounced_from_admin_pages() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    c.post(format!("{}/login", app.base_url))
        .form(&[("username", "staff"), ("password", STAFF_PASSWORD)])
        .send()
        .await?;

    let res = c.get(format!("{}/admin_panel", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["page"], "home");
    assert_eq!(body["notices"][0]["severity"], "danger");
    Ok(())
}
