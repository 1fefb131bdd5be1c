mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use hexlink::api::handlers::healthz_handler;

fn health_app(state: hexlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/healthz", get(healthz_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_healthz_success() {
    let (state, _store) = common::create_test_state();
    let server = health_app(state);

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_healthz_structure() {
    let (state, _store) = common::create_test_state();
    let server = health_app(state);

    let response = server.get("/healthz").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["ts"].as_i64().is_some());
}

#[tokio::test]
async fn test_healthz_degraded_when_store_down() {
    let state = common::create_failing_state();
    let server = health_app(state);

    let response = server.get("/healthz").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}
