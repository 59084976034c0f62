mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use driver_checker::api::dto::HealthDescriptor;
use driver_checker::api::routes::api_routes;
use driver_checker::state::AppState;

fn create_app(state: AppState) -> Router {
    Router::new().nest("/api", api_routes()).with_state(state)
}

#[tokio::test]
async fn test_status_endpoint_success() {
    let server = TestServer::new(create_app(common::create_test_state())).unwrap();

    let response = server.get("/api/status").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["service"], "driver-checker-backend");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "All systems operational");
}

#[tokio::test]
async fn test_status_endpoint_structure() {
    let server = TestServer::new(create_app(common::create_test_state())).unwrap();

    let response = server.get("/api/status").await;

    let json = response.json::<serde_json::Value>();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert!(object.get("service").is_some());
    assert!(object.get("status").is_some());
    assert!(object.get("message").is_some());
}

#[tokio::test]
async fn test_status_endpoint_is_idempotent() {
    let server = TestServer::new(create_app(common::create_test_state())).unwrap();

    let first = server.get("/api/status").await.text();
    for _ in 0..5 {
        assert_eq!(server.get("/api/status").await.text(), first);
    }
}

#[tokio::test]
async fn test_status_endpoint_reports_configured_descriptor() {
    let state = AppState::new(HealthDescriptor::new(
        "driver-checker-backend",
        "degraded",
        "Registry lookups are slow",
    ));
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server.get("/api/status").await;

    response.assert_status_ok();
    let descriptor = response.json::<HealthDescriptor>();
    assert_eq!(descriptor.status, "degraded");
    assert!(!descriptor.is_ok());
}

#[tokio::test]
async fn test_status_endpoint_rejects_other_methods() {
    let server = TestServer::new(create_app(common::create_test_state())).unwrap();

    let response = server.post("/api/status").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "method_not_allowed");
}
