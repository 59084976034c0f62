mod common;

use driver_checker::client::config::parse_origin;
use driver_checker::client::error::{FetchError, TRANSPORT_FALLBACK_MESSAGE};
use driver_checker::client::{
    ClientConfig, HttpStatusSource, RefreshOutcome, StatusClient, StatusSource, ViewState,
};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_config(base_url: Option<String>) -> ClientConfig {
    ClientConfig {
        base_url,
        origin: parse_origin(common::FRONTEND_ORIGIN).unwrap(),
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
    }
}

fn sample_status() -> serde_json::Value {
    serde_json::json!({
        "service": "driver-checker-backend",
        "status": "ok",
        "message": "All systems operational"
    })
}

async fn mount_status(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

fn source_for(mock_server: &MockServer) -> HttpStatusSource {
    HttpStatusSource::from_config(&client_config(Some(mock_server.uri()))).unwrap()
}

#[tokio::test]
async fn test_fetch_decodes_descriptor() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_status()),
    )
    .await;

    let descriptor = source_for(&mock_server).fetch().await.unwrap();

    assert_eq!(descriptor, common::descriptor());
}

#[tokio::test]
async fn test_fetch_sends_page_origin() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .and(header("origin", common::FRONTEND_ORIGIN))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_status()))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(source_for(&mock_server).fetch().await.is_ok());
}

#[tokio::test]
async fn test_base_url_trailing_slash_resolves_once() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_status()))
        .expect(2)
        .mount(&mock_server)
        .await;

    for base in [mock_server.uri(), format!("{}/", mock_server.uri())] {
        let source = HttpStatusSource::from_config(&client_config(Some(base))).unwrap();
        assert_eq!(
            source.url().as_str(),
            format!("{}/api/status", mock_server.uri())
        );
        assert!(source.fetch().await.is_ok());
    }
}

#[tokio::test]
async fn test_fetch_http_error_names_status() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let err = source_for(&mock_server).fetch().await.unwrap_err();

    assert_eq!(err, FetchError::Status(500));
}

#[tokio::test]
async fn test_fetch_invalid_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })),
    )
    .await;

    let err = source_for(&mock_server).fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_unreachable_is_transport_error() {
    let addr = common::unused_addr().await;
    let source =
        HttpStatusSource::from_config(&client_config(Some(format!("http://{addr}")))).unwrap();

    let err = source.fetch().await.unwrap_err();

    let FetchError::Transport(Some(description)) = &err else {
        panic!("expected transport error with a cause, got {err:?}");
    };
    assert!(!description.is_empty());

    let message = err.to_string();
    assert_eq!(&message, description);
    assert_ne!(message, TRANSPORT_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_client_error_then_recovery() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_status()),
    )
    .await;

    let mut client = StatusClient::new(source_for(&mock_server));

    assert_eq!(client.refresh().await, RefreshOutcome::Failed);
    assert_eq!(
        client.state(),
        &ViewState::Error("Request failed with status 503".to_string())
    );

    assert_eq!(client.refresh().await, RefreshOutcome::Loaded);
    assert_eq!(client.state(), &ViewState::Loaded(common::descriptor()));
}

#[tokio::test]
async fn test_teardown_cancels_in_flight_request() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        ResponseTemplate::new(500).set_delay(Duration::from_secs(5)),
    )
    .await;

    let mut client = StatusClient::new(source_for(&mock_server));
    let teardown = client.teardown_handle();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        teardown.cancel();
    });

    let started = std::time::Instant::now();
    let outcome = client.refresh().await;

    assert_eq!(outcome, RefreshOutcome::Cancelled);
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(client.state().error().is_none());
    assert_eq!(client.state(), &ViewState::Loading);
}
