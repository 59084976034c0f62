#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use driver_checker::api::dto::HealthDescriptor;
use driver_checker::config::Config;
use driver_checker::routes::app_router;
use driver_checker::server;
use driver_checker::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceExt;

pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";

pub fn descriptor() -> HealthDescriptor {
    HealthDescriptor::new("driver-checker-backend", "ok", "All systems operational")
}

pub fn create_test_state() -> AppState {
    AppState::new(descriptor())
}

pub fn create_test_config(allowed_origin: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 5000,
        allowed_origin: allowed_origin.map(str::to_string),
        ..Config::default()
    }
}

/// Sends one request through the full router, middleware included.
pub async fn send(allowed_origin: Option<&str>, request: Request<Body>) -> Response<Body> {
    let app = app_router(create_test_state(), allowed_origin).unwrap();
    app.oneshot(request).await.unwrap()
}

pub fn get(uri: &str, origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(origin) = origin {
        builder = builder.header("origin", origin);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

/// A status service running on an ephemeral local port.
pub struct RunningServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl RunningServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

pub async fn spawn_server(config: Config) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        server::serve(listener, &config, async {
            let _ = rx.await;
        })
        .await
    });

    RunningServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}

/// Returns a local address with nothing listening on it.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
