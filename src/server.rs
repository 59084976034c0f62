//! HTTP server initialization and runtime setup.
//!
//! Handles listener binding, router construction, and Axum server lifecycle
//! including graceful shutdown.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;

/// Runs the HTTP server with the given configuration until SIGINT or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails (e.g. port already in use)
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    serve(listener, &config, shutdown_signal()).await
}

/// Serves the application on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
///
/// # Errors
///
/// Returns an error if the router cannot be built or the server fails.
pub async fn serve<F>(listener: TcpListener, config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::from_config(config);
    let app = app_router(state, config.allowed_origin.as_deref())?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Listening on http://{local_addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
