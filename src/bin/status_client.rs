//! Terminal status client for the Driver Checker backend.
//!
//! Fetches `GET /api/status` on start, renders the result, and offers to
//! refresh until declined.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a service on another host
//! cargo run --bin status-client -- --base-url http://localhost:5000
//!
//! # Render once and exit (exit code 1 on error)
//! cargo run --bin status-client -- --once
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL`: base URL of the service (overridden by `--base-url`)
//! - `FRONTEND_ORIGIN`: page origin requests are issued from (overridden by `--origin`)
//!
//! Ctrl-C while a request is in flight, or at the refresh prompt, tears the
//! client down quietly.

use driver_checker::client::config::parse_origin;
use driver_checker::client::render::render;
use driver_checker::client::{ClientConfig, HttpStatusSource, RefreshOutcome, StatusClient};
use driver_checker::telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Confirm;
use std::io::ErrorKind;
use std::process::ExitCode;

/// Shows the health of the Driver Checker backend.
#[derive(Parser)]
#[command(name = "status-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the status service (e.g. "http://localhost:5000")
    #[arg(short, long)]
    base_url: Option<String>,

    /// Page origin sent with each request
    #[arg(short, long)]
    origin: Option<String>,

    /// Render once and exit instead of prompting for refreshes
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }
    if let Some(origin) = cli.origin {
        config.origin = parse_origin(&origin).context("Invalid --origin")?;
    }
    config.validate()?;

    telemetry::init(&config.log_level, &config.log_format)?;

    let source = HttpStatusSource::from_config(&config).context("Failed to set up status client")?;
    tracing::debug!(url = %source.url(), "Status client ready");

    let mut client = StatusClient::new(source);

    let teardown = client.teardown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            teardown.cancel();
        }
    });

    loop {
        let outcome = client
            .refresh_with(|state| println!("{}", render(state)))
            .await;

        if outcome == RefreshOutcome::Cancelled || cli.once {
            break;
        }

        let answer = Confirm::new()
            .with_prompt("Refresh status?")
            .default(true)
            .interact_opt();

        if !wants_refresh(answer, client.is_torn_down())? {
            break;
        }
    }

    client.teardown();

    if client.state().error().is_some() {
        if !cli.once {
            println!("{}", "Last refresh failed".yellow());
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads the refresh prompt's answer. An interrupted prompt or a torn-down
/// client ends the loop like a "no".
fn wants_refresh(answer: Result<Option<bool>, dialoguer::Error>, torn_down: bool) -> Result<bool> {
    if torn_down {
        return Ok(false);
    }

    match answer {
        Ok(again) => Ok(again == Some(true)),
        Err(err) if is_interrupted(&err) => Ok(false),
        Err(err) => Err(err).context("Failed to read refresh prompt"),
    }
}

fn is_interrupted(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(e) if e.kind() == ErrorKind::Interrupted)
}
