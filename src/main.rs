//! AI inference service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, limits, CORS, tracing, metrics)
//!                          │
//!                          ▼
//!                     routing::router ──▶ 404 / 405 (JSON)
//!                          │
//!                          ▼
//!                     http::request::Payload ──▶ 400 (malformed JSON)
//!                          │
//!                          ▼
//!                     validation::schema ──▶ 422 (every bad field)
//!                          │
//!                          ▼
//!                     scoring::ScoringBackend
//!                          │
//!     Client Response      ▼
//!     ◀────────────── http::response (JSON)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ai_service::config::validation::validate_config;
use ai_service::config::{load_config, ConfigError, ServiceConfig};
use ai_service::lifecycle;
use ai_service::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "ai-service")]
#[command(about = "Stateless AI inference service (demo scoring)", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ai-service: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ai-service starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    match lifecycle::start(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Service failed");
            ExitCode::FAILURE
        }
    }
}
