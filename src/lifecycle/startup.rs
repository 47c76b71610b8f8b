//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the metrics exporter when enabled
//! - Bind the listener (plain or TLS)
//! - Run the server until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::tls::load_tls_config;
use crate::observability::metrics;
use crate::scoring::{DemoBackend, ScoringBackend};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid {field} address '{value}'")]
    Address { field: &'static str, value: String },
    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
    #[error("TLS setup: {0}")]
    Tls(std::io::Error),
    #[error("server I/O: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_addr(field: &'static str, value: &str) -> Result<SocketAddr, StartupError> {
    value.parse().map_err(|_| StartupError::Address {
        field,
        value: value.to_string(),
    })
}

/// Start the service with the demo backend and run until a termination signal.
pub async fn start(config: ServiceConfig) -> Result<(), StartupError> {
    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());
    start_with(config, Arc::new(DemoBackend), shutdown).await
}

/// Start the service with an explicit backend and shutdown coordinator.
pub async fn start_with(
    config: ServiceConfig,
    backend: Arc<dyn ScoringBackend>,
    shutdown: Shutdown,
) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = parse_addr("metrics", &config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    let addr = parse_addr("bind", &config.listener.bind_address)?;
    let tls = config.listener.tls.clone();
    let server = HttpServer::with_backend(config, backend);

    match tls {
        Some(tls) => {
            let rustls = load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path))
                .await
                .map_err(StartupError::Tls)?;
            server.run_tls(addr, rustls, shutdown.subscribe()).await?;
        }
        None => {
            let listener = TcpListener::bind(addr).await?;
            server.run(listener, shutdown.subscribe()).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr_rejects_garbage() {
        let err = parse_addr("bind", "not-an-addr").unwrap_err();
        assert_eq!(err.to_string(), "invalid bind address 'not-an-addr'");
    }

    #[tokio::test]
    async fn test_missing_tls_files_fail_startup() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.observability.metrics_enabled = false;
        config.listener.tls = Some(crate::config::TlsConfig {
            cert_path: "/nonexistent/cert.pem".into(),
            key_path: "/nonexistent/key.pem".into(),
        });

        let result = start_with(config, Arc::new(DemoBackend), Shutdown::new()).await;
        assert!(matches!(result, Err(StartupError::Tls(_))));
    }

    #[tokio::test]
    async fn test_stops_on_shutdown_trigger() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.observability.metrics_enabled = false;

        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        let task = tokio::spawn(start_with(config, Arc::new(DemoBackend), shutdown));

        while trigger.receiver_count() == 0 {
            tokio::task::yield_now().await;
        }
        trigger.trigger();
        assert!(task.await.unwrap().is_ok());
    }
}
