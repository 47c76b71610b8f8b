//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use ai_service::{HttpServer, ScoringBackend, ServiceConfig, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger shutdown and wait for the server to drain.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.task.await.unwrap().unwrap();
    }
}

/// Start the service with the demo backend.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default(), None).await
}

/// Start the service with a custom config and optional backend.
#[allow(dead_code)]
pub async fn start_server_with(
    config: ServiceConfig,
    backend: Option<Arc<dyn ScoringBackend>>,
) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = match backend {
        Some(backend) => HttpServer::with_backend(config, backend),
        None => HttpServer::new(config),
    };

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let task = tokio::spawn(server.run(listener, rx));

    TestServer {
        addr,
        shutdown,
        task,
    }
}
