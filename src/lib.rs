//! Stateless JSON-over-HTTP inference service.
//!
//! Exposes placeholder scoring strategies (health risk, differential gene
//! expression, mission simulation) behind a validation layer that reports
//! every offending field before any scoring runs.

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod routing;

// Domain
pub mod health;
pub mod scoring;
pub mod validation;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
pub use scoring::{DemoBackend, ScoringBackend};
