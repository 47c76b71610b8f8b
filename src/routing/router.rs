//! Endpoint table and dispatch.
//!
//! # Responsibilities
//! - Name every (method, path) pair the service answers
//! - Bind each pair to its handler
//! - Send everything else to the JSON 404 / 405 fallbacks
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Explicit NoMatch rather than silent default

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};

use crate::http::handlers;
use crate::http::server::AppState;
use crate::scoring::Capability;

/// Every endpoint the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    HealthRisk,
    GeneExpression,
    MissionSimulation,
    Status,
    Models,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Health,
        Endpoint::HealthRisk,
        Endpoint::GeneExpression,
        Endpoint::MissionSimulation,
        Endpoint::Status,
        Endpoint::Models,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/healthz",
            Endpoint::HealthRisk => "/api/v1/ai/predict/health-risk",
            Endpoint::GeneExpression => "/api/v1/ai/analyze/gene-expression",
            Endpoint::MissionSimulation => "/api/v1/ai/simulate/mission",
            Endpoint::Status => "/api/v1/ai/status",
            Endpoint::Models => "/api/v1/ai/models",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::HealthRisk | Endpoint::GeneExpression | Endpoint::MissionSimulation => {
                Method::POST
            }
            Endpoint::Health | Endpoint::Status | Endpoint::Models => Method::GET,
        }
    }

    /// Short label for logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::HealthRisk => "health_risk",
            Endpoint::GeneExpression => "gene_expression",
            Endpoint::MissionSimulation => "mission_simulation",
            Endpoint::Status => "status",
            Endpoint::Models => "models",
        }
    }

    /// The scoring endpoint serving a capability.
    pub fn for_capability(capability: Capability) -> Self {
        match capability {
            Capability::HealthRisk => Endpoint::HealthRisk,
            Capability::GeneExpression => Endpoint::GeneExpression,
            Capability::MissionSimulation => Endpoint::MissionSimulation,
        }
    }

    /// Look up the endpoint registered for a method and path.
    pub fn match_request(method: &Method, path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.path() == path && e.method() == *method)
    }
}

/// Build the route table. Layers are added by the HTTP server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(Endpoint::Health.path(), get(handlers::healthz))
        .route(Endpoint::HealthRisk.path(), post(handlers::predict_health_risk))
        .route(
            Endpoint::GeneExpression.path(),
            post(handlers::analyze_gene_expression),
        )
        .route(
            Endpoint::MissionSimulation.path(),
            post(handlers::simulate_mission),
        )
        .route(Endpoint::Status.path(), get(handlers::service_status))
        .route(Endpoint::Models.path(), get(handlers::list_models))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
