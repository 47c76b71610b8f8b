//! Endpoint handlers.
//!
//! Scoring handlers short-circuit on validation failure: the backend is only
//! called with a validated input record.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Response,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::request::{request_id, Payload};
use crate::http::response::json_response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Endpoint;
use crate::scoring::{Capability, GeneExpressionInput, HealthRiskInput, MissionSimInput, ModelInfo};
use crate::validation::{validate, Schema};

/// Validate a payload, logging and counting failures.
fn validated<T: Schema>(endpoint: Endpoint, headers: &HeaderMap, payload: &Value) -> Result<T, ApiError> {
    validate::<T>(payload).map_err(|failure| {
        tracing::warn!(
            request_id = %request_id(headers),
            endpoint = endpoint.label(),
            schema = T::NAME,
            invalid_fields = failure.errors().len(),
            "Validation failed"
        );
        metrics::record_validation_failure(endpoint.label());
        ApiError::from(failure)
    })
}

pub async fn healthz(State(state): State<AppState>) -> Result<Response, ApiError> {
    json_response(StatusCode::OK, &state.health.report())
}

pub async fn predict_health_risk(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload,
) -> Result<Response, ApiError> {
    let input: HealthRiskInput = validated(Endpoint::HealthRisk, &headers, &payload)?;
    let result = state.backend.score_risk(&input);

    tracing::debug!(
        request_id = %request_id(&headers),
        biomarkers = input.biomarkers.len(),
        risk_score = result.risk_score,
        "Scored health risk"
    );
    json_response(StatusCode::OK, &result)
}

pub async fn analyze_gene_expression(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload,
) -> Result<Response, ApiError> {
    let input: GeneExpressionInput = validated(Endpoint::GeneExpression, &headers, &payload)?;
    let result = state.backend.rank_expression(&input);

    tracing::debug!(
        request_id = %request_id(&headers),
        genes = input.sample_b.len(),
        returned = result.top_genes.len(),
        "Ranked gene expression"
    );
    json_response(StatusCode::OK, &result)
}

pub async fn simulate_mission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload,
) -> Result<Response, ApiError> {
    let input: MissionSimInput = validated(Endpoint::MissionSimulation, &headers, &payload)?;

    tracing::debug!(
        request_id = %request_id(&headers),
        mission = %input.mission,
        duration_days = input.duration_days,
        "Simulating mission"
    );
    let result = state.backend.simulate_mission(input);
    json_response(StatusCode::OK, &result)
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus<'a> {
    pub service: &'a str,
    pub version: &'static str,
    pub status: &'static str,
    pub backend: &'a str,
    pub demo: bool,
    pub capabilities: Vec<Capability>,
}

pub async fn service_status(State(state): State<AppState>) -> Result<Response, ApiError> {
    let models = state.backend.models();
    let status = ServiceStatus {
        service: state.health.service(),
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        backend: state.backend.name(),
        demo: state.backend.is_demo(),
        capabilities: models.iter().map(|m| m.capability).collect(),
    };
    json_response(StatusCode::OK, &status)
}

#[derive(Debug, Serialize)]
pub struct ModelEntry {
    #[serde(flatten)]
    pub info: ModelInfo,
    pub endpoint: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelCatalogue {
    pub models: Vec<ModelEntry>,
    pub total: usize,
}

pub async fn list_models(State(state): State<AppState>) -> Result<Response, ApiError> {
    let models: Vec<ModelEntry> = state
        .backend
        .models()
        .into_iter()
        .map(|info| ModelEntry {
            endpoint: Endpoint::for_capability(info.capability).path(),
            info,
        })
        .collect();

    json_response(
        StatusCode::OK,
        &ModelCatalogue {
            total: models.len(),
            models,
        },
    )
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
