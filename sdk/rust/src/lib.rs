//! Async client for the AI inference service.

pub mod client;

pub use client::{
    AiServiceClient, ClientError, ExpressionRequest, ExpressionResponse, GeneDelta, HealthResponse,
    MissionRequest, MissionResponse, RiskRequest, RiskResponse,
};
