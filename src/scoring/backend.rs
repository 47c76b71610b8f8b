//! Scoring backend seam.
//!
//! Handlers only talk to a [`ScoringBackend`]. The bundled [`DemoBackend`]
//! runs the placeholder strategies; a real model server replaces it by
//! implementing the same trait over the same input and result records.

use serde::Serialize;

use crate::scoring::types::{
    ExpressionResult, GeneExpressionInput, HealthRiskInput, MissionSimInput, MissionSimResult,
    RiskResult,
};
use crate::scoring::{expression, mission, risk};

/// What a strategy does, independent of which model implements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    HealthRisk,
    GeneExpression,
    MissionSimulation,
}

/// Catalogue entry describing one strategy of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub capability: Capability,
    /// Tag echoed in results (`model` / `method`).
    pub tag: &'static str,
    /// True when the strategy is placeholder logic.
    pub demo: bool,
    pub description: &'static str,
}

/// A provider of the three scoring strategies.
///
/// Implementations must be pure functions of their input: the router relies
/// on identical requests producing identical responses.
pub trait ScoringBackend: Send + Sync + std::fmt::Debug {
    /// Short identifier, reported in `/api/v1/ai/status` and the
    /// `x-scoring-backend` response header.
    fn name(&self) -> &str;

    fn score_risk(&self, input: &HealthRiskInput) -> RiskResult;

    fn rank_expression(&self, input: &GeneExpressionInput) -> ExpressionResult;

    fn simulate_mission(&self, input: MissionSimInput) -> MissionSimResult;

    /// Strategies offered by this backend.
    fn models(&self) -> Vec<ModelInfo>;

    /// True if any strategy is placeholder logic.
    fn is_demo(&self) -> bool {
        self.models().iter().any(|m| m.demo)
    }
}

/// Backend running the built-in placeholder heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoBackend;

impl DemoBackend {
    pub const NAME: &'static str = "demo";
}

impl ScoringBackend for DemoBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn score_risk(&self, input: &HealthRiskInput) -> RiskResult {
        risk::score(input)
    }

    fn rank_expression(&self, input: &GeneExpressionInput) -> ExpressionResult {
        expression::rank(input)
    }

    fn simulate_mission(&self, input: MissionSimInput) -> MissionSimResult {
        mission::simulate(input)
    }

    fn models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "health-risk-demo",
                name: "Biomarker Risk Heuristic",
                capability: Capability::HealthRisk,
                tag: risk::DEMO_RISK_MODEL,
                demo: true,
                description: "Normalized mean of biomarker readings; not a trained model",
            },
            ModelInfo {
                id: "gene-expression-demo",
                name: "Differential Expression Ranker",
                capability: Capability::GeneExpression,
                tag: expression::DEMO_DIFF_METHOD,
                demo: true,
                description: "Top five sample_a - sample_b deltas over sample_b's genes",
            },
            ModelInfo {
                id: "mission-sim-demo",
                name: "Mission Simulation Stub",
                capability: Capability::MissionSimulation,
                tag: "mission_echo_demo",
                demo: true,
                description: "Acknowledges and echoes the mission; no simulation is run",
            },
        ]
    }
}
