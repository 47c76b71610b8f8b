//! Scoring subsystem.
//!
//! # Data Flow
//! ```text
//! validated input (validation layer)
//!     → backend.rs (ScoringBackend chosen at startup)
//!     → risk.rs / expression.rs / mission.rs (placeholder strategies)
//!     → result record, serialized by the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Strategies are pure functions; nothing is shared between requests
//! - Placeholder logic is always tagged (`random_forest_demo`, `demo_diff`)

pub mod backend;
pub mod expression;
pub mod mission;
pub mod risk;
pub mod types;

pub use backend::{Capability, DemoBackend, ModelInfo, ScoringBackend};
pub use types::{
    ExpressionResult, GeneDelta, GeneExpressionInput, HealthRiskInput, MissionSimInput,
    MissionSimResult, Readings, RiskLevel, RiskResult,
};

/// Round half away from zero to `places` decimal places.
///
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits anyway.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
