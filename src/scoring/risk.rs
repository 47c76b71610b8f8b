//! Placeholder health-risk scorer.
//!
//! The score is a normalized mean of the biomarker readings. It is NOT a
//! trained or calibrated model; results carry the [`DEMO_RISK_MODEL`] tag so
//! callers can tell.

use crate::scoring::round_to;
use crate::scoring::types::{HealthRiskInput, RiskLevel, RiskResult};

/// Model tag reported with every placeholder score.
pub const DEMO_RISK_MODEL: &str = "random_forest_demo";

/// Score returned for an empty biomarker panel.
pub const EMPTY_PANEL_SCORE: f64 = 0.05;

/// Upper bound of any score.
pub const MAX_SCORE: f64 = 0.99;

/// Each reading is assumed to live on a 0..10 scale.
const READING_SCALE: f64 = 10.0;

/// Score a biomarker panel.
pub fn score(input: &HealthRiskInput) -> RiskResult {
    let risk_score = round_to(raw_score(input), 3);

    RiskResult {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        model: DEMO_RISK_MODEL.to_string(),
    }
}

fn raw_score(input: &HealthRiskInput) -> f64 {
    let biomarkers = &input.biomarkers;
    if biomarkers.is_empty() {
        return EMPTY_PANEL_SCORE;
    }

    let sum: f64 = biomarkers.values().sum();
    let normalized = sum / (biomarkers.len() as f64 * READING_SCALE);

    // Negative readings must not push the score below zero.
    normalized.clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::Readings;
    use proptest::prelude::*;

    fn panel(readings: &[(&str, f64)]) -> HealthRiskInput {
        HealthRiskInput {
            biomarkers: readings.iter().map(|(n, v)| (*n, *v)).collect(),
            metadata: None,
        }
    }

    #[test]
    fn test_empty_panel_uses_default() {
        let result = score(&panel(&[]));
        assert_eq!(result.risk_score, 0.05);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.model, "random_forest_demo");
    }

    #[test]
    fn test_saturates_at_max() {
        // sum 30 over 2 markers * 10 = 1.5, capped to 0.99
        let result = score(&panel(&[("a", 10.0), ("b", 20.0)]));
        assert_eq!(result.risk_score, 0.99);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_mean_is_normalized_and_rounded() {
        // (1 + 2 + 2) / 30 = 0.16666..
        let result = score(&panel(&[("crp", 1.0), ("cortisol", 2.0), ("ck", 2.0)]));
        assert_eq!(result.risk_score, 0.167);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_level_follows_reported_score_at_boundaries() {
        let medium = score(&panel(&[("a", 3.3)]));
        assert_eq!(medium.risk_score, 0.33);
        assert_eq!(medium.risk_level, RiskLevel::Medium);

        let high = score(&panel(&[("a", 6.6)]));
        assert_eq!(high.risk_score, 0.66);
        assert_eq!(high.risk_level, RiskLevel::High);

        let rounded_up = score(&panel(&[("a", 3.2996)]));
        assert_eq!(rounded_up.risk_score, 0.33);
        assert_eq!(rounded_up.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_negative_readings_floor_at_zero() {
        let result = score(&panel(&[("a", -50.0), ("b", 1.0)]));
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_overflowing_sum_still_bounded() {
        let result = score(&panel(&[("a", f64::MAX), ("b", f64::MAX)]));
        assert_eq!(result.risk_score, 0.99);
    }

    proptest! {
        #[test]
        fn prop_score_in_range(values in prop::collection::vec(-1e6f64..1e6, 0..40)) {
            let readings: Readings = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("m{}", i), *v))
                .collect();
            let result = score(&HealthRiskInput { biomarkers: readings, metadata: None });

            prop_assert!(result.risk_score >= 0.0);
            prop_assert!(result.risk_score <= MAX_SCORE);
            prop_assert_eq!(result.risk_level, RiskLevel::from_score(result.risk_score));
        }

        #[test]
        fn prop_scoring_is_deterministic(values in prop::collection::vec(0f64..20.0, 1..10)) {
            let input = HealthRiskInput {
                biomarkers: values.iter().enumerate().map(|(i, v)| (format!("m{}", i), *v)).collect(),
                metadata: None,
            };
            prop_assert_eq!(score(&input), score(&input));
        }
    }
}
