//! Request schemas for the three scoring endpoints.

use serde_json::{Map, Value};

use crate::scoring::{GeneExpressionInput, HealthRiskInput, MissionSimInput, Readings};
use crate::validation::error::{Collector, ValidationFailure};
use crate::validation::fields::{self, REQUIRED};

/// A typed input that can be checked out of an untyped JSON payload.
pub trait Schema: Sized {
    /// Name used in logs and metrics.
    const NAME: &'static str;

    /// Validate `payload`, reporting every offending field on failure.
    fn from_payload(payload: &Value) -> Result<Self, ValidationFailure>;
}

/// Validate `payload` against schema `T`.
pub fn validate<T: Schema>(payload: &Value) -> Result<T, ValidationFailure> {
    T::from_payload(payload)
}

fn root<'a>(payload: &'a Value, errors: &mut Collector) -> Option<&'a Map<String, Value>> {
    match payload {
        Value::Object(map) => Some(map),
        _ => {
            errors.push("body", "expected a JSON object");
            None
        }
    }
}

fn sample(root: &Map<String, Value>, key: &str, errors: &mut Collector) -> Readings {
    fields::required_object(root, key, errors)
        .map(|map| fields::readings(map, key, errors))
        .unwrap_or_default()
}

impl Schema for HealthRiskInput {
    const NAME: &'static str = "health_risk";

    fn from_payload(payload: &Value) -> Result<Self, ValidationFailure> {
        let mut errors = Collector::default();
        let Some(root) = root(payload, &mut errors) else {
            return Err(errors.into_failure());
        };

        let biomarkers = sample(root, "biomarkers", &mut errors);
        let metadata = fields::optional_object(root, "metadata", &mut errors).cloned();

        errors.finish(|| HealthRiskInput {
            biomarkers,
            metadata,
        })
    }
}

impl Schema for GeneExpressionInput {
    const NAME: &'static str = "gene_expression";

    fn from_payload(payload: &Value) -> Result<Self, ValidationFailure> {
        let mut errors = Collector::default();
        let Some(root) = root(payload, &mut errors) else {
            return Err(errors.into_failure());
        };

        let sample_a = sample(root, "sample_a", &mut errors);
        let sample_b = sample(root, "sample_b", &mut errors);
        let metadata = fields::optional_object(root, "metadata", &mut errors).cloned();

        errors.finish(|| GeneExpressionInput {
            sample_a,
            sample_b,
            metadata,
        })
    }
}

impl Schema for MissionSimInput {
    const NAME: &'static str = "mission_simulation";

    fn from_payload(payload: &Value) -> Result<Self, ValidationFailure> {
        let mut errors = Collector::default();
        let Some(root) = root(payload, &mut errors) else {
            return Err(errors.into_failure());
        };

        let mission = match root.get("mission") {
            None | Some(Value::Null) => {
                errors.push("mission", REQUIRED);
                None
            }
            Some(value) => fields::non_blank_string(value)
                .map_err(|message| errors.push("mission", message))
                .ok(),
        };

        let duration_days = match root.get("duration_days") {
            None | Some(Value::Null) => {
                errors.push("duration_days", REQUIRED);
                None
            }
            Some(value) => fields::non_negative_integer(value)
                .map_err(|message| errors.push("duration_days", message))
                .ok(),
        };

        let environment = fields::required_object(root, "environment", &mut errors).cloned();

        // Every `None` above has pushed an error.
        match (mission, duration_days, environment) {
            (Some(mission), Some(duration_days), Some(environment)) => Ok(MissionSimInput {
                mission,
                duration_days,
                environment,
            }),
            _ => Err(errors.into_failure()),
        }
    }
}
