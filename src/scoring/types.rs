//! Request and result records for the scoring strategies.
//!
//! Inputs are only ever built by the validation layer; results are built by a
//! [`ScoringBackend`](crate::scoring::ScoringBackend) and serialized straight
//! onto the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named numeric readings in request order.
///
/// Keys are unique: duplicate JSON keys collapse to the last value while
/// keeping the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings(Vec<(String, f64)>);

impl Readings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a reading by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|(_, v)| *v)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a reading whose name is known not to be present yet.
    pub(crate) fn push_unique(&mut self, name: impl Into<String>, value: f64) {
        self.0.push((name.into(), value));
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Readings {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(iter.size_hint().0);
        let mut readings = Readings::with_capacity(iter.size_hint().0);
        for (name, value) in iter {
            let name = name.into();
            match positions.get(&name) {
                Some(&at) => readings.0[at].1 = value,
                None => {
                    positions.insert(name.clone(), readings.0.len());
                    readings.0.push((name, value));
                }
            }
        }
        readings
    }
}

/// Validated input for the risk scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRiskInput {
    pub biomarkers: Readings,
    /// Pass-through metadata, never inspected.
    pub metadata: Option<Map<String, Value>>,
}

/// Validated input for the differential-expression ranker.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneExpressionInput {
    pub sample_a: Readings,
    pub sample_b: Readings,
    pub metadata: Option<Map<String, Value>>,
}

/// Validated input for the mission simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionSimInput {
    pub mission: String,
    pub duration_days: u64,
    pub environment: Map<String, Value>,
}

/// Discrete risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const MEDIUM_THRESHOLD: f64 = 0.33;
    pub const HIGH_THRESHOLD: f64 = 0.66;

    /// Categorize a score: `[0, 0.33)` low, `[0.33, 0.66)` medium, `[0.66, ..]` high.
    pub fn from_score(score: f64) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if score < Self::HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Identifies the model that produced the score.
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneDelta {
    pub gene: String,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionResult {
    /// At most five genes, largest absolute delta first.
    pub top_genes: Vec<GeneDelta>,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSimResult {
    pub mission: String,
    pub duration_days: u64,
    pub summary: String,
    pub environment: Map<String, Value>,
}
