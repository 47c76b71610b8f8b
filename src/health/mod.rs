//! Liveness reporting.
//!
//! `/healthz` never fails and never reads a request body; the only process
//! state it touches is the wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Body of a `/healthz` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    /// Seconds since the Unix epoch.
    pub time: f64,
}

/// Produces liveness reports for one named service.
#[derive(Debug, Clone)]
pub struct HealthReporter {
    service: String,
}

impl HealthReporter {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Report liveness as of now.
    pub fn report(&self) -> HealthStatus {
        self.report_at(SystemTime::now())
    }

    /// Report liveness as of `now`. Clocks before the epoch read as 0.
    pub fn report_at(&self, now: SystemTime) -> HealthStatus {
        let time = now
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();

        HealthStatus {
            status: "ok".to_string(),
            service: self.service.clone(),
            time,
        }
    }
}
