//! Mission simulation stub.
//!
//! No physics happens here: the input is acknowledged and echoed back with a
//! fixed summary. A real simulator plugs in behind
//! [`ScoringBackend::simulate_mission`](crate::scoring::ScoringBackend::simulate_mission).

use crate::scoring::types::{MissionSimInput, MissionSimResult};

/// Summary attached to every stub simulation.
pub const DEMO_SUMMARY: &str = "Simulation completed (demo).";

pub fn simulate(input: MissionSimInput) -> MissionSimResult {
    let MissionSimInput {
        mission,
        duration_days,
        environment,
    } = input;

    MissionSimResult {
        mission,
        duration_days,
        summary: DEMO_SUMMARY.to_string(),
        environment,
    }
}
