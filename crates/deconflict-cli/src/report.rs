//! Rendering of check outcomes for the console and for external plotting.

use chrono::{DateTime, Utc};
use deconflict_core::{
    generate_primary_trajectory, CheckOutcome, DeconflictionRules, Mission, Trajectory,
};
use serde::Serialize;
use std::fmt::Write as _;

/// Machine-readable record of one scenario run.
///
/// Carries the synthesized primary trajectory so a plotter can draw the
/// mission path next to the reported conflict locations.
#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub scenario: &'a str,
    pub generated_at: DateTime<Utc>,
    pub rules: &'a DeconflictionRules,
    pub primary_trajectory: Trajectory,
    pub result: &'a CheckOutcome,
}

impl<'a> ScenarioReport<'a> {
    pub fn new(
        scenario: &'a str,
        mission: &Mission,
        rules: &'a DeconflictionRules,
        result: &'a CheckOutcome,
    ) -> Self {
        Self {
            scenario,
            generated_at: Utc::now(),
            rules,
            // Missions rejected by the check have no path to plot.
            primary_trajectory: generate_primary_trajectory(mission).unwrap_or_default(),
            result,
        }
    }
}

/// Human-readable summary of one scenario run.
pub fn render_console(scenario: &str, outcome: &CheckOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- RUNNING SCENARIO: {} ---", scenario);
    let _ = writeln!(
        out,
        "Deconfliction Status: {}",
        outcome.status().to_uppercase()
    );
    match outcome {
        CheckOutcome::Conflict(conflicts) => {
            let _ = writeln!(out, "Conflict Details:");
            for conflict in conflicts {
                let _ = writeln!(out, "  - {}", conflict);
            }
        }
        CheckOutcome::Clear(details) | CheckOutcome::Error(details) => {
            let _ = writeln!(out, "Details: {}", details);
        }
    }
    out
}
