//! End-to-end conflict check for one primary mission.

use crate::dedup::deduplicate_conflicts;
use crate::detector::{detect_conflicts, DetectionWindow};
use crate::error::Result;
use crate::models::{CheckOutcome, Conflict, Mission, SimulatedDrone};
use crate::rules::DeconflictionRules;
use crate::trajectory::generate_primary_trajectory;

pub const CLEAR_MESSAGE: &str = "No conflicts detected.";

/// Check `mission` against the known traffic and summarize the result.
///
/// Invalid input never panics; it becomes [`CheckOutcome::Error`].
pub fn check_for_conflicts(
    mission: &Mission,
    drones: &[SimulatedDrone],
    rules: &DeconflictionRules,
) -> CheckOutcome {
    match find_conflicts(mission, drones, rules) {
        Ok(conflicts) if conflicts.is_empty() => {
            tracing::info!(drones = drones.len(), "Mission is clear");
            CheckOutcome::Clear(CLEAR_MESSAGE.to_string())
        }
        Ok(conflicts) => {
            tracing::info!(
                drones = drones.len(),
                conflicts = conflicts.len(),
                "Mission has conflicts"
            );
            CheckOutcome::Conflict(conflicts)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Conflict check rejected");
            CheckOutcome::Error(e.to_string())
        }
    }
}

/// Deduplicated conflicts for `mission`, or the reason the check cannot run.
pub fn find_conflicts(
    mission: &Mission,
    drones: &[SimulatedDrone],
    rules: &DeconflictionRules,
) -> Result<Vec<Conflict>> {
    rules.validate()?;
    let primary = generate_primary_trajectory(mission)?;

    let window = DetectionWindow {
        start_time: mission.start_time,
        end_time: mission.end_time,
        time_step_s: rules.time_step_s,
        safety_buffer_m: rules.safety_buffer_m,
    };
    let raw = detect_conflicts(&primary, drones, &window);
    let raw_count = raw.len();
    let conflicts = deduplicate_conflicts(raw, rules.burst_window_s);

    tracing::debug!(raw = raw_count, kept = conflicts.len(), "Deduplicated conflicts");
    Ok(conflicts)
}
