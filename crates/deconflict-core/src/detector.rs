//! Sampled conflict detection between the primary path and known traffic.
//!
//! The mission window is sampled at a fixed step. At every sample the
//! primary position is compared with every simulated drone that is active
//! at that time; any separation below the safety buffer is a raw conflict.

use crate::interpolate::interpolate_position;
use crate::models::{Conflict, SimulatedDrone, TrajectoryPoint};
use crate::sampling::sample_times;
use crate::spatial::distance;
use rayon::prelude::*;

/// Sampling window and separation threshold for one detection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionWindow {
    pub start_time: f64,
    /// Exclusive
    pub end_time: f64,
    pub time_step_s: f64,
    pub safety_buffer_m: f64,
}

/// Find every sample where the primary comes closer than the safety buffer
/// to another drone.
///
/// Samples are evaluated in parallel. The result is ordered by sample time,
/// and conflicts sharing a sample keep the order of `drones`.
pub fn detect_conflicts(
    primary: &[TrajectoryPoint],
    drones: &[SimulatedDrone],
    window: &DetectionWindow,
) -> Vec<Conflict> {
    let samples: Vec<f64> =
        sample_times(window.start_time, window.end_time, window.time_step_s).collect();

    let conflicts: Vec<Conflict> = samples
        .par_iter()
        .flat_map_iter(|&t| conflicts_at(primary, drones, t, window.safety_buffer_m))
        .collect();

    tracing::debug!(
        samples = samples.len(),
        drones = drones.len(),
        raw_conflicts = conflicts.len(),
        "Sampled mission window"
    );
    conflicts
}

/// Conflicts at a single sample time, in drone order.
fn conflicts_at(
    primary: &[TrajectoryPoint],
    drones: &[SimulatedDrone],
    t: f64,
    safety_buffer_m: f64,
) -> Vec<Conflict> {
    let Some(primary_pos) = interpolate_position(primary, t) else {
        return Vec::new();
    };

    drones
        .iter()
        .filter_map(|drone| {
            // Inactive drones cannot conflict.
            let other_pos = interpolate_position(&drone.trajectory, t)?;
            (distance(&primary_pos, &other_pos) < safety_buffer_m)
                .then(|| Conflict::with_primary(t, primary_pos, drone.drone_id.clone()))
        })
        .collect()
}
