//! Loading simulated traffic and missions from JSON files.

use anyhow::{bail, Context, Result};
use deconflict_core::{Mission, SimulatedDrone};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AirspaceFile {
    simulated_drones: Vec<SimulatedDrone>,
}

/// Parse an airspace document: `{"simulated_drones": [{"drone_id", "trajectory"}]}`.
pub fn parse_airspace(json: &str) -> Result<Vec<SimulatedDrone>> {
    let file: AirspaceFile = serde_json::from_str(json).context("Invalid airspace document")?;
    for drone in &file.simulated_drones {
        ensure_time_ordered(drone)?;
    }
    Ok(file.simulated_drones)
}

/// Load simulated drones from an airspace file on disk.
pub fn load_simulated_drones(path: &Path) -> Result<Vec<SimulatedDrone>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read airspace file {}", path.display()))?;
    let drones =
        parse_airspace(&json).with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::info!(path = %path.display(), drones = drones.len(), "Loaded airspace");
    Ok(drones)
}

/// Load a custom mission: `{"waypoints": [[x, y, z], ...], "start_time", "end_time"}`.
pub fn load_mission(path: &Path) -> Result<Mission> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mission file {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid mission in {}", path.display()))
}

fn ensure_time_ordered(drone: &SimulatedDrone) -> Result<()> {
    if let Some(i) = drone
        .trajectory
        .windows(2)
        .position(|w| w[1].time_s < w[0].time_s)
    {
        bail!(
            "Trajectory of {} goes back in time at point {}",
            drone.drone_id,
            i + 1
        );
    }
    Ok(())
}
