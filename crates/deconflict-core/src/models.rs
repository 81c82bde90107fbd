//! Core data models for mission deconfliction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier used for the mission under evaluation in every conflict pair.
pub const PRIMARY_DRONE_ID: &str = "Primary-Mission";

/// Position in a local Cartesian frame, meters.
///
/// Serialized as a `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Waypoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Waypoint> for [f64; 3] {
    fn from(wp: Waypoint) -> Self {
        [wp.x, wp.y, wp.z]
    }
}

impl From<(f64, f64, f64)> for Waypoint {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

/// Time-stamped position. Serialized as `[x, y, z, t]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Seconds
    pub time_s: f64,
}

impl TrajectoryPoint {
    pub const fn new(x: f64, y: f64, z: f64, time_s: f64) -> Self {
        Self { x, y, z, time_s }
    }

    /// Stamp a waypoint with a time.
    pub const fn at(position: Waypoint, time_s: f64) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            time_s,
        }
    }

    pub const fn position(&self) -> Waypoint {
        Waypoint::new(self.x, self.y, self.z)
    }
}

impl From<[f64; 4]> for TrajectoryPoint {
    fn from([x, y, z, time_s]: [f64; 4]) -> Self {
        Self { x, y, z, time_s }
    }
}

impl From<TrajectoryPoint> for [f64; 4] {
    fn from(p: TrajectoryPoint) -> Self {
        [p.x, p.y, p.z, p.time_s]
    }
}

/// Ordered trajectory samples; time must be non-decreasing.
pub type Trajectory = Vec<TrajectoryPoint>;

/// The planned mission of the primary drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub waypoints: Vec<Waypoint>,
    pub start_time: f64,
    pub end_time: f64,
}

impl Mission {
    pub fn new(waypoints: Vec<Waypoint>, start_time: f64, end_time: f64) -> Self {
        Self {
            waypoints,
            start_time,
            end_time,
        }
    }

    pub fn duration_s(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Another drone in the airspace with a fully known trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedDrone {
    pub drone_id: String,
    /// Points sorted by time. May be empty or cover only part of a mission window.
    #[serde(default)]
    pub trajectory: Trajectory,
}

impl SimulatedDrone {
    pub fn new(drone_id: impl Into<String>, trajectory: Trajectory) -> Self {
        Self {
            drone_id: drone_id.into(),
            trajectory,
        }
    }

    /// Time interval covered by the trajectory, if any.
    pub fn active_window(&self) -> Option<(f64, f64)> {
        let first = self.trajectory.first()?;
        let last = self.trajectory.last()?;
        Some((first.time_s, last.time_s))
    }
}

/// Separation violation between the primary and another drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Sample time (seconds)
    pub time: f64,
    /// Primary drone position at `time`
    pub location: Waypoint,
    /// (primary id, other drone id)
    pub drone_ids: (String, String),
}

impl Conflict {
    pub fn with_primary(time: f64, location: Waypoint, other_id: impl Into<String>) -> Self {
        Self {
            time,
            location,
            drone_ids: (PRIMARY_DRONE_ID.to_string(), other_id.into()),
        }
    }

    /// Pair equality ignoring order.
    pub fn same_pair(&self, other: &Conflict) -> bool {
        let (a, b) = (&self.drone_ids.0, &self.drone_ids.1);
        let (c, d) = (&other.drone_ids.0, &other.drone_ids.1);
        (a == c && b == d) || (a == d && b == c)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conflict at T={:.2}s near location ({:.2}, {:.2}, {:.2}) between drones {} and {}",
            self.time,
            self.location.x,
            self.location.y,
            self.location.z,
            self.drone_ids.0,
            self.drone_ids.1
        )
    }
}

/// Result of checking one mission against the airspace.
///
/// Serializes as `{"status": "clear" | "conflict" | "error", "details": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "details", rename_all = "lowercase")]
pub enum CheckOutcome {
    Clear(String),
    Conflict(Vec<Conflict>),
    Error(String),
}

impl CheckOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            CheckOutcome::Clear(_) => "clear",
            CheckOutcome::Conflict(_) => "conflict",
            CheckOutcome::Error(_) => "error",
        }
    }

    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            CheckOutcome::Conflict(conflicts) => conflicts,
            _ => &[],
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, CheckOutcome::Clear(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_point_deserializes_from_array() {
        let point: TrajectoryPoint = serde_json::from_str("[1.0, 2.0, 3.0, 4.5]").unwrap();
        assert_eq!(point, TrajectoryPoint::new(1.0, 2.0, 3.0, 4.5));
        assert_eq!(point.position(), Waypoint::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_conflict_display_rounds_to_two_places() {
        let conflict = Conflict::with_primary(50.0, Waypoint::new(500.0, 499.996, 110.0), "Alpha-1");
        assert_eq!(
            conflict.to_string(),
            "Conflict at T=50.00s near location (500.00, 500.00, 110.00) between drones Primary-Mission and Alpha-1"
        );
    }

    #[test]
    fn test_outcome_serializes_with_status_and_details() {
        let clear = CheckOutcome::Clear("No conflicts detected.".to_string());
        let json = serde_json::to_value(&clear).unwrap();
        assert_eq!(json["status"], "clear");
        assert_eq!(json["details"], "No conflicts detected.");

        let conflict = CheckOutcome::Conflict(vec![Conflict::with_primary(
            1.0,
            Waypoint::new(0.0, 0.0, 0.0),
            "B",
        )]);
        let json = serde_json::to_value(&conflict).unwrap();
        assert_eq!(json["status"], "conflict");
        assert_eq!(json["details"][0]["drone_ids"][1], "B");
        assert_eq!(json["details"][0]["location"][2], 0.0);
    }

    #[test]
    fn test_same_pair_ignores_order() {
        let a = Conflict::with_primary(1.0, Waypoint::default(), "A");
        let mut b = a.clone();
        b.drone_ids = ("A".to_string(), PRIMARY_DRONE_ID.to_string());
        assert!(a.same_pair(&b));
        let c = Conflict::with_primary(1.0, Waypoint::default(), "C");
        assert!(!a.same_pair(&c));
    }

    #[test]
    fn test_active_window_of_empty_trajectory() {
        let drone = SimulatedDrone::new("ghost", Vec::new());
        assert_eq!(drone.active_window(), None);
    }
}
