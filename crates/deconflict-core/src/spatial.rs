//! Spatial math for separation checks.
//!
//! Positions live in a local Cartesian frame in meters, so plain Euclidean
//! distance is used throughout.

use crate::models::Waypoint;

/// Straight-line 3D distance between two positions in meters.
pub fn distance(a: &Waypoint, b: &Waypoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Sum of segment lengths along an ordered waypoint list.
pub fn total_path_length(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}

/// Componentwise linear blend: `a + fraction * (b - a)`.
pub(crate) fn lerp(a: &Waypoint, b: &Waypoint, fraction: f64) -> Waypoint {
    Waypoint::new(
        a.x + fraction * (b.x - a.x),
        a.y + fraction * (b.y - a.y),
        a.z + fraction * (b.z - a.z),
    )
}
