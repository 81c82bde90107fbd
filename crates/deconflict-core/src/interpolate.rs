//! Position lookup along a time-stamped trajectory.

use crate::models::{TrajectoryPoint, Waypoint};
use crate::spatial::lerp;

/// Position on `trajectory` at time `t`.
///
/// Returns `None` when the trajectory does not cover `t` (the drone is not
/// active), including when it is empty. A query that lands exactly on a
/// stored timestamp returns that stored position untouched; otherwise the
/// position is linearly interpolated between the bracketing points.
///
/// Relies on timestamps being non-decreasing and brackets with binary search.
pub fn interpolate_position(trajectory: &[TrajectoryPoint], t: f64) -> Option<Waypoint> {
    // First point with time >= t.
    let upper = trajectory.partition_point(|p| p.time_s < t);
    let p2 = trajectory.get(upper)?;
    if p2.time_s == t {
        return Some(p2.position());
    }

    // No exact hit, so the last point with time <= t sits just before `upper`.
    let p1 = trajectory.get(upper.checked_sub(1)?)?;

    let span = p2.time_s - p1.time_s;
    if span <= 0.0 {
        return Some(p1.position());
    }

    let fraction = (t - p1.time_s) / span;
    Some(lerp(&p1.position(), &p2.position(), fraction))
}

/// Whether `trajectory` covers time `t`.
pub fn is_active(trajectory: &[TrajectoryPoint], t: f64) -> bool {
    match (trajectory.first(), trajectory.last()) {
        (Some(first), Some(last)) => first.time_s <= t && t <= last.time_s,
        _ => false,
    }
}
