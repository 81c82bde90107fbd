//! Trajectory synthesis for the primary mission.
//!
//! The primary drone is assumed to fly the whole waypoint path at one
//! constant speed so that it arrives at the last waypoint exactly at the
//! mission end time.

use crate::error::{DeconflictError, Result};
use crate::models::{Mission, Trajectory, TrajectoryPoint};
use crate::sampling::sample_times;
use crate::spatial::{distance, total_path_length};

/// Spacing of the samples emitted for a mission that never moves (seconds).
const STATIONARY_STEP_S: f64 = 1.0;

/// Build a time-stamped path for the primary drone.
///
/// Each waypoint except the last is stamped with the elapsed time at the
/// start of the segment it begins; the last waypoint is stamped with
/// `end_time`. A mission with zero path length becomes one sample per
/// second across `[start_time, end_time)` at the first waypoint.
pub fn generate_primary_trajectory(mission: &Mission) -> Result<Trajectory> {
    let duration = mission.duration_s();
    if !duration.is_finite() || duration <= 0.0 {
        return Err(DeconflictError::InvalidMission {
            start_time: mission.start_time,
            end_time: mission.end_time,
        });
    }

    let (Some(first), Some(last)) = (mission.waypoints.first(), mission.waypoints.last()) else {
        return Err(DeconflictError::EmptyMission);
    };

    let total_m = total_path_length(&mission.waypoints);
    if total_m == 0.0 {
        let trajectory: Trajectory =
            sample_times(mission.start_time, mission.end_time, STATIONARY_STEP_S)
                .map(|t| TrajectoryPoint::at(*first, t))
                .collect();
        tracing::debug!(
            points = trajectory.len(),
            "Synthesized stationary primary trajectory"
        );
        return Ok(trajectory);
    }

    let speed_mps = total_m / duration;
    let mut trajectory = Trajectory::with_capacity(mission.waypoints.len());
    let mut current_time = mission.start_time;

    for segment in mission.waypoints.windows(2) {
        trajectory.push(TrajectoryPoint::at(segment[0], current_time));
        current_time += distance(&segment[0], &segment[1]) / speed_mps;
    }
    trajectory.push(TrajectoryPoint::at(*last, mission.end_time));

    tracing::debug!(
        points = trajectory.len(),
        speed_mps,
        total_m,
        "Synthesized primary trajectory"
    );
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;

    #[test]
    fn test_straight_mission_spans_window() {
        let mission = Mission::new(
            vec![Waypoint::new(0.0, 0.0, 100.0), Waypoint::new(100.0, 0.0, 100.0)],
            10.0,
            20.0,
        );
        let trajectory = generate_primary_trajectory(&mission).unwrap();
        assert_eq!(
            trajectory,
            vec![
                TrajectoryPoint::new(0.0, 0.0, 100.0, 10.0),
                TrajectoryPoint::new(100.0, 0.0, 100.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_multi_segment_uses_segment_start_times() {
        // 30m then 10m over 40s: 1 m/s.
        let mission = Mission::new(
            vec![
                Waypoint::new(0.0, 0.0, 0.0),
                Waypoint::new(30.0, 0.0, 0.0),
                Waypoint::new(30.0, 10.0, 0.0),
            ],
            0.0,
            40.0,
        );
        let trajectory = generate_primary_trajectory(&mission).unwrap();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory[0].time_s, 0.0);
        assert_eq!(trajectory[1].time_s, 30.0);
        assert_eq!(trajectory[1].position(), Waypoint::new(30.0, 0.0, 0.0));
        assert_eq!(trajectory[2].time_s, 40.0);
    }

    #[test]
    fn test_final_point_pinned_to_end_time() {
        let mission = Mission::new(
            vec![
                Waypoint::new(0.0, 0.0, 0.0),
                Waypoint::new(0.1, 0.0, 0.0),
                Waypoint::new(0.1, 0.7, 0.0),
                Waypoint::new(0.3, 0.7, 0.0),
            ],
            0.1,
            0.7,
        );
        let trajectory = generate_primary_trajectory(&mission).unwrap();
        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory[0].time_s, 0.1);
        assert_eq!(trajectory[3].time_s, 0.7);
        assert!(trajectory.windows(2).all(|w| w[0].time_s <= w[1].time_s));
    }

    #[test]
    fn test_stationary_mission_samples_every_second() {
        let a = Waypoint::new(5.0, 5.0, 50.0);
        let mission = Mission::new(vec![a, a], 0.0, 10.0);
        let trajectory = generate_primary_trajectory(&mission).unwrap();
        assert_eq!(trajectory.len(), 10);
        for (i, point) in trajectory.iter().enumerate() {
            assert_eq!(point.position(), a);
            assert_eq!(point.time_s, i as f64);
        }
    }

    #[test]
    fn test_single_waypoint_is_stationary() {
        let mission = Mission::new(vec![Waypoint::new(1.0, 2.0, 3.0)], 5.0, 7.5);
        let trajectory = generate_primary_trajectory(&mission).unwrap();
        let times: Vec<f64> = trajectory.iter().map(|p| p.time_s).collect();
        assert_eq!(times, vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let wp = Waypoint::new(0.0, 0.0, 0.0);
        for (start, end) in [(10.0, 10.0), (10.0, 5.0)] {
            let mission = Mission::new(vec![wp, Waypoint::new(1.0, 0.0, 0.0)], start, end);
            assert_eq!(
                generate_primary_trajectory(&mission),
                Err(DeconflictError::InvalidMission {
                    start_time: start,
                    end_time: end
                })
            );
        }
    }

    #[test]
    fn test_empty_mission_rejected() {
        let mission = Mission::new(Vec::new(), 0.0, 10.0);
        assert_eq!(
            generate_primary_trajectory(&mission),
            Err(DeconflictError::EmptyMission)
        );
    }
}
