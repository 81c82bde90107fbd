//! Error types for mission deconfliction.

use thiserror::Error;

/// Errors that make a conflict check impossible to run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeconflictError {
    /// Mission window has no positive duration.
    #[error("Mission end time must be after start time.")]
    InvalidMission { start_time: f64, end_time: f64 },

    /// Mission carries no waypoints to synthesize a path from.
    #[error("Mission must contain at least one waypoint.")]
    EmptyMission,

    /// Detection parameters out of range.
    #[error("Invalid deconfliction rules: {0}")]
    InvalidRules(String),
}

pub type Result<T> = std::result::Result<T, DeconflictError>;
