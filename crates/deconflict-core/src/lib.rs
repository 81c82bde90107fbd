pub mod check;
pub mod dedup;
pub mod detector;
pub mod error;
pub mod interpolate;
pub mod models;
pub mod rules;
pub mod sampling;
pub mod spatial;
pub mod trajectory;

pub use check::{check_for_conflicts, find_conflicts, CLEAR_MESSAGE};
pub use dedup::{deduplicate_conflicts, DEFAULT_BURST_WINDOW_S};
pub use detector::{detect_conflicts, DetectionWindow};
pub use error::DeconflictError;
pub use interpolate::{interpolate_position, is_active};
pub use models::{
    CheckOutcome, Conflict, Mission, SimulatedDrone, Trajectory, TrajectoryPoint, Waypoint,
    PRIMARY_DRONE_ID,
};
pub use rules::DeconflictionRules;
pub use spatial::{distance, total_path_length};
pub use trajectory::generate_primary_trajectory;
