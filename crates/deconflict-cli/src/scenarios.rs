//! Pre-defined primary missions for the demo airspace.

use deconflict_core::{Mission, Waypoint};

/// A named mission to check against the loaded airspace.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub mission: Mission,
}

impl Scenario {
    pub fn new(name: impl Into<String>, mission: Mission) -> Self {
        Self {
            name: name.into(),
            mission,
        }
    }
}

/// Diagonal crossing at 150m, above all demo traffic.
pub fn create_clear_scenario() -> Scenario {
    Scenario::new(
        "Conflict-Free Mission",
        Mission::new(
            vec![
                Waypoint::new(0.0, 0.0, 150.0),
                Waypoint::new(1000.0, 1000.0, 150.0),
            ],
            0.0,
            120.0,
        ),
    )
}

/// South to north at Alpha-1's altitude, crossing its track around t=50.
pub fn create_alpha_conflict_scenario() -> Scenario {
    Scenario::new(
        "Conflict with Alpha-1",
        Mission::new(
            vec![
                Waypoint::new(500.0, 0.0, 110.0),
                Waypoint::new(500.0, 1000.0, 110.0),
            ],
            0.0,
            100.0,
        ),
    )
}

/// Diagonal at Bravo-2's altitude, meeting it head-on around t=70.
pub fn create_bravo_conflict_scenario() -> Scenario {
    Scenario::new(
        "Conflict with Bravo-2",
        Mission::new(
            vec![
                Waypoint::new(100.0, 100.0, 115.0),
                Waypoint::new(900.0, 900.0, 115.0),
            ],
            30.0,
            110.0,
        ),
    )
}

pub fn all_scenarios() -> Vec<Scenario> {
    vec![
        create_clear_scenario(),
        create_alpha_conflict_scenario(),
        create_bravo_conflict_scenario(),
    ]
}
