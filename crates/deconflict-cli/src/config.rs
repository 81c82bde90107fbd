//! Runner configuration from environment.

use deconflict_core::DeconflictionRules;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub airspace_path: PathBuf,
    pub safety_buffer_m: f64,
    pub time_step_s: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            airspace_path: PathBuf::from("demos/scenarios.json"),
            safety_buffer_m: 25.0,
            time_step_s: 1.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            airspace_path: env::var("DECONFLICT_AIRSPACE")
                .map(PathBuf::from)
                .unwrap_or(defaults.airspace_path),
            safety_buffer_m: env::var("DECONFLICT_SAFETY_BUFFER_M")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.safety_buffer_m),
            time_step_s: env::var("DECONFLICT_TIME_STEP_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.time_step_s),
        }
    }

    pub fn rules(&self) -> DeconflictionRules {
        DeconflictionRules::new(self.safety_buffer_m, self.time_step_s)
    }
}
