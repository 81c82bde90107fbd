//! Separation rules and sampling parameters for conflict checks.

use crate::dedup::DEFAULT_BURST_WINDOW_S;
use crate::error::{DeconflictError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a conflict check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeconflictionRules {
    /// Minimum 3D separation in meters
    pub safety_buffer_m: f64,
    /// Interval between samples of the mission window (seconds)
    pub time_step_s: f64,
    /// Raw conflicts of one pair closer than this to the last kept one are merged (seconds)
    #[serde(default = "default_burst_window")]
    pub burst_window_s: f64,
}

fn default_burst_window() -> f64 {
    DEFAULT_BURST_WINDOW_S
}

impl Default for DeconflictionRules {
    fn default() -> Self {
        Self {
            safety_buffer_m: 25.0,
            time_step_s: 1.0,
            burst_window_s: default_burst_window(),
        }
    }
}

impl DeconflictionRules {
    pub fn new(safety_buffer_m: f64, time_step_s: f64) -> Self {
        Self {
            safety_buffer_m,
            time_step_s,
            ..Self::default()
        }
    }

    /// Reject values that would make sampling meaningless or unbounded.
    pub fn validate(&self) -> Result<()> {
        if !self.safety_buffer_m.is_finite() || self.safety_buffer_m <= 0.0 {
            return Err(DeconflictError::InvalidRules(format!(
                "safety buffer must be positive, got {}",
                self.safety_buffer_m
            )));
        }
        if !self.time_step_s.is_finite() || self.time_step_s <= 0.0 {
            return Err(DeconflictError::InvalidRules(format!(
                "time step must be positive, got {}",
                self.time_step_s
            )));
        }
        if !self.burst_window_s.is_finite() || self.burst_window_s < 0.0 {
            return Err(DeconflictError::InvalidRules(format!(
                "burst window cannot be negative, got {}",
                self.burst_window_s
            )));
        }
        Ok(())
    }
}
