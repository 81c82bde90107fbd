//! Deconfliction CLI - scenario runner for the mission conflict checker.
//!
//! This crate provides:
//! - airspace: loading simulated traffic and custom missions from JSON
//! - scenarios: the built-in named missions
//! - report: console and JSON rendering of check outcomes
//! - run_scenarios: the binary tying them together

pub mod airspace;
pub mod config;
pub mod report;
pub mod scenarios;

pub use airspace::{load_mission, load_simulated_drones, parse_airspace};
pub use config::Config;
pub use scenarios::{all_scenarios, Scenario};
