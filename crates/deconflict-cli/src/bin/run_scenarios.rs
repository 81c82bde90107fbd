//! Run named missions against a simulated airspace and report conflicts.
//!
//! Usage:
//!   cargo run -p deconflict-cli --bin run_scenarios -- --scenario all
//!   cargo run -p deconflict-cli --bin run_scenarios -- --mission my_mission.json --json

use anyhow::Result;
use clap::{Parser, ValueEnum};
use deconflict_cli::report::{render_console, ScenarioReport};
use deconflict_cli::scenarios::{
    all_scenarios, create_alpha_conflict_scenario, create_bravo_conflict_scenario,
    create_clear_scenario,
};
use deconflict_cli::{load_mission, load_simulated_drones, Config, Scenario};
use deconflict_core::check_for_conflicts;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Built-in missions
#[derive(Debug, Clone, ValueEnum)]
enum ScenarioType {
    /// Mission above all traffic
    Clear,
    /// Mission crossing Alpha-1
    Alpha,
    /// Mission meeting Bravo-2 head-on
    Bravo,
    /// Every built-in mission
    All,
}

/// Strategic deconfliction scenario runner
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Airspace file with simulated drone trajectories [env: DECONFLICT_AIRSPACE]
    #[arg(long)]
    airspace: Option<PathBuf>,

    /// Built-in scenario to run (ignored when --mission is given)
    #[arg(long, value_enum, default_value = "all")]
    scenario: ScenarioType,

    /// Custom mission file to check instead of the built-in scenarios
    #[arg(long)]
    mission: Option<PathBuf>,

    /// Minimum separation in meters [env: DECONFLICT_SAFETY_BUFFER_M]
    #[arg(long)]
    safety_buffer: Option<f64>,

    /// Sampling interval in seconds [env: DECONFLICT_TIME_STEP_S]
    #[arg(long)]
    time_step: Option<f64>,

    /// Emit one JSON report per scenario instead of console text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deconflict=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(path) = args.airspace {
        config.airspace_path = path;
    }
    if let Some(buffer) = args.safety_buffer {
        config.safety_buffer_m = buffer;
    }
    if let Some(step) = args.time_step {
        config.time_step_s = step;
    }
    let rules = config.rules();
    rules.validate()?;

    let drones = load_simulated_drones(&config.airspace_path)?;

    let scenarios: Vec<Scenario> = match (&args.mission, args.scenario) {
        (Some(path), _) => {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Custom Mission".to_string());
            vec![Scenario::new(name, load_mission(path)?)]
        }
        (None, ScenarioType::Clear) => vec![create_clear_scenario()],
        (None, ScenarioType::Alpha) => vec![create_alpha_conflict_scenario()],
        (None, ScenarioType::Bravo) => vec![create_bravo_conflict_scenario()],
        (None, ScenarioType::All) => all_scenarios(),
    };

    tracing::info!(
        scenarios = scenarios.len(),
        drones = drones.len(),
        safety_buffer_m = rules.safety_buffer_m,
        time_step_s = rules.time_step_s,
        "Running deconfliction checks"
    );

    for scenario in &scenarios {
        let outcome = check_for_conflicts(&scenario.mission, &drones, &rules);
        if args.json {
            let report = ScenarioReport::new(&scenario.name, &scenario.mission, &rules, &outcome);
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print!("{}", render_console(&scenario.name, &outcome));
        }
    }

    Ok(())
}
