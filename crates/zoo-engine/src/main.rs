//! Driver binary for the zoo simulation.
//!
//! Wires a roster, a zookeeper, and its announcers together and runs the
//! configured daily routine, narrating to stdout. Diagnostics go to
//! stderr through `tracing`.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `zoo-config.yaml` (or defaults)
//! 3. Build the zoo from the roster
//! 4. Create the zookeeper and subscribe announcers
//! 5. Run the routine
//! 6. Dispose announcers and log the closing census

mod error;
mod roster;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use zoo_animals::{ActionContext, ConsoleNarrator, SeededImpulses};
use zoo_core::{Announcer, ZooConfig, Zookeeper};

use crate::error::EngineError;

/// Default config file, looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "zoo-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, roster building, or announcer
/// disposal fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging on stderr; stdout is narration.
    init_tracing();
    info!("zoo-engine starting");

    run().map_err(Into::into)
}

fn run() -> Result<(), EngineError> {
    // 2. Load configuration.
    let config = load_config()?;
    info!(
        animals = config.roster.len(),
        announcers = config.routine.announcers,
        chores = config.routine.chores.len(),
        seed = ?config.routine.seed,
        "Configuration loaded"
    );

    // 3. Build the zoo.
    let mut zoo = roster::build_zoo(&config.roster)?;

    // 4. Keeper and announcers.
    let mut keeper = Zookeeper::new();
    let announcers: Vec<_> = (0..config.routine.announcers)
        .map(|_| Announcer::subscribe(&mut keeper))
        .collect();
    info!(keeper = %keeper.id(), observers = keeper.observer_count(), "Announcers subscribed");

    // 5. Run the routine.
    let mut impulses = config
        .routine
        .seed
        .map_or_else(SeededImpulses::from_entropy, SeededImpulses::seeded);
    let mut narrator = ConsoleNarrator::new();
    let mut ctx = ActionContext::new(&mut narrator, &mut impulses);
    keeper.routine(&config.routine.chores, &mut zoo, &mut ctx);

    // 6. Dispose announcers and report.
    for announcer in &announcers {
        announcer.dispose(&mut keeper)?;
    }
    let census = serde_json::to_string(&zoo.census())?;
    info!(%census, observers = keeper.observer_count(), "Routine complete");
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if std::env::var("ZOO_LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Resolve and load the configuration.
///
/// The path is the first CLI argument, else `ZOO_CONFIG`, else
/// `zoo-config.yaml`. A missing default file means built-in defaults; an
/// explicitly named file must exist.
fn load_config() -> Result<ZooConfig, EngineError> {
    let explicit = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("ZOO_CONFIG"))
        .map(PathBuf::from);

    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading config");
        return Ok(ZooConfig::from_file(&path)?);
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(ZooConfig::from_file(&default_path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(ZooConfig::default())
    }
}
