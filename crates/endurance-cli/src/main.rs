//! Command-line front end: loads configuration, runs the race in the
//! terminal, and optionally dumps the final standings as JSON.

mod input;
mod opts;
mod race_loop;
mod render;

use std::time::Duration;

use clap::Parser;

use endurance_core::roster::default_entries;
use endurance_sim::{RaceController, SimConfig};

use crate::opts::RaceOpts;
use crate::race_loop::LoopSettings;
use crate::render::Painter;

fn main() -> anyhow::Result<()> {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    // PRE-PROCESSING ------------------------------------------------------------------------------
    let opts = RaceOpts::parse();

    let mut config = match &opts.config_path {
        Some(path) => {
            log::info!("reading race configuration from {}", path.display());
            input::read_config(path)?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }
    if let Some(cars) = opts.cars {
        config.grid_size = cars;
    }

    let roster = match &opts.roster_path {
        Some(path) => {
            log::info!("reading entry list from {}", path.display());
            input::read_roster(path)?
        }
        None => default_entries(),
    };

    // EXECUTION -----------------------------------------------------------------------------------
    let mut race = RaceController::new(config, &roster)?;
    let settings = LoopSettings {
        tick_delay: Duration::from_millis(opts.delay_ms),
        max_ticks: opts.ticks,
        draw: !opts.quiet,
        painter: Painter {
            enabled: !opts.no_color,
        },
    };
    let stdout = std::io::stdout();
    let last = race_loop::run(&mut race, settings, &mut stdout.lock())?;

    // POST-PROCESSING -----------------------------------------------------------------------------
    if opts.quiet {
        print!("{}", render::standings(&last, settings.painter));
    }
    if let Some(path) = &opts.json_path {
        input::write_snapshot(path, &last)?;
        log::info!("final snapshot written to {}", path.display());
    }
    Ok(())
}
