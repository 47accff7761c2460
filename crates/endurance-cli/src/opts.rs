use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "endurance",
    about = "A tick-based 24-hour endurance race simulator"
)]
pub struct RaceOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Do not draw the standings table each tick
    #[clap(short, long)]
    pub quiet: bool,

    /// Disable ANSI colours in the standings table
    #[clap(long)]
    pub no_color: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Path to a JSON race configuration (seed, grid size, clock, probabilities)
    #[clap(short, long)]
    pub config_path: Option<PathBuf>,

    /// Path to a JSON entry list; the built-in 2025 list is used if absent
    #[clap(short, long)]
    pub roster_path: Option<PathBuf>,

    /// Override the RNG seed
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Override the requested number of cars
    #[clap(short = 'n', long)]
    pub cars: Option<usize>,

    /// Stop after this many ticks even if the race is not over
    #[clap(short, long)]
    pub ticks: Option<u64>,

    /// Wall-clock delay between ticks in milliseconds
    #[clap(short, long, default_value = "100")]
    pub delay_ms: u64,

    /// Write the final snapshot as JSON to this path
    #[clap(short, long)]
    pub json_path: Option<PathBuf>,
}
