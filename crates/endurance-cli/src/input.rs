//! JSON inputs: race configuration, entry list, and the final snapshot dump.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::Context;

use endurance_core::roster::RosterEntry;
use endurance_core::state::RaceSnapshot;
use endurance_sim::SimConfig;

/// Read a race configuration. Missing fields take their defaults.
pub fn read_config(filepath: &Path) -> anyhow::Result<SimConfig> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .with_context(|| format!("Failed to open config file {}!", filepath.display()))?;
    let config = serde_json::from_reader(&fh)
        .with_context(|| format!("Failed to parse config file {}!", filepath.display()))?;
    Ok(config)
}

/// Read an entry list: a JSON array of `{ team, driver, class }`.
pub fn read_roster(filepath: &Path) -> anyhow::Result<Vec<RosterEntry>> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .with_context(|| format!("Failed to open roster file {}!", filepath.display()))?;
    let roster = serde_json::from_reader(&fh)
        .with_context(|| format!("Failed to parse roster file {}!", filepath.display()))?;
    Ok(roster)
}

/// Write a snapshot as pretty-printed JSON.
pub fn write_snapshot(filepath: &Path, snapshot: &RaceSnapshot) -> anyhow::Result<()> {
    let fh = File::create(filepath)
        .with_context(|| format!("Failed to create {}!", filepath.display()))?;
    serde_json::to_writer_pretty(fh, snapshot)
        .with_context(|| format!("Failed to write snapshot to {}!", filepath.display()))?;
    Ok(())
}
