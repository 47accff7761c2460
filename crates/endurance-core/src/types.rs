//! Fundamental simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SECTORS_PER_LAP;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed race time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance one tick, adding `secs` of race time.
    pub fn advance(&mut self, secs: f64) {
        self.tick += 1;
        self.elapsed_secs += secs;
    }

    /// Advance one tick, moving elapsed time forward to `elapsed_secs`.
    /// Never runs backwards.
    pub fn advance_to(&mut self, elapsed_secs: f64) {
        self.tick += 1;
        self.elapsed_secs = self.elapsed_secs.max(elapsed_secs);
    }

    /// Elapsed time split into (hours, minutes, seconds).
    pub fn hms(&self) -> (u64, u64, u64) {
        let total = self.elapsed_secs.max(0.0) as u64;
        (total / 3600, (total % 3600) / 60, total % 60)
    }
}

/// Index of the sector a car is currently driving, always in `0..SECTORS_PER_LAP`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct SectorIndex(u8);

impl SectorIndex {
    pub const FIRST: SectorIndex = SectorIndex(0);

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The next sector and whether the lap wrapped back to the first one.
    pub fn next(self) -> (SectorIndex, bool) {
        let next = self.0 + 1;
        if next >= SECTORS_PER_LAP {
            (Self::FIRST, true)
        } else {
            (SectorIndex(next), false)
        }
    }
}

/// A sector number outside `0..SECTORS_PER_LAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSector(pub u8);

impl fmt::Display for InvalidSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sector {} out of range 0..{SECTORS_PER_LAP}", self.0)
    }
}

impl TryFrom<u8> for SectorIndex {
    type Error = InvalidSector;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < SECTORS_PER_LAP {
            Ok(SectorIndex(value))
        } else {
            Err(InvalidSector(value))
        }
    }
}
