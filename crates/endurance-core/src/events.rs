//! Events emitted by the race controller for logging and presentation.

use serde::{Deserialize, Serialize};

use crate::enums::{TireCompound, Weather};

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RaceEventKind {
    /// Safety car deployed for the given number of ticks.
    SafetyCarDeployed { duration_ticks: u32 },
    /// Safety car withdrawn; green flag.
    SafetyCarIn,
    /// Track conditions changed.
    WeatherChanged { weather: Weather },
    /// Car pitted and left on a new compound.
    PitStop { vehicle_id: u32, compound: TireCompound },
    /// Car retired with mechanical failure.
    Retired { vehicle_id: u32 },
    /// Car crashed out.
    Crashed { vehicle_id: u32 },
}

/// A timestamped race event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    pub tick: u64,
    /// Elapsed race time when the tick started.
    pub elapsed_secs: f64,
    pub kind: RaceEventKind,
}
