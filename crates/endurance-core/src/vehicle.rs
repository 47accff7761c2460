//! The vehicle model: identity, run state, resources, and lap timing.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{CarClass, RunState, TireCompound};
use crate::roster::{truncate_name, RosterEntry};
use crate::types::SectorIndex;

/// Lap and sector timing for one car. All times in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LapTiming {
    /// Most recent time recorded for each sector.
    pub sector_times: [f64; SECTORS_PER_LAP as usize],
    /// Time accumulated on the lap in progress.
    pub current_lap_time: f64,
    /// Time of the last completed lap (0.0 before the first one).
    pub last_lap_time: f64,
    /// Fastest completed lap.
    pub best_lap_time: Option<f64>,
    /// Cumulative race time.
    pub total_time: f64,
    /// Sector currently being driven.
    pub sector: SectorIndex,
    /// Completed laps.
    pub laps: u32,
}

impl LapTiming {
    /// Record a finished sector. Returns `true` when it completed a lap.
    pub fn commit_sector(&mut self, duration: f64) -> bool {
        self.sector_times[self.sector.as_usize()] = duration;
        self.current_lap_time += duration;
        self.total_time += duration;

        let (next, wrapped) = self.sector.next();
        self.sector = next;
        if wrapped {
            self.laps += 1;
            self.last_lap_time = self.current_lap_time;
            self.best_lap_time = Some(match self.best_lap_time {
                Some(best) => best.min(self.current_lap_time),
                None => self.current_lap_time,
            });
            self.current_lap_time = 0.0;
        }
        wrapped
    }
}

/// One competitor. Identity fields never change after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Grid number, 1-based in roster order.
    pub id: u32,
    pub team: String,
    pub driver: String,
    pub class: CarClass,

    pub state: RunState,
    /// Fuel level, 0-100.
    pub fuel: f64,
    /// Tire wear, 0 (new) upward; past 100 the tires are destroyed.
    pub tire_wear: f64,
    /// Mechanical health; the car retires at or below zero.
    pub reliability: f64,
    pub compound: TireCompound,
    pub timing: LapTiming,
    /// Pit stops made so far.
    pub pit_stops: u32,
}

impl Vehicle {
    /// Build a car from a roster entry with a full tank, new tires and full reliability.
    pub fn new(id: u32, entry: &RosterEntry, compound: TireCompound) -> Self {
        Self {
            id,
            team: truncate_name(&entry.team),
            driver: truncate_name(&entry.driver),
            class: entry.class,
            state: RunState::Racing,
            fuel: FUEL_CAPACITY,
            tire_wear: 0.0,
            reliability: INITIAL_RELIABILITY,
            compound,
            timing: LapTiming::default(),
            pit_stops: 0,
        }
    }

    /// Whether the car has left the race for good.
    pub fn is_out(&self) -> bool {
        self.state.is_terminal()
    }

    /// Base sector time for this car's class.
    pub fn base_sector_time(&self) -> f64 {
        match self.class {
            CarClass::Hypercar => BASE_SECTOR_TIME_HYPERCAR,
            CarClass::Lmp2 => BASE_SECTOR_TIME_LMP2,
            CarClass::Gt3 => BASE_SECTOR_TIME_GT3,
        }
    }

    /// Reliability lost per green-flag sector for this car's class.
    pub fn reliability_decay(&self) -> f64 {
        match self.class {
            CarClass::Hypercar => RELIABILITY_DECAY_HYPERCAR,
            CarClass::Lmp2 => RELIABILITY_DECAY_LMP2,
            CarClass::Gt3 => RELIABILITY_DECAY_GT3,
        }
    }
}
