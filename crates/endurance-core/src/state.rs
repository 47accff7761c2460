//! Race state snapshot — the complete visible state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::RaceEvent;
use crate::vehicle::Vehicle;

/// Complete race state after a tick, cars in leaderboard order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub ambient: AmbientView,
    pub vehicles: Vec<VehicleView>,
    /// Events raised during the tick that produced this snapshot.
    pub events: Vec<RaceEvent>,
    /// Race distance reached.
    pub finished: bool,
}

/// Track-wide conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbientView {
    pub weather: Weather,
    pub safety_car_active: bool,
    /// Elapsed race time (seconds).
    pub elapsed_secs: f64,
    pub tick: u64,
}

/// Per-car standings line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: u32,
    pub team: String,
    pub driver: String,
    pub class: CarClass,
    pub state: RunState,
    pub compound: TireCompound,
    pub laps: u32,
    /// Cumulative race time (seconds).
    pub total_time: f64,
    pub reliability: f64,
    pub tire_wear: f64,
    pub fuel: f64,
    pub last_lap_time: f64,
    pub best_lap_time: Option<f64>,
    pub pit_stops: u32,
}

impl From<&Vehicle> for VehicleView {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id,
            team: v.team.clone(),
            driver: v.driver.clone(),
            class: v.class,
            state: v.state,
            compound: v.compound,
            laps: v.timing.laps,
            total_time: v.timing.total_time,
            reliability: v.reliability,
            tire_wear: v.tire_wear,
            fuel: v.fuel,
            last_lap_time: v.timing.last_lap_time,
            best_lap_time: v.timing.best_lap_time,
            pit_stops: v.pit_stops,
        }
    }
}
