//! Vehicle update — advances one car by one sector.
//!
//! The only inputs besides the car itself are the ambient conditions and
//! the shared random stream. Draw order per call:
//! - safety car: sector spread
//! - green flag: sector variance, wear noise, catastrophic-failure roll,
//!   crash roll (dangerous conditions only), dry compound pick (pit stop only)
//!
//! Terminal cars draw nothing.

use rand::Rng;

use endurance_core::constants::*;
use endurance_core::enums::{RunState, TireCompound, Weather};
use endurance_core::vehicle::Vehicle;

use crate::systems::tires;

/// Conditions every car sees during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ambient {
    pub weather: Weather,
    pub safety_car: bool,
}

/// What a single update did to the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorOutcome {
    /// The car was already out; nothing changed.
    Inactive,
    /// A sector was driven.
    Completed,
    /// A sector was driven including a pit stop onto the given compound.
    Pitted(TireCompound),
    /// Mechanical failure; no sector recorded.
    Retired,
    /// Accident; no sector recorded.
    Crashed,
}

/// Advance `vehicle` by one sector under `ambient` conditions.
pub fn advance<R: Rng + ?Sized>(
    vehicle: &mut Vehicle,
    ambient: Ambient,
    rng: &mut R,
) -> SectorOutcome {
    if vehicle.is_out() {
        return SectorOutcome::Inactive;
    }

    // The previous tick already paid for the stop.
    if vehicle.state == RunState::PitStop {
        vehicle.state = RunState::Racing;
    }

    if ambient.safety_car {
        let duration = SAFETY_CAR_SECTOR_TIME + rng.gen_range(0.0..SAFETY_CAR_SECTOR_SPREAD);
        vehicle.fuel = (vehicle.fuel - SAFETY_CAR_FUEL_BURN).max(0.0);
        vehicle.tire_wear += SAFETY_CAR_TIRE_WEAR;
        vehicle.timing.commit_sector(duration);
        return SectorOutcome::Completed;
    }

    let tire = tires::response(ambient.weather, vehicle.compound);
    let mut duration = vehicle.base_sector_time()
        + rng.gen_range(0.0..SECTOR_TIME_VARIANCE)
        + vehicle.tire_wear / 100.0 * WEAR_TIME_PENALTY
        + tire.time_modifier;

    vehicle.fuel = (vehicle.fuel - FUEL_BURN_PER_SECTOR).max(0.0);
    vehicle.tire_wear +=
        TIRE_WEAR_RATE * tire.wear_multiplier + rng.gen_range(0.0..TIRE_WEAR_NOISE);

    if let Some(outcome) = wear_and_tear(vehicle, tire.dangerous, rng) {
        return outcome;
    }

    if needs_pit(vehicle, ambient.weather) {
        duration += PIT_STOP_TIME;
        let compound = pit(vehicle, ambient.weather, rng);
        vehicle.timing.commit_sector(duration);
        return SectorOutcome::Pitted(compound);
    }

    vehicle.timing.commit_sector(duration);
    SectorOutcome::Completed
}

/// Reliability decay, catastrophic failure and crash risk.
/// Returns the terminal outcome if the car is out.
fn wear_and_tear<R: Rng + ?Sized>(
    vehicle: &mut Vehicle,
    dangerous: bool,
    rng: &mut R,
) -> Option<SectorOutcome> {
    vehicle.reliability -= vehicle.reliability_decay();
    if dangerous {
        vehicle.reliability -= DANGEROUS_CONDITIONS_PENALTY;
    }
    if rng.gen_bool(CATASTROPHIC_FAILURE_CHANCE) {
        vehicle.reliability = vehicle.reliability.min(0.0);
    }

    if vehicle.reliability <= 0.0 {
        vehicle.state = RunState::Retired;
        return Some(SectorOutcome::Retired);
    }

    if dangerous && rng.gen_bool(CRASH_CHANCE_DANGEROUS) {
        vehicle.state = RunState::Crashed;
        return Some(SectorOutcome::Crashed);
    }

    None
}

/// Whether strategy calls the car in this sector.
pub fn needs_pit(vehicle: &Vehicle, weather: Weather) -> bool {
    vehicle.fuel < LOW_FUEL_THRESHOLD
        || vehicle.tire_wear > HIGH_WEAR_THRESHOLD
        || !tires::suits(weather, vehicle.compound)
}

/// Refuel, fit new tires and mark the car as stopped. Returns the new compound.
fn pit<R: Rng + ?Sized>(vehicle: &mut Vehicle, weather: Weather, rng: &mut R) -> TireCompound {
    vehicle.state = RunState::PitStop;
    vehicle.fuel = FUEL_CAPACITY;
    vehicle.tire_wear = 0.0;
    vehicle.pit_stops += 1;
    vehicle.compound = if weather.is_raining() {
        TireCompound::Wet
    } else {
        pick_slick(rng)
    };
    vehicle.compound
}

/// Uniform choice among the dry compounds.
fn pick_slick<R: Rng + ?Sized>(rng: &mut R) -> TireCompound {
    let n = TireCompound::SLICKS.len();
    let roll: f64 = rng.gen();
    let idx = ((roll * n as f64) as usize).min(n - 1);
    TireCompound::SLICKS[idx]
}
