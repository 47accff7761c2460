//! Simulation constants and tuning parameters.
//!
//! Times are seconds of simulated race time; resources are percentages.

// --- Grid ---

/// Maximum number of cars on the grid.
pub const MAX_GRID_SIZE: usize = 62;

/// Maximum stored length (bytes) of team and driver names.
pub const MAX_NAME_LEN: usize = 63;

/// Sectors per lap.
pub const SECTORS_PER_LAP: u8 = 3;

// --- Race clock ---

/// Elapsed race time added per tick in fixed-clock mode.
pub const SECONDS_PER_TICK: f64 = 40.0;

/// Full race distance: 24 hours.
pub const RACE_DURATION_SECS: f64 = 24.0 * 3600.0;

// --- Sector pace ---

/// Base sector time for a Hypercar.
pub const BASE_SECTOR_TIME_HYPERCAR: f64 = 38.0;

/// Base sector time for an LMP2.
pub const BASE_SECTOR_TIME_LMP2: f64 = 41.0;

/// Base sector time for a GT3.
pub const BASE_SECTOR_TIME_GT3: f64 = 46.0;

/// Upper bound (exclusive) of the random sector-time variance.
pub const SECTOR_TIME_VARIANCE: f64 = 2.0;

/// Sector time lost at 100% tire wear; scales linearly with wear.
pub const WEAR_TIME_PENALTY: f64 = 4.0;

// --- Safety car ---

/// Minimum sector time behind the safety car.
pub const SAFETY_CAR_SECTOR_TIME: f64 = 80.0;

/// Upper bound (exclusive) of the random spread behind the safety car.
pub const SAFETY_CAR_SECTOR_SPREAD: f64 = 1.0;

/// Fuel used per sector behind the safety car.
pub const SAFETY_CAR_FUEL_BURN: f64 = 0.2;

/// Tire wear per sector behind the safety car.
pub const SAFETY_CAR_TIRE_WEAR: f64 = 0.05;

/// Per-tick probability of a safety car being deployed.
pub const SAFETY_CAR_CHANCE: f64 = 0.01;

/// Shortest safety-car period (ticks).
pub const SAFETY_CAR_MIN_TICKS: u32 = 5;

/// Longest safety-car period (ticks), inclusive.
pub const SAFETY_CAR_MAX_TICKS: u32 = 14;

// --- Weather ---

/// Dwell ticks before the first possible weather change.
pub const INITIAL_WEATHER_DWELL_TICKS: u32 = 50;

/// Dwell ticks enforced after every weather change.
pub const WEATHER_DWELL_TICKS: u32 = 100;

/// Per-tick probability of the weather flipping once the dwell has expired.
pub const WEATHER_CHANGE_CHANCE: f64 = 0.01;

// --- Resources ---

/// Full tank.
pub const FUEL_CAPACITY: f64 = 100.0;

/// Fuel used per green-flag sector.
pub const FUEL_BURN_PER_SECTOR: f64 = 2.0;

/// Base tire wear per green-flag sector, before the compound multiplier.
pub const TIRE_WEAR_RATE: f64 = 0.8;

/// Upper bound (exclusive) of the random tire wear added per sector.
pub const TIRE_WEAR_NOISE: f64 = 0.5;

// --- Reliability ---

/// Reliability of a fresh car.
pub const INITIAL_RELIABILITY: f64 = 100.0;

/// Reliability lost per green-flag sector by a Hypercar.
pub const RELIABILITY_DECAY_HYPERCAR: f64 = 0.020;

/// Reliability lost per green-flag sector by an LMP2.
pub const RELIABILITY_DECAY_LMP2: f64 = 0.015;

/// Reliability lost per green-flag sector by a GT3.
pub const RELIABILITY_DECAY_GT3: f64 = 0.010;

/// Extra reliability lost per sector on slicks in the rain.
pub const DANGEROUS_CONDITIONS_PENALTY: f64 = 5.0;

/// Per-sector probability of a sudden catastrophic failure (1 in 10 000).
pub const CATASTROPHIC_FAILURE_CHANCE: f64 = 1.0 / 10_000.0;

/// Per-sector probability of crashing on slicks in the rain.
pub const CRASH_CHANCE_DANGEROUS: f64 = 0.005;

// --- Pit strategy ---

/// Fuel level below which a car is called in.
pub const LOW_FUEL_THRESHOLD: f64 = 5.0;

/// Tire wear above which a car is called in.
pub const HIGH_WEAR_THRESHOLD: f64 = 85.0;

/// Time lost in the pit lane and box.
pub const PIT_STOP_TIME: f64 = 45.0;
