//! Race simulation engine for the endurance simulator.
//!
//! Owns the field of cars, evolves weather and safety-car conditions,
//! advances every car one sector per tick, and produces `RaceSnapshot`s
//! in leaderboard order. Headless and deterministic for a given seed.

pub mod engine;
pub mod error;
pub mod systems;

pub use endurance_core;
pub use engine::{ClockMode, RaceController, SimConfig};
pub use error::RaceError;
