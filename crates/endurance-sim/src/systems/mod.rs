//! Systems that operate on the race state each tick.
//!
//! Systems are free functions over plain data. They do not own state;
//! the `RaceController` threads its state and random source through them.

pub mod leaderboard;
pub mod safety_car;
pub mod snapshot;
pub mod tires;
pub mod vehicle_update;
pub mod weather;
