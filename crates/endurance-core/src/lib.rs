//! Core types and definitions for the endurance race simulator.
//!
//! This crate defines the vocabulary shared across the other crates:
//! the vehicle model, the entry roster, snapshot views, race events,
//! and tuning constants. It has no dependency on the simulation engine,
//! randomness, or any terminal/runtime concern.

pub mod constants;
pub mod enums;
pub mod events;
pub mod roster;
pub mod state;
pub mod types;
pub mod vehicle;
