//! Snapshot system: copies the controller's state into a `RaceSnapshot`.
//!
//! Read-only. Vehicles are emitted in the order given, which after a tick
//! is leaderboard order.

use endurance_core::events::RaceEvent;
use endurance_core::state::{AmbientView, RaceSnapshot, VehicleView};
use endurance_core::vehicle::Vehicle;

pub fn build_snapshot(
    ambient: AmbientView,
    vehicles: &[Vehicle],
    events: Vec<RaceEvent>,
    finished: bool,
) -> RaceSnapshot {
    RaceSnapshot {
        ambient,
        vehicles: vehicles.iter().map(VehicleView::from).collect(),
        events,
        finished,
    }
}
