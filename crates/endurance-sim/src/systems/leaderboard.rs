//! Leaderboard ordering: most laps first, then least accumulated time.
//!
//! Terminal cars stay in the table with frozen totals, so they drift down
//! as running cars pass them.

use std::cmp::Ordering;

use endurance_core::vehicle::Vehicle;

/// Race-order comparison: `Less` means `a` is ahead of `b`.
pub fn compare_progress(a: &Vehicle, b: &Vehicle) -> Ordering {
    b.timing
        .laps
        .cmp(&a.timing.laps)
        .then_with(|| a.timing.total_time.total_cmp(&b.timing.total_time))
}

/// Stable sort into race order. Exact ties keep their previous relative order.
pub fn sort(vehicles: &mut [Vehicle]) {
    vehicles.sort_by(compare_progress);
}

/// Whether the slice is already in race order.
pub fn is_ordered(vehicles: &[Vehicle]) -> bool {
    vehicles
        .windows(2)
        .all(|w| compare_progress(&w[0], &w[1]) != Ordering::Greater)
}
