//! Safety car system — deployment roll, countdown and withdrawal.
//!
//! Runs once per tick before any car moves. While the safety car is out
//! no deployment roll is made.

use rand::Rng;
use serde::{Deserialize, Serialize};

use endurance_core::constants::{SAFETY_CAR_MAX_TICKS, SAFETY_CAR_MIN_TICKS};

/// Whether the safety car is out and for how many more ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCarState {
    pub active: bool,
    pub remaining_ticks: u32,
}

/// Transition produced by a tick of the safety car system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyCarChange {
    Deployed(u32),
    Withdrawn,
}

/// Advance the safety car by one tick.
///
/// `incident` forces a deployment (a car crashed on the previous tick).
/// The random roll is drawn whenever the safety car is in, so the stream
/// consumption does not depend on the incident flag.
pub fn run<R: Rng + ?Sized>(
    state: &mut SafetyCarState,
    incident: bool,
    chance: f64,
    rng: &mut R,
) -> Option<SafetyCarChange> {
    if state.active {
        state.remaining_ticks = state.remaining_ticks.saturating_sub(1);
        if state.remaining_ticks == 0 {
            state.active = false;
            return Some(SafetyCarChange::Withdrawn);
        }
        return None;
    }

    let rolled = rng.gen_bool(chance);
    if !(incident || rolled) {
        return None;
    }

    let duration = deployment_length(rng);
    state.active = true;
    state.remaining_ticks = duration;
    Some(SafetyCarChange::Deployed(duration))
}

/// Uniform length in `SAFETY_CAR_MIN_TICKS..=SAFETY_CAR_MAX_TICKS`.
fn deployment_length<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let span = SAFETY_CAR_MAX_TICKS - SAFETY_CAR_MIN_TICKS + 1;
    let roll: f64 = rng.gen();
    let extra = ((roll * span as f64) as u32).min(span - 1);
    SAFETY_CAR_MIN_TICKS + extra
}
