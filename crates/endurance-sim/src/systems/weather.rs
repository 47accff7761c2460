//! Weather system — flips between sunny and rain after a dwell period.

use rand::Rng;
use serde::{Deserialize, Serialize};

use endurance_core::constants::INITIAL_WEATHER_DWELL_TICKS;
use endurance_core::enums::Weather;

/// Current weather and ticks left before a change may be rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherState {
    pub current: Weather,
    pub dwell_ticks: u32,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            current: Weather::Sunny,
            dwell_ticks: INITIAL_WEATHER_DWELL_TICKS,
        }
    }
}

/// Advance the weather by one tick. Returns the new weather on a change.
///
/// While the dwell timer runs it only counts down. Once expired a change is
/// rolled every tick; the timer is rearmed to `dwell` only when the weather flips.
pub fn run<R: Rng + ?Sized>(
    state: &mut WeatherState,
    chance: f64,
    dwell: u32,
    rng: &mut R,
) -> Option<Weather> {
    if state.dwell_ticks > 0 {
        state.dwell_ticks -= 1;
        return None;
    }
    if !rng.gen_bool(chance) {
        return None;
    }
    state.current = state.current.flipped();
    state.dwell_ticks = dwell;
    Some(state.current)
}
