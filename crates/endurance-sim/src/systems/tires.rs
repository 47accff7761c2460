//! Tire model — how a compound behaves on the current track surface.
//!
//! Pure lookup with no randomness: callers add their own noise.

use endurance_core::enums::{TireCompound, Weather};

/// Effect of the fitted compound on one sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TireResponse {
    /// Seconds added to (or taken off) the sector time.
    pub time_modifier: f64,
    /// Multiplier on the base tire wear rate.
    pub wear_multiplier: f64,
    /// Slicks on a wet track: heavy reliability penalty and crash risk.
    pub dangerous: bool,
}

impl TireResponse {
    const fn new(time_modifier: f64, wear_multiplier: f64, dangerous: bool) -> Self {
        Self {
            time_modifier,
            wear_multiplier,
            dangerous,
        }
    }
}

/// Look up the compound's behaviour for the given weather.
pub fn response(weather: Weather, compound: TireCompound) -> TireResponse {
    match (weather, compound) {
        (Weather::Sunny, TireCompound::Soft) => TireResponse::new(-0.5, 1.2, false),
        (Weather::Sunny, TireCompound::Medium) => TireResponse::new(0.0, 1.0, false),
        (Weather::Sunny, TireCompound::Hard) => TireResponse::new(0.6, 0.7, false),
        // Wets overheat on a dry track.
        (Weather::Sunny, TireCompound::Wet) => TireResponse::new(3.0, 3.0, false),
        // Rain is slower even on the right tire.
        (Weather::Rain, TireCompound::Wet) => TireResponse::new(5.0, 1.0, false),
        // Slicks slide rather than grip, so they wear less.
        (Weather::Rain, TireCompound::Soft | TireCompound::Medium | TireCompound::Hard) => {
            TireResponse::new(25.0, 0.5, true)
        }
    }
}

/// Whether the compound is the right type for the weather.
pub fn suits(weather: Weather, compound: TireCompound) -> bool {
    weather.is_raining() != compound.is_slick()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_is_fastest_and_hard_wears_least_in_the_dry() {
        let soft = response(Weather::Sunny, TireCompound::Soft);
        let medium = response(Weather::Sunny, TireCompound::Medium);
        let hard = response(Weather::Sunny, TireCompound::Hard);
        assert!(soft.time_modifier < medium.time_modifier);
        assert!(medium.time_modifier < hard.time_modifier);
        assert!(soft.wear_multiplier > medium.wear_multiplier);
        assert!(medium.wear_multiplier > hard.wear_multiplier);
        assert_eq!(medium.time_modifier, 0.0);
        assert_eq!(medium.wear_multiplier, 1.0);
    }

    #[test]
    fn wets_overheat_in_the_dry() {
        let wet = response(Weather::Sunny, TireCompound::Wet);
        for slick in TireCompound::SLICKS {
            let r = response(Weather::Sunny, slick);
            assert!(wet.time_modifier > r.time_modifier);
            assert!(wet.wear_multiplier > r.wear_multiplier);
        }
        assert!(!wet.dangerous);
    }

    #[test]
    fn slicks_in_the_rain_are_dangerous() {
        let wet = response(Weather::Rain, TireCompound::Wet);
        assert!(!wet.dangerous);
        for slick in TireCompound::SLICKS {
            let r = response(Weather::Rain, slick);
            assert!(r.dangerous, "{slick:?} in rain should be dangerous");
            assert!(r.time_modifier > wet.time_modifier);
            assert!(r.wear_multiplier < wet.wear_multiplier);
        }
    }

    #[test]
    fn suitability() {
        assert!(suits(Weather::Rain, TireCompound::Wet));
        assert!(!suits(Weather::Sunny, TireCompound::Wet));
        for slick in TireCompound::SLICKS {
            assert!(suits(Weather::Sunny, slick));
            assert!(!suits(Weather::Rain, slick));
        }
    }
}
