//! Race controller — the core of the simulation.
//!
//! `RaceController` owns the grid, the ambient conditions and the random
//! stream, runs every system once per tick and produces `RaceSnapshot`s.
//! Completely headless, so identical seeds give identical races.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use endurance_core::constants::*;
use endurance_core::enums::TireCompound;
use endurance_core::events::{RaceEvent, RaceEventKind};
use endurance_core::roster::RosterEntry;
use endurance_core::state::{AmbientView, RaceSnapshot};
use endurance_core::types::SimTime;
use endurance_core::vehicle::Vehicle;

use crate::error::RaceError;
use crate::systems;
use crate::systems::safety_car::{SafetyCarChange, SafetyCarState};
use crate::systems::vehicle_update::{Ambient, SectorOutcome};
use crate::systems::weather::WeatherState;

/// How race time advances each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ClockMode {
    /// Constant increment, independent of what the cars did.
    Fixed { secs_per_tick: f64 },
    /// Follow the leader's cumulative race time, never running backwards.
    Leader,
}

impl Default for ClockMode {
    fn default() -> Self {
        Self::Fixed {
            secs_per_tick: SECONDS_PER_TICK,
        }
    }
}

/// Configuration for starting a new race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same race.
    pub seed: u64,
    /// Requested number of cars; capped by the roster and `MAX_GRID_SIZE`.
    pub grid_size: usize,
    pub clock: ClockMode,
    /// Elapsed time at which the chequered flag falls.
    pub race_duration_secs: f64,
    /// Per-tick probability of a safety car while it is in.
    pub safety_car_chance: f64,
    /// Per-tick probability of a weather flip once the dwell timer expires.
    pub weather_change_chance: f64,
    /// Ticks the weather holds after a flip.
    pub weather_dwell_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_size: MAX_GRID_SIZE,
            clock: ClockMode::default(),
            race_duration_secs: RACE_DURATION_SECS,
            safety_car_chance: SAFETY_CAR_CHANCE,
            weather_change_chance: WEATHER_CHANGE_CHANCE,
            weather_dwell_ticks: WEATHER_DWELL_TICKS,
        }
    }
}

impl SimConfig {
    /// Reject values the systems cannot run with.
    pub fn validate(&self) -> Result<(), RaceError> {
        let probability = |p: f64| (0.0..=1.0).contains(&p);
        if !probability(self.safety_car_chance) {
            return Err(RaceError::InvalidConfig(
                "safety_car_chance must be within [0, 1]",
            ));
        }
        if !probability(self.weather_change_chance) {
            return Err(RaceError::InvalidConfig(
                "weather_change_chance must be within [0, 1]",
            ));
        }
        if let ClockMode::Fixed { secs_per_tick } = self.clock {
            if !(secs_per_tick > 0.0 && secs_per_tick.is_finite()) {
                return Err(RaceError::InvalidConfig(
                    "secs_per_tick must be positive and finite",
                ));
            }
        }
        if self.weather_dwell_ticks == 0 {
            return Err(RaceError::InvalidConfig(
                "weather_dwell_ticks must be non-zero",
            ));
        }
        if self.race_duration_secs.is_nan() || self.race_duration_secs <= 0.0 {
            return Err(RaceError::InvalidConfig(
                "race_duration_secs must be positive",
            ));
        }
        Ok(())
    }
}

/// The race controller. Owns the grid and all race-wide state.
pub struct RaceController<R = ChaCha8Rng> {
    /// Kept in leaderboard order after every tick.
    vehicles: Vec<Vehicle>,
    time: SimTime,
    weather: WeatherState,
    safety_car: SafetyCarState,
    /// A crash last tick forces the safety car out this tick.
    incident_pending: bool,
    config: SimConfig,
    rng: R,
}

impl RaceController<ChaCha8Rng> {
    /// Create a race seeded from `config.seed`.
    pub fn new(config: SimConfig, roster: &[RosterEntry]) -> Result<Self, RaceError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, roster, rng)
    }
}

impl<R: Rng> RaceController<R> {
    /// Create a race drawing from an injected random source.
    ///
    /// Cars take ids 1.. in roster order and start on Soft or Medium.
    pub fn with_rng(config: SimConfig, roster: &[RosterEntry], mut rng: R) -> Result<Self, RaceError> {
        config.validate()?;

        let size = config.grid_size.min(roster.len()).min(MAX_GRID_SIZE);
        if size < config.grid_size {
            log::warn!(
                "requested grid of {} capped to {size} (roster {}, max {MAX_GRID_SIZE})",
                config.grid_size,
                roster.len()
            );
        }

        let mut vehicles = Vec::new();
        vehicles.try_reserve_exact(size)?;
        for (idx, entry) in roster.iter().take(size).enumerate() {
            let compound = if rng.gen_bool(0.5) {
                TireCompound::Soft
            } else {
                TireCompound::Medium
            };
            vehicles.push(Vehicle::new(idx as u32 + 1, entry, compound));
        }

        log::info!(
            "race created: {} cars, seed {}, {:?}",
            vehicles.len(),
            config.seed,
            config.clock
        );

        Ok(Self {
            vehicles,
            time: SimTime::default(),
            weather: WeatherState::default(),
            safety_car: SafetyCarState::default(),
            incident_pending: false,
            config,
            rng,
        })
    }

    /// Advance the race by one tick and return the resulting snapshot.
    ///
    /// Order: safety car, weather, every car in current order, re-sort, clock.
    pub fn step(&mut self) -> RaceSnapshot {
        let start = self.time;
        let mut events = Vec::new();
        let mut push = |kind: RaceEventKind| {
            events.push(RaceEvent {
                tick: start.tick,
                elapsed_secs: start.elapsed_secs,
                kind,
            })
        };

        let incident = std::mem::take(&mut self.incident_pending);
        match systems::safety_car::run(
            &mut self.safety_car,
            incident,
            self.config.safety_car_chance,
            &mut self.rng,
        ) {
            Some(SafetyCarChange::Deployed(duration_ticks)) => {
                log::info!("safety car deployed for {duration_ticks} ticks");
                push(RaceEventKind::SafetyCarDeployed { duration_ticks });
            }
            Some(SafetyCarChange::Withdrawn) => {
                log::info!("safety car in, green flag");
                push(RaceEventKind::SafetyCarIn);
            }
            None => {}
        }

        if let Some(weather) = systems::weather::run(
            &mut self.weather,
            self.config.weather_change_chance,
            self.config.weather_dwell_ticks,
            &mut self.rng,
        ) {
            log::info!("weather changed to {weather:?}");
            push(RaceEventKind::WeatherChanged { weather });
        }

        let ambient = Ambient {
            weather: self.weather.current,
            safety_car: self.safety_car.active,
        };
        for vehicle in &mut self.vehicles {
            match systems::vehicle_update::advance(vehicle, ambient, &mut self.rng) {
                SectorOutcome::Pitted(compound) => {
                    log::debug!("car {} pits for {compound:?}", vehicle.id);
                    push(RaceEventKind::PitStop {
                        vehicle_id: vehicle.id,
                        compound,
                    });
                }
                SectorOutcome::Retired => {
                    log::warn!("car {} ({}) retires", vehicle.id, vehicle.team);
                    push(RaceEventKind::Retired {
                        vehicle_id: vehicle.id,
                    });
                }
                SectorOutcome::Crashed => {
                    log::warn!("car {} ({}) crashes", vehicle.id, vehicle.team);
                    self.incident_pending = true;
                    push(RaceEventKind::Crashed {
                        vehicle_id: vehicle.id,
                    });
                }
                SectorOutcome::Completed | SectorOutcome::Inactive => {}
            }
        }

        systems::leaderboard::sort(&mut self.vehicles);
        self.advance_clock();

        systems::snapshot::build_snapshot(
            self.ambient(),
            &self.vehicles,
            events,
            self.is_finished(),
        )
    }

    fn advance_clock(&mut self) {
        match self.config.clock {
            ClockMode::Fixed { secs_per_tick } => self.time.advance(secs_per_tick),
            // With nobody left running the leader's time is frozen; keep the
            // race clock moving at the nominal rate so the flag still falls.
            ClockMode::Leader => match self.vehicles.iter().find(|v| !v.is_out()) {
                Some(leader) => self.time.advance_to(leader.timing.total_time),
                None => self.time.advance(SECONDS_PER_TICK),
            },
        }
    }

    /// Snapshot of the current state without events.
    pub fn snapshot(&self) -> RaceSnapshot {
        systems::snapshot::build_snapshot(
            self.ambient(),
            &self.vehicles,
            Vec::new(),
            self.is_finished(),
        )
    }

    /// Whether the race distance has been reached.
    pub fn is_finished(&self) -> bool {
        self.time.elapsed_secs >= self.config.race_duration_secs
    }

    pub fn ambient(&self) -> AmbientView {
        AmbientView {
            weather: self.weather.current,
            safety_car_active: self.safety_car.active,
            elapsed_secs: self.time.elapsed_secs,
            tick: self.time.tick,
        }
    }

    /// Cars in leaderboard order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn weather_state(&self) -> WeatherState {
        self.weather
    }

    pub fn safety_car_state(&self) -> SafetyCarState {
        self.safety_car
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mutable grid access (for tests that stage a scenario).
    #[cfg(test)]
    pub fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    /// Override the weather state (for tests).
    #[cfg(test)]
    pub fn set_weather_state(&mut self, weather: WeatherState) {
        self.weather = weather;
    }

    /// Override the safety car state (for tests).
    #[cfg(test)]
    pub fn set_safety_car_state(&mut self, safety_car: SafetyCarState) {
        self.safety_car = safety_car;
    }
}
