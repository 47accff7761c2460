//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Racing class of an entry. Each class has its own pace and wear profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarClass {
    /// Le Mans Hypercar: fastest, least mechanically robust.
    Hypercar,
    /// Le Mans Prototype 2.
    Lmp2,
    /// GT3 production-based cars: slowest, most robust.
    Gt3,
}

impl CarClass {
    /// Short label used by standings tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hypercar => "HYPER",
            Self::Lmp2 => "LMP2",
            Self::Gt3 => "LMGT3",
        }
    }
}

/// Run state of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Racing,
    /// Stationary in the pit box for the current tick.
    PitStop,
    /// Out of the race after an accident. Terminal.
    Crashed,
    /// Out of the race after mechanical failure. Terminal.
    Retired,
}

impl RunState {
    /// Whether the state is absorbing (the vehicle no longer takes part).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Crashed | Self::Retired)
    }
}

/// Tire compound currently fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TireCompound {
    Soft,
    Medium,
    Hard,
    /// Treaded rain tire.
    Wet,
}

impl TireCompound {
    /// Dry-weather compounds a pit crew picks from on a dry track.
    pub const SLICKS: [TireCompound; 3] = [Self::Soft, Self::Medium, Self::Hard];

    pub fn is_slick(&self) -> bool {
        !matches!(self, Self::Wet)
    }
}

/// Track-wide weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Sunny,
    Rain,
}

impl Weather {
    pub fn is_raining(&self) -> bool {
        matches!(self, Self::Rain)
    }

    /// The opposite condition.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Sunny => Self::Rain,
            Self::Rain => Self::Sunny,
        }
    }
}
