//! Errors raised while building a race.

use std::collections::TryReserveError;

use thiserror::Error;

/// Race construction failure. Stepping a built race never fails.
#[derive(Debug, Error)]
pub enum RaceError {
    /// The vehicle collection could not be allocated.
    #[error("failed to allocate the vehicle collection: {0}")]
    Allocation(#[from] TryReserveError),
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
