//! Race loop — steps the controller at a fixed wall-clock pace and draws standings.
//!
//! Runs until the chequered flag or the optional tick limit, whichever
//! comes first.

use std::io::Write;
use std::time::{Duration, Instant};

use rand::Rng;

use endurance_core::state::RaceSnapshot;
use endurance_sim::RaceController;

use crate::render::{self, Painter};

/// Loop settings taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Wall-clock time per tick; zero runs flat out.
    pub tick_delay: Duration,
    pub max_ticks: Option<u64>,
    /// Draw the standings after every tick.
    pub draw: bool,
    pub painter: Painter,
}

/// Run the race and return the last snapshot produced.
pub fn run<R: Rng, W: Write>(
    race: &mut RaceController<R>,
    settings: LoopSettings,
    out: &mut W,
) -> anyhow::Result<RaceSnapshot> {
    let mut last = race.snapshot();
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();

    while !race.is_finished() && settings.max_ticks.map_or(true, |max| ticks < max) {
        last = race.step();
        ticks += 1;

        for event in &last.events {
            log::debug!("{event:?}");
        }

        if settings.draw {
            write!(out, "{}", render::CLEAR_SCREEN)?;
            write!(out, "{}", render::standings(&last, settings.painter))?;
            out.flush()?;
        }

        if settings.tick_delay.is_zero() {
            continue;
        }
        next_tick_time += settings.tick_delay;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > settings.tick_delay * 2 {
            // Too far behind; resync instead of bursting.
            next_tick_time = now;
        }
    }

    log::info!(
        "race loop stopped after {ticks} ticks at {:.0}s (finished: {})",
        last.ambient.elapsed_secs,
        last.finished
    );
    Ok(last)
}
