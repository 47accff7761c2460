//! Terminal standings table.
//!
//! Pure string building; the race loop decides where the text goes.

use std::fmt::Write;

use endurance_core::enums::{CarClass, RunState, TireCompound};
use endurance_core::state::{AmbientView, RaceSnapshot, VehicleView};
use endurance_core::types::SimTime;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const WHITE: &str = "\x1b[37m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";
const SC_BANNER: &str = "\x1b[43m\x1b[30m";

/// Moves the cursor home and clears the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

const RULE_WIDTH: usize = 109;
const TEAM_WIDTH: usize = 25;

/// Wraps text in an ANSI colour when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub enabled: bool,
}

impl Painter {
    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}

/// Gap to the leader as shown in the table.
pub fn gap_label(position: usize, car: &VehicleView, leader: &VehicleView) -> String {
    if car.state.is_terminal() {
        return "---".to_owned();
    }
    if position == 0 {
        return "LEADER".to_owned();
    }
    let laps_down = leader.laps.saturating_sub(car.laps);
    if laps_down > 0 {
        format!("+{laps_down} Laps")
    } else {
        format!("+{:.1} s", car.total_time - leader.total_time)
    }
}

pub fn state_label(state: RunState) -> &'static str {
    match state {
        RunState::Racing => "RUN",
        RunState::PitStop => "IN PIT",
        RunState::Crashed => "CRASH",
        RunState::Retired => "DNF",
    }
}

pub fn tire_label(compound: TireCompound) -> &'static str {
    match compound {
        TireCompound::Soft => "(S)oft",
        TireCompound::Medium => "(M)edium",
        TireCompound::Hard => "(H)ard",
        TireCompound::Wet => "(W)et",
    }
}

/// Race clock as `HHh MMm SSs`.
pub fn clock_label(ambient: &AmbientView) -> String {
    let time = SimTime {
        tick: ambient.tick,
        elapsed_secs: ambient.elapsed_secs,
    };
    let (hours, minutes, seconds) = time.hms();
    format!("{hours:02}h {minutes:02}m {seconds:02}s")
}

/// Cut to `width` characters.
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn header(out: &mut String, ambient: &AmbientView, painter: Painter) {
    let _ = writeln!(out, "=== LE MANS 24H SIMULATION ===");
    let weather = if ambient.weather.is_raining() {
        painter.paint(BLUE, "RAIN / WET TRACK")
    } else {
        painter.paint(YELLOW, "SUNNY / DRY TRACK")
    };
    let _ = writeln!(
        out,
        "Weather: {weather}  Time: {}  Tick: {}",
        clock_label(ambient),
        ambient.tick
    );

    if ambient.safety_car_active {
        let stars = "*".repeat(72);
        let banner = format!(
            "{stars}\n   SAFETY CAR DEPLOYED  -  NO OVERTAKING  -  SLOW DOWN  -  SC IN LAP   \n{stars}"
        );
        let _ = writeln!(out, "\n{}\n", painter.paint(SC_BANNER, &banner));
    } else {
        let _ = writeln!(out, "\nStatus: GREEN FLAG\n");
    }
}

fn row(out: &mut String, position: usize, car: &VehicleView, leader: &VehicleView, painter: Painter) {
    let out_of_race = car.state.is_terminal();
    let base = if out_of_race { GRAY } else { RESET };

    let class_color = match (out_of_race, car.class) {
        (true, _) => GRAY,
        (false, CarClass::Hypercar) => RED,
        (false, CarClass::Lmp2) => BLUE,
        (false, CarClass::Gt3) => YELLOW,
    };
    let state_color = match car.state {
        RunState::Racing => GREEN,
        RunState::PitStop => MAGENTA,
        RunState::Crashed | RunState::Retired => RED,
    };
    let (tire, tire_color) = if out_of_race {
        ("---", GRAY)
    } else {
        let color = match car.compound {
            TireCompound::Soft => RED,
            TireCompound::Medium => YELLOW,
            TireCompound::Hard => WHITE,
            TireCompound::Wet => BLUE,
        };
        (tire_label(car.compound), color)
    };

    let _ = writeln!(
        out,
        "{} | {} | {} | {} | {} | {} | {} | {}",
        painter.paint(base, &format!("{:<4}", position + 1)),
        painter.paint(base, &format!("{:<w$}", fit(&car.team, TEAM_WIDTH), w = TEAM_WIDTH)),
        painter.paint(class_color, &format!("{:<10}", car.class.as_str())),
        painter.paint(base, &format!("{:<8}", car.laps)),
        painter.paint(base, &format!("{:<12}", gap_label(position, car, leader))),
        painter.paint(state_color, &format!("{:<10}", state_label(car.state))),
        painter.paint(tire_color, &format!("{tire:<10}")),
        painter.paint(base, &format!("{:.0}%", car.reliability.max(0.0))),
    );
}

/// Full standings screen for one snapshot, without the clear-screen prefix.
pub fn standings(snapshot: &RaceSnapshot, painter: Painter) -> String {
    let mut out = String::new();
    header(&mut out, &snapshot.ambient, painter);

    let _ = writeln!(
        out,
        "{:<4} | {:<w$} | {:<10} | {:<8} | {:<12} | {:<10} | {:<10} | {:<6}",
        "Pos",
        "Team",
        "Cat",
        "Laps",
        "Gap",
        "State",
        "Tire",
        "Rel%",
        w = TEAM_WIDTH
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    if let Some(leader) = snapshot.vehicles.first() {
        for (position, car) in snapshot.vehicles.iter().enumerate() {
            row(&mut out, position, car, leader, painter);
        }
    }

    if snapshot.finished {
        let _ = writeln!(out, "\nCHEQUERED FLAG");
    }
    out
}
