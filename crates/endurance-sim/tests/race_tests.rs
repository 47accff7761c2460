//! End-to-end race runs through the public API.

use endurance_sim::endurance_core::enums::RunState;
use endurance_sim::endurance_core::events::RaceEventKind;
use endurance_sim::endurance_core::roster::default_entries;
use endurance_sim::{RaceController, SimConfig};

#[test]
fn full_race_reaches_chequered_flag() {
    let mut race = RaceController::new(SimConfig::default(), &default_entries()).unwrap();
    let mut ticks = 0;
    let mut last = race.snapshot();
    while !race.is_finished() {
        last = race.step();
        ticks += 1;
        assert!(ticks <= 3000, "race never finished");
    }

    assert!(last.finished);
    // 24h at 40s per tick.
    assert_eq!(ticks, 2160);
    assert_eq!(last.ambient.tick, 2160);

    let leader = &last.vehicles[0];
    assert!(leader.laps > 0);
    assert!(leader.best_lap_time.is_some());
    assert!(last.vehicles.iter().all(|v| v.laps <= leader.laps));
}

#[test]
fn every_car_accounted_for() {
    let roster = default_entries();
    let mut race = RaceController::new(
        SimConfig {
            seed: 77,
            ..Default::default()
        },
        &roster,
    )
    .unwrap();

    let mut retired_events = 0;
    let mut crashed_events = 0;
    for _ in 0..1500 {
        for event in race.step().events {
            match event.kind {
                RaceEventKind::Retired { .. } => retired_events += 1,
                RaceEventKind::Crashed { .. } => crashed_events += 1,
                _ => {}
            }
        }
    }

    let snapshot = race.snapshot();
    assert_eq!(snapshot.vehicles.len(), roster.len());
    let mut ids: Vec<u32> = snapshot.vehicles.iter().map(|v| v.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=roster.len() as u32).collect::<Vec<_>>());

    let count = |state| snapshot.vehicles.iter().filter(|v| v.state == state).count();
    assert_eq!(count(RunState::Retired), retired_events);
    assert_eq!(count(RunState::Crashed), crashed_events);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut race = RaceController::new(SimConfig::default(), &default_entries()).unwrap();
    let snapshot = race.step();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["ambient"]["tick"], 1);
    assert_eq!(json["vehicles"].as_array().unwrap().len(), 42);
    assert_eq!(json["ambient"]["weather"], "Sunny");
}
