//! lobby — console demo for the rust_lift elevator engine.
//!
//! Drives three buildings from an embedded JSON configuration and an embedded
//! CSV call script, printing every dispatch, arrival ding, and cleared call,
//! then a final floor/car table.  Swap the embedded strings for file paths to
//! script your own scenarios.

use std::io::Cursor;

use anyhow::{Context, Result};
use serde::Deserialize;

use lift_core::{Cadence, CarId, FloorId, load_buildings_json_reader};
use lift_motion::ArrivalCue;
use lift_sim::{Building, BuildingBuilder, BuildingObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SLICE_SECS: f64 = 0.5; // outer tick driving advance_time
const RUN_SECS:   f64 = 60.0;

const BUILDINGS_JSON: &str = r#"[
  { "id": "Building 1", "numberOfFloors": 10, "elevatorIds": ["A", "B", "C"] },
  { "id": "Building 2", "numberOfFloors": 5,  "elevatorIds": ["D", "E"] },
  { "id": "Building 3", "numberOfFloors": 8,  "elevatorIds": ["F", "G", "H"] }
]"#;

// ── Call script CSV ───────────────────────────────────────────────────────────

// One row per call: fire `floor` in `building` once `at_secs` is reached.
const CALL_SCRIPT_CSV: &str = "\
at_secs,building,floor\n\
0.0,Building 1,9\n\
0.5,Building 1,4\n\
1.0,Building 2,4\n\
2.0,Building 1,9\n\
3.5,Building 3,7\n\
4.0,Building 2,1\n\
8.0,Building 1,0\n\
12.0,Building 3,2\n\
";

#[derive(Deserialize)]
struct CallRecord {
    at_secs:  f64,
    building: String,
    floor:    u16,
}

fn load_call_script(csv_text: &str) -> Result<Vec<CallRecord>> {
    let mut reader = csv::Reader::from_reader(Cursor::new(csv_text));
    let mut calls: Vec<CallRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("parsing call script")?;
    calls.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
    Ok(calls)
}

// ── Console reporting ─────────────────────────────────────────────────────────

/// Prints one line per dispatch and per cleared call.
struct ConsoleReporter {
    building: String,
}

impl BuildingObserver for ConsoleReporter {
    fn on_call(&mut self, floor: FloorId, car: CarId, eta_secs: f64) {
        println!(
            "[{}] call floor {} → car {}, eta {:.1}s",
            self.building, floor.0, car.0, eta_secs
        );
    }

    fn on_call_cleared(&mut self, floor: FloorId, car: CarId) {
        println!("[{}] floor {} served by car {}", self.building, floor.0, car.0);
    }
}

/// Arrival cue that prints a "ding" per stop-begin.
struct ConsoleCue {
    building: String,
}

impl ArrivalCue for ConsoleCue {
    fn ding(&mut self, car: CarId, floor: FloorId) {
        println!("[{}] ding — car {} at floor {}", self.building, car.0, floor.0);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== lobby — rust_lift elevator engine ===");
    println!();

    let configs = load_buildings_json_reader(Cursor::new(BUILDINGS_JSON))
        .context("loading building configuration")?;
    let calls = load_call_script(CALL_SCRIPT_CSV)?;
    println!("Loaded {} buildings, {} scripted calls", configs.len(), calls.len());
    println!();

    let mut buildings: Vec<Building> = Vec::with_capacity(configs.len());
    let mut reporters: Vec<ConsoleReporter> = Vec::with_capacity(configs.len());
    for config in configs {
        let cue = ConsoleCue { building: config.id.clone() };
        reporters.push(ConsoleReporter { building: config.id.clone() });
        let building = BuildingBuilder::new(config)
            .cadence(Cadence::default())
            .cue(Box::new(cue))
            .build()?;
        buildings.push(building);
    }

    // Outer loop: fire due calls, then advance every building one slice.
    let mut next_call = 0;
    let mut now = 0.0;
    while now < RUN_SECS {
        while next_call < calls.len() && calls[next_call].at_secs <= now {
            let record = &calls[next_call];
            next_call += 1;
            let Some(i) = buildings.iter().position(|b| b.id() == record.building) else {
                println!("(skipping call for unknown building {:?})", record.building);
                continue;
            };
            buildings[i].handle_call_observed(FloorId(record.floor), &mut reporters[i])?;
        }

        for (building, reporter) in buildings.iter_mut().zip(reporters.iter_mut()) {
            building.advance_time_observed(SLICE_SECS, reporter);
        }
        now += SLICE_SECS;
    }

    // Final state table.
    println!();
    for building in &buildings {
        println!("{}:", building.id());
        for car in building.cars() {
            println!(
                "  car {:<2} floor {:>2}  pos {:>5.2}  {:<8} queue {:?}",
                car.name(),
                car.current_floor().0,
                car.exact_position(),
                car.motion_state().to_string(),
                car.targets().iter().map(|f| f.0).collect::<Vec<_>>(),
            );
        }
        let armed: Vec<String> = building
            .floor_snapshots()
            .iter()
            .filter(|f| f.is_calling)
            .map(|f| format!("{} ({:.1}s)", f.number.0, f.timer_secs))
            .collect();
        if armed.is_empty() {
            println!("  no calls outstanding");
        } else {
            println!("  calling floors: {}", armed.join(", "));
        }
    }

    Ok(())
}
