//! HUD telemetry: mission clock, synthetic orbit readout and registry
//! counters. Read-only.

use debris_core::components::DebrisSource;
use debris_core::constants::*;
use debris_core::enums::DataSource;
use debris_core::state::TelemetryView;
use debris_core::types::SimTime;

use crate::registry::Registry;

/// Build the telemetry block for the mission that started at `start_tick`.
pub fn build(registry: &Registry, time: &SimTime, start_tick: u64) -> TelemetryView {
    let secs = time.whole_secs_since(start_tick);
    let t = secs as f64;

    let mut external_objects = 0;
    let mut hazardous_objects = 0;
    for (_entity, source) in registry.world().query::<&DebrisSource>().iter() {
        if let Some(neo) = source.external() {
            external_objects += 1;
            if neo.hazardous {
                hazardous_objects += 1;
            }
        }
    }

    let total_objects = registry.living_count();
    let captured_objects = registry.history().len();

    TelemetryView {
        clock: mission_clock(secs),
        altitude_km: TELEMETRY_BASE_ALTITUDE_KM + (t / 20.0).sin() * 150.0 + (t / 45.0).cos() * 80.0,
        speed_km_s: TELEMETRY_BASE_SPEED_KM_S + (t / 15.0).sin() * 0.3,
        total_objects,
        external_objects,
        simulated_objects: total_objects - external_objects,
        hazardous_objects,
        captured_objects,
        efficiency_percent: efficiency(captured_objects, total_objects),
        data_source: if external_objects > 0 {
            DataSource::ExternalAndSimulation
        } else {
            DataSource::Simulation
        },
    }
}

/// `T+ hh:mm:ss`.
pub fn mission_clock(secs: u64) -> String {
    format!(
        "T+ {:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Share of captured records among captured plus live, rounded. 0 when empty.
pub fn efficiency(captured: usize, live: usize) -> u32 {
    let total = captured + live;
    if total == 0 {
        return 0;
    }
    (captured as f64 / total as f64 * 100.0).round() as u32
}
