//! Record factories for populating the registry.
//!
//! Builds simulated debris from the fixed category table and maps external
//! near-earth-object descriptors onto debris records.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use debris_core::components::*;
use debris_core::constants::*;
use debris_core::enums::DebrisCategory;
use debris_core::neo::NeoDescriptor;
use debris_core::state::DebrisRecord;
use debris_core::types::{Bounds, Position, Velocity};

use crate::registry::Registry;

/// Hazardous external objects.
const EXTERNAL_HAZARD_COLOR: Rgba = Rgba::new(255, 50, 50, 0.9);
/// Non-hazardous external objects.
const EXTERNAL_SAFE_COLOR: Rgba = Rgba::new(100, 150, 255, 0.9);

/// Build a simulated record with a uniformly chosen category, anywhere on
/// the canvas.
pub fn simulated_record(rng: &mut ChaCha8Rng, bounds: &Bounds) -> DebrisRecord {
    let category = DebrisCategory::ALL[rng.gen_range(0..DebrisCategory::ALL.len())];
    let id = rng.gen_range(0..SIMULATED_ID_RANGE);
    let position = Position::new(
        rng.gen::<f64>() * bounds.width,
        rng.gen::<f64>() * bounds.height,
    );
    let velocity = Velocity::new(
        symmetric(rng, SIMULATED_MAX_SPEED),
        symmetric(rng, SIMULATED_MAX_SPEED),
    );
    let spin = Spin {
        rotation: rng.gen::<f64>() * 360.0,
        rotation_speed: symmetric(rng, SIMULATED_MAX_SPIN),
    };

    DebrisRecord {
        id,
        position,
        velocity,
        class: category.class(),
        spin,
        capture: CaptureState::default(),
        source: DebrisSource::Simulated { category },
    }
}

/// Map an external descriptor onto a debris record.
///
/// Size follows the diameter, speed and spin follow the relative velocity,
/// and the hazardous flag decides the danger/value band.
pub fn external_record(
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    neo: &NeoDescriptor,
) -> DebrisRecord {
    let size = external_size(neo.diameter_m);
    let position = Position::new(
        spread(rng, bounds.width, EXTERNAL_SPAWN_MARGIN),
        spread(rng, bounds.height, EXTERNAL_SPAWN_MARGIN),
    );
    let speed_factor = 1.0 + neo.velocity_km_s * 0.1;
    let velocity = Velocity::new(
        (rng.gen::<f64>() - 0.5) * speed_factor,
        (rng.gen::<f64>() - 0.5) * speed_factor,
    );

    let class = if neo.hazardous {
        DebrisClass {
            color: EXTERNAL_HAZARD_COLOR,
            size,
            danger: 0.8 + rng.gen::<f64>() * 0.2,
            value: 600 + (rng.gen::<f64>() * 200.0).floor() as u32,
        }
    } else {
        DebrisClass {
            color: EXTERNAL_SAFE_COLOR,
            size,
            danger: 0.2 + rng.gen::<f64>() * 0.3,
            value: 200 + (rng.gen::<f64>() * 100.0).floor() as u32,
        }
    };

    let spin = Spin {
        rotation: rng.gen::<f64>() * 360.0,
        rotation_speed: (rng.gen::<f64>() - 0.5) * (2.0 + neo.velocity_km_s * 0.1),
    };

    DebrisRecord {
        id: neo.id,
        position,
        velocity,
        class,
        spin,
        capture: CaptureState::default(),
        source: DebrisSource::External {
            payload: neo.clone(),
        },
    }
}

/// Visual size for an external object: diameter scaled down, clamped.
pub fn external_size(diameter_m: f64) -> f64 {
    (diameter_m / EXTERNAL_DIAMETER_PER_SIZE).clamp(EXTERNAL_MIN_SIZE, EXTERNAL_MAX_SIZE)
}

/// Create and insert a simulated record. Returns its id.
pub fn spawn_simulated(registry: &mut Registry, rng: &mut ChaCha8Rng, bounds: &Bounds) -> u32 {
    let record = simulated_record(rng, bounds);
    let id = record.id;
    registry.insert(record);
    id
}

/// Uniform in `[-max, max)`.
fn symmetric(rng: &mut ChaCha8Rng, max: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * 2.0 * max
}

/// Uniform in `[margin, extent - margin)`, or the whole extent when the
/// canvas is too small to keep the margin.
fn spread(rng: &mut ChaCha8Rng, extent: f64, margin: f64) -> f64 {
    let inner = extent - 2.0 * margin;
    if inner > 0.0 {
        margin + rng.gen::<f64>() * inner
    } else {
        rng.gen::<f64>() * extent.max(0.0)
    }
}
