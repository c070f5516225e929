//! Detection generator: spontaneous simulated detections.
//!
//! One Bernoulli draw per tick; on success a new simulated record is
//! inserted unless the population cap is already reached. The cap only
//! gates this spawner (and scan-forced detections); external ingestion
//! bypasses it.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use debris_core::constants::{DETECTION_PROBABILITY, POPULATION_CAP};
use debris_core::events::AudioEvent;
use debris_core::types::Bounds;

use crate::feedback::Feedback;
use crate::registry::Registry;
use crate::world_setup;

/// Run the detection generator for one tick. Returns the spawned id, if any.
pub fn run(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    feedback: &mut Feedback,
) -> Option<u32> {
    if !rng.gen_bool(DETECTION_PROBABILITY) {
        return None;
    }
    spawn_capped(registry, rng, bounds, feedback)
}

/// Spawn one simulated record if the registry is below the population cap.
pub fn spawn_capped(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    feedback: &mut Feedback,
) -> Option<u32> {
    if registry.living_count() >= POPULATION_CAP {
        return None;
    }
    let id = world_setup::spawn_simulated(registry, rng, bounds);
    debug!(id, live = registry.living_count(), "debris detected");
    feedback.cue(AudioEvent::Detection { id });
    Some(id)
}
