//! Resource meter: passive energy drain and the backup auto-refill.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use debris_core::constants::*;
use debris_core::enums::StatusLevel;
use debris_core::events::AudioEvent;

use crate::feedback::Feedback;
use crate::resources::ResourceState;

/// Drain `amount` energy. Hitting the floor occasionally raises the
/// critical warning.
pub fn drain(
    resources: &mut ResourceState,
    rng: &mut ChaCha8Rng,
    feedback: &mut Feedback,
    amount: f64,
) {
    if resources.drain(amount) && rng.gen_bool(ENERGY_CRITICAL_WARNING_PROBABILITY) {
        feedback.status(StatusLevel::Critical, "ENERGY CRITICAL - systems failing");
        feedback.cue(AudioEvent::EnergyCritical);
    }
}

/// Sample the backup system. Returns true when a refill happened.
pub fn auto_refill(
    resources: &mut ResourceState,
    rng: &mut ChaCha8Rng,
    feedback: &mut Feedback,
) -> bool {
    if resources.energy >= REFILL_ENERGY_THRESHOLD || !rng.gen_bool(REFILL_PROBABILITY) {
        return false;
    }
    resources.refill();
    info!(
        energy = resources.energy,
        nets = resources.nets,
        "backup system refill"
    );
    feedback.status(
        StatusLevel::Success,
        "BACKUP SYSTEM ENGAGED - resources recharged",
    );
    feedback.cue(AudioEvent::ResourcesRefilled);
    true
}

/// Per-tick meter: drain first, then the refill sample.
pub fn run(resources: &mut ResourceState, rng: &mut ChaCha8Rng, feedback: &mut Feedback) {
    drain(resources, rng, feedback, ENERGY_DRAIN_PER_TICK);
    auto_refill(resources, rng, feedback);
}
