//! Area scan: an energy-priced burst of forced detections plus a short
//! window in which every uncaptured record is highlighted.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use debris_core::constants::*;
use debris_core::enums::StatusLevel;
use debris_core::events::AudioEvent;
use debris_core::types::Bounds;

use crate::feedback::Feedback;
use crate::registry::Registry;
use crate::resources::ResourceState;
use crate::systems::detection;

#[derive(Debug, Clone, Default)]
pub struct ScanState {
    /// Seconds until the next scan is allowed.
    pub cooldown_secs: f64,
    /// Highlight window end (engine tick, exclusive).
    pub reveal_until_tick: u64,
    /// Engine ticks of pending forced detections.
    pub forced: Vec<u64>,
}

impl ScanState {
    pub fn revealing(&self, tick: u64) -> bool {
        tick < self.reveal_until_tick
    }

    pub fn ready(&self) -> bool {
        self.cooldown_secs <= 0.0
    }
}

/// Handle a scan request at engine tick `now`. Returns true if it fired.
pub fn request(
    scan: &mut ScanState,
    resources: &mut ResourceState,
    feedback: &mut Feedback,
    now: u64,
) -> bool {
    if !scan.ready() {
        feedback.status(
            StatusLevel::Warning,
            format!("Scanner cooling down: {}s", scan.cooldown_secs.ceil()),
        );
        return false;
    }
    if resources.energy < SCAN_ENERGY_COST {
        feedback.status(StatusLevel::Critical, "INSUFFICIENT ENERGY for scan");
        return false;
    }

    resources.drain(SCAN_ENERGY_COST);
    scan.cooldown_secs = SCAN_COOLDOWN_SECS;
    scan.reveal_until_tick = now + SCAN_REVEAL_TICKS;
    scan.forced
        .extend((0..SCAN_FORCED_DETECTIONS).map(|i| now + i * SCAN_DETECTION_SPACING_TICKS));

    feedback.status(StatusLevel::Info, "SCAN COMPLETE - all targets revealed");
    feedback.cue(AudioEvent::ScanComplete);
    true
}

/// Fire due forced detections. Each one still rolls and respects the cap.
pub fn run_detections(
    scan: &mut ScanState,
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    feedback: &mut Feedback,
    now: u64,
) {
    let due = scan.forced.iter().filter(|&&at| at <= now).count();
    if due == 0 {
        return;
    }
    scan.forced.retain(|&at| at > now);
    for _ in 0..due {
        if rng.gen_bool(SCAN_DETECTION_PROBABILITY) {
            if let Some(id) = detection::spawn_capped(registry, rng, bounds, feedback) {
                debug!(id, "scan detection");
            }
        }
    }
}

/// Count the cooldown down by one tick.
pub fn run_cooldown(scan: &mut ScanState, dt: f64) {
    if scan.cooldown_secs > 0.0 {
        scan.cooldown_secs = (scan.cooldown_secs - dt).max(0.0);
    }
}
