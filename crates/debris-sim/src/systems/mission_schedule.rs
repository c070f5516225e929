//! Mission schedule: the opening seeding of simulated debris and the
//! automatic feed request that follows it.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use debris_core::constants::*;
use debris_core::events::AudioEvent;
use debris_core::types::Bounds;

use crate::feedback::Feedback;
use crate::registry::Registry;
use crate::world_setup;

/// A single scheduled seeding.
#[derive(Debug, Clone)]
pub struct SeedEntry {
    /// Mission tick at which this record spawns.
    pub spawn_at_tick: u64,
    pub spawned: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MissionSchedule {
    pub seeds: Vec<SeedEntry>,
    /// Mission tick of the automatic feed request, if still pending.
    pub feed_request_at: Option<u64>,
}

impl MissionSchedule {
    /// Three records one second apart, then the feed request.
    pub fn default_mission() -> Self {
        Self {
            seeds: (0..INITIAL_SEED_COUNT)
                .map(|i| SeedEntry {
                    spawn_at_tick: i * INITIAL_SEED_SPACING_TICKS,
                    spawned: false,
                })
                .collect(),
            feed_request_at: Some(INITIAL_FEED_REQUEST_TICK),
        }
    }

    pub fn pending_seeds(&self) -> usize {
        self.seeds.iter().filter(|s| !s.spawned).count()
    }
}

/// Spawn due seeds. Seeding ignores the population cap. Returns true when
/// the automatic feed request fell due this tick.
pub fn run(
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    feedback: &mut Feedback,
    schedule: &mut MissionSchedule,
    mission_tick: u64,
) -> bool {
    for seed in &mut schedule.seeds {
        if !seed.spawned && mission_tick >= seed.spawn_at_tick {
            let id = world_setup::spawn_simulated(registry, rng, bounds);
            debug!(id, tick = mission_tick, "seeded debris");
            feedback.cue(AudioEvent::Detection { id });
            seed.spawned = true;
        }
    }

    match schedule.feed_request_at {
        Some(at) if mission_tick >= at => {
            schedule.feed_request_at = None;
            true
        }
        _ => false,
    }
}
