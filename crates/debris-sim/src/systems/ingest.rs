//! External ingestion: maps a resolved feed onto staggered insertions.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use debris_core::constants::EXTERNAL_INSERT_SPACING_TICKS;
use debris_core::enums::StatusLevel;
use debris_core::events::AudioEvent;
use debris_core::neo::{FeedOutcome, NeoDescriptor};
use debris_core::types::Bounds;

use crate::feedback::Feedback;
use crate::registry::Registry;
use crate::world_setup;

/// Descriptors waiting for their insertion tick.
#[derive(Debug, Clone, Default)]
pub struct ExternalQueue {
    pending: VecDeque<(u64, NeoDescriptor)>,
}

impl ExternalQueue {
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Replace the live set with a freshly resolved feed.
///
/// Live records are dropped (history stays), then one insertion is queued
/// every `EXTERNAL_INSERT_SPACING_TICKS` in descriptor order, starting now.
/// Items still pending from an earlier feed keep their slots and interleave
/// by tick.
pub fn schedule(
    queue: &mut ExternalQueue,
    registry: &mut Registry,
    feedback: &mut Feedback,
    outcome: FeedOutcome,
    now: u64,
) {
    let dropped = registry.clear();
    let fallback = outcome.is_fallback();
    let descriptors = outcome.into_descriptors();
    let count = descriptors.len();

    for (i, neo) in descriptors.into_iter().enumerate() {
        queue
            .pending
            .push_back((now + i as u64 * EXTERNAL_INSERT_SPACING_TICKS, neo));
    }
    queue.pending.make_contiguous().sort_by_key(|(at, _)| *at);

    if fallback {
        feedback.status(
            StatusLevel::Warning,
            "NEO feed unavailable - using archived data",
        );
        feedback.status(
            StatusLevel::Info,
            format!("ARCHIVED NEO DATA LOADED - {count} objects detected"),
        );
    } else {
        feedback.status(
            StatusLevel::Success,
            format!("NEO DATA LOADED - {count} near-earth objects detected"),
        );
    }
    feedback.cue(AudioEvent::FeedLoaded { count });
    info!(count, fallback, dropped, "external feed scheduled");
}

/// Insert every queued descriptor whose slot has come.
pub fn run(
    queue: &mut ExternalQueue,
    registry: &mut Registry,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    now: u64,
) -> usize {
    let mut inserted = 0;
    while let Some((at, _)) = queue.pending.front() {
        if *at > now {
            break;
        }
        let Some((_, neo)) = queue.pending.pop_front() else {
            break;
        };
        let record = world_setup::external_record(rng, bounds, &neo);
        debug!(id = record.id, name = %neo.name, "external object inserted");
        registry.insert(record);
        inserted += 1;
    }
    inserted
}
