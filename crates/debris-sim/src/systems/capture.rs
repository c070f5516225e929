//! Capture resolver: fires a net at a record and rolls for success.
//!
//! `p = CAPTURE_BASE_SUCCESS_RATE - danger * CAPTURE_DANGER_PENALTY`, with
//! no floor: a danger above ~2.67 makes capture impossible rather than
//! erroring. One net is spent per resolved attempt, hit or miss.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use debris_core::components::{CaptureState, DebrisClass, DebrisSource, Rgba};
use debris_core::constants::*;
use debris_core::enums::StatusLevel;
use debris_core::events::AudioEvent;
use debris_core::types::Position;

use crate::feedback::Feedback;
use crate::registry::Registry;
use crate::resources::{ResourceState, ScoreState};
use crate::systems::particles;

const CAPTURE_EFFECT_PRIMARY: Rgba = Rgba::new(0, 255, 0, 1.0);
const CAPTURE_EFFECT_SECONDARY: Rgba = Rgba::new(255, 255, 0, 1.0);

/// Result of one capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureOutcome {
    /// Net hit; `points` includes any external bonus.
    Captured { id: u32, points: u32 },
    /// Net fired and missed.
    Missed { id: u32 },
    /// No live record with that id. Nothing changed.
    NoTarget,
    /// Record is already fading out. Nothing changed.
    AlreadyCaptured,
    /// Magazine empty. Nothing spent.
    NoAmmunition,
}

impl CaptureOutcome {
    pub fn success(&self) -> bool {
        matches!(self, CaptureOutcome::Captured { .. })
    }
}

/// Success probability for a given danger score.
pub fn success_probability(danger: f64) -> f64 {
    CAPTURE_BASE_SUCCESS_RATE - danger * CAPTURE_DANGER_PENALTY
}

/// Resolve a capture attempt against the first live record with `id`.
pub fn attempt(
    registry: &mut Registry,
    resources: &mut ResourceState,
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    feedback: &mut Feedback,
    id: u32,
) -> CaptureOutcome {
    let Some(entity) = registry.find(id) else {
        return CaptureOutcome::NoTarget;
    };

    let (class, position, already_captured, external_name) = {
        let Ok(mut query) = registry
            .world()
            .query_one::<(&DebrisClass, &Position, &CaptureState, &DebrisSource)>(entity)
        else {
            return CaptureOutcome::NoTarget;
        };
        let Some((class, position, capture, source)) = query.get() else {
            return CaptureOutcome::NoTarget;
        };
        (
            *class,
            *position,
            capture.captured,
            source.external().map(|neo| neo.name.clone()),
        )
    };

    if already_captured {
        return CaptureOutcome::AlreadyCaptured;
    }

    if resources.nets == 0 {
        feedback.status(StatusLevel::Warning, "NO NET AMMUNITION - reload required");
        feedback.cue(AudioEvent::NoAmmunition);
        return CaptureOutcome::NoAmmunition;
    }

    let probability = success_probability(class.danger);
    let success = rng.gen::<f64>() < probability;

    let outcome = if success {
        if let Ok(mut capture) = registry.world().get::<&mut CaptureState>(entity) {
            capture.captured = true;
        }

        let mut points = class.value;
        resources.credit_energy(CAPTURE_ENERGY_CREDIT);
        if external_name.is_some() {
            points += EXTERNAL_CAPTURE_BONUS;
            resources.credit_energy(EXTERNAL_CAPTURE_ENERGY_CREDIT);
            score.external_captures += 1;
        }
        score.score += points;
        score.captures += 1;

        let mut message = format!("CAPTURE SUCCESSFUL! +{} points", class.value);
        if let Some(name) = &external_name {
            message.push_str(&format!(" - {name}"));
        }
        feedback.status(StatusLevel::Success, message);
        feedback.cue(AudioEvent::CaptureSuccess {
            id,
            value: class.value,
        });

        let world = registry.world_mut();
        particles::spawn_burst(
            world,
            rng,
            position,
            CAPTURE_EFFECT_PRIMARY,
            CAPTURE_PARTICLES_PRIMARY,
        );
        particles::spawn_burst(
            world,
            rng,
            position,
            CAPTURE_EFFECT_SECONDARY,
            CAPTURE_PARTICLES_SECONDARY,
        );

        info!(id, points, score = score.score, "debris captured");
        CaptureOutcome::Captured { id, points }
    } else {
        let mut message = String::from("CAPTURE FAILED - target evaded");
        if let Some(name) = &external_name {
            message.push_str(&format!(" - {name} is too fast"));
        }
        feedback.status(StatusLevel::Warning, message);
        feedback.cue(AudioEvent::CaptureFailed { id });

        debug!(id, probability, "capture missed");
        CaptureOutcome::Missed { id }
    };

    resources.consume_net();
    score.attempts += 1;
    outcome
}

/// Closest live, uncaptured record strictly within `AIM_PICK_RADIUS` of
/// the aim point. Ties keep the earlier record.
pub fn pick_target(registry: &Registry, aim: DVec2) -> Option<u32> {
    let world = registry.world();
    let mut best: Option<(u32, f64)> = None;

    for &entity in registry.entities() {
        let Ok(mut query) =
            world.query_one::<(&debris_core::components::DebrisId, &Position, &CaptureState)>(entity)
        else {
            continue;
        };
        let Some((debris_id, position, capture)) = query.get() else {
            continue;
        };
        if capture.captured {
            continue;
        }
        let distance = position.distance_to(aim);
        let limit = best.map_or(AIM_PICK_RADIUS, |(_, d)| d);
        if distance < limit {
            best = Some((debris_id.0, distance));
        }
    }

    best.map(|(id, _)| id)
}
