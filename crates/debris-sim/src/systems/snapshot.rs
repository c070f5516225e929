//! Snapshot system: reads the registry and engine state and builds a
//! complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use debris_core::components::*;
use debris_core::constants::{
    DANGEROUS_LIST_DANGER, FILTER_HIGHLIGHT_DANGER, HAZARD_SHAPE_DANGER,
};
use debris_core::enums::*;
use debris_core::events::{AudioEvent, StatusMessage};
use debris_core::state::*;
use debris_core::types::{Bounds, Position, SimTime};

use crate::registry::Registry;
use crate::resources::{ResourceState, ScoreState};
use crate::systems::scan::ScanState;
use crate::systems::telemetry;

const EXTERNAL_HAZARD_DRAW: Rgba = Rgba::new(255, 106, 0, 0.9);
const EXTERNAL_SAFE_DRAW: Rgba = Rgba::new(0, 170, 255, 0.9);

/// Everything the snapshot needs besides the registry.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub mission_start_tick: u64,
    pub phase: GamePhase,
    pub view_mode: ViewMode,
    pub bounds: Bounds,
    pub resources: &'a ResourceState,
    pub score: &'a ScoreState,
    pub scan: &'a ScanState,
    pub aiming: bool,
    pub filter_dangerous: bool,
    pub selected: Option<u32>,
}

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(
    registry: &Registry,
    ctx: &SnapshotContext<'_>,
    status: Vec<StatusMessage>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        view_mode: ctx.view_mode,
        bounds: ctx.bounds,
        debris: build_debris(registry, ctx),
        particles: build_particles(registry.world()),
        resources: build_resources(ctx.resources, ctx.scan),
        score: ScoreView {
            score: ctx.score.score,
            captures: ctx.score.captures,
            attempts: ctx.score.attempts,
            external_captures: ctx.score.external_captures,
        },
        telemetry: telemetry::build(registry, ctx.time, ctx.mission_start_tick),
        aiming: ctx.aiming,
        filter_dangerous: ctx.filter_dangerous,
        selected: ctx.selected,
        status,
        audio_events,
    }
}

/// Live records in registry order.
fn build_debris(registry: &Registry, ctx: &SnapshotContext<'_>) -> Vec<DebrisView> {
    let revealing = ctx.scan.revealing(ctx.time.tick);
    registry
        .records()
        .into_iter()
        .map(|record| debris_view(record, ctx, revealing))
        .collect()
}

/// Apply the draw and list rules to one record.
pub fn debris_view(
    record: DebrisRecord,
    ctx: &SnapshotContext<'_>,
    revealing: bool,
) -> DebrisView {
    let class = record.class;
    let capture = record.capture;
    let hazardous = record.source.is_hazardous();

    let color = if capture.captured {
        class.color.with_alpha(1.0 - capture.progress)
    } else {
        match record.source {
            DebrisSource::External { .. } if hazardous => EXTERNAL_HAZARD_DRAW,
            DebrisSource::External { .. } => EXTERNAL_SAFE_DRAW,
            DebrisSource::Simulated { .. } => class.color,
        }
    };

    let selected = ctx.selected == Some(record.id);
    let dangerous = class.danger > DANGEROUS_LIST_DANGER;
    let highlighted = selected
        || (ctx.filter_dangerous && class.danger > FILTER_HIGHLIGHT_DANGER)
        || (revealing && !capture.captured);

    let label = match record.source.external() {
        Some(neo) => [
            neo.name.clone(),
            format!("Vel: {:.2} km/s", neo.velocity_km_s),
        ],
        None => [
            format!("ID {}", record.id),
            format!("Risk: {}%", (class.danger * 100.0).round()),
        ],
    };

    DebrisView {
        id: record.id,
        position: record.position,
        size: class.size,
        rotation: record.spin.rotation,
        color,
        scale: 1.0 - capture.progress * 0.5,
        danger: class.danger,
        value: class.value,
        source: record.source.kind(),
        captured: capture.captured,
        capture_progress: capture.progress,
        hazard_shape: class.danger > HAZARD_SHAPE_DANGER || hazardous,
        glow: class.danger > DANGEROUS_LIST_DANGER || hazardous,
        dangerous,
        highlighted,
        selected,
        visible_in_list: !ctx.filter_dangerous || dangerous,
        label,
        external: record.source.external().cloned(),
    }
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: *pos,
            size: particle.size,
            color: particle.color,
            life: particle.life,
        })
        .collect()
}

fn build_resources(resources: &ResourceState, scan: &ScanState) -> ResourceView {
    ResourceView {
        energy: resources.energy,
        energy_display: resources.energy.max(0.0).floor() as u32,
        energy_band: resources.band(),
        nets: resources.nets,
        scan_cooldown_secs: scan.cooldown_secs,
    }
}
