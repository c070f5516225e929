//! Game state snapshot handed to the presentation layer each tick, plus the
//! whole-record view of debris.

use serde::{Deserialize, Serialize};

use crate::components::{CaptureState, DebrisClass, DebrisSource, Rgba, Spin};
use crate::enums::*;
use crate::events::{AudioEvent, StatusMessage};
use crate::neo::NeoDescriptor;
use crate::types::{Bounds, Position, SimTime, Velocity};

/// A complete debris record, assembled from its components.
///
/// Used for the capture history and anywhere a record leaves the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebrisRecord {
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
    pub class: DebrisClass,
    pub spin: Spin,
    pub capture: CaptureState,
    pub source: DebrisSource,
}

impl DebrisRecord {
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn is_external(&self) -> bool {
        self.kind() == SourceKind::External
    }
}

/// Complete game state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub view_mode: ViewMode,
    pub bounds: Bounds,
    /// Live records in registry (insertion) order.
    pub debris: Vec<DebrisView>,
    pub particles: Vec<ParticleView>,
    pub resources: ResourceView,
    pub score: ScoreView,
    pub telemetry: TelemetryView,
    pub aiming: bool,
    pub filter_dangerous: bool,
    pub selected: Option<u32>,
    /// Status lines raised during this tick (and any queued commands).
    pub status: Vec<StatusMessage>,
    pub audio_events: Vec<AudioEvent>,
}

/// A debris record as the canvas and target list need it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: u32,
    pub position: Position,
    pub size: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Draw color, already faded for captured records.
    pub color: Rgba,
    /// Draw scale; shrinks to 0.5 over the capture fade.
    pub scale: f64,
    pub danger: f64,
    pub value: u32,
    pub source: SourceKind,
    pub captured: bool,
    pub capture_progress: f64,
    /// Irregular outline instead of a disc.
    pub hazard_shape: bool,
    /// Red/orange glow stroke.
    pub glow: bool,
    /// Listed with the "dangerous" style; the only entries shown while filtering.
    pub dangerous: bool,
    /// Draw a detection box (selected, filtered, or revealed by a scan).
    pub highlighted: bool,
    pub selected: bool,
    pub visible_in_list: bool,
    /// Detection box caption, two lines.
    pub label: [String; 2],
    pub external: Option<NeoDescriptor>,
}

/// Capture-effect particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub size: f64,
    pub color: Rgba,
    /// Draw alpha.
    pub life: f64,
}

/// Energy and net magazine readout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceView {
    pub energy: f64,
    /// Integer percentage as displayed (floored, never negative).
    pub energy_display: u32,
    pub energy_band: EnergyBand,
    pub nets: u32,
    pub scan_cooldown_secs: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub captures: u32,
    pub attempts: u32,
    pub external_captures: u32,
}

/// HUD telemetry block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryView {
    /// Mission clock, `T+ hh:mm:ss`.
    pub clock: String,
    pub altitude_km: f64,
    pub speed_km_s: f64,
    pub total_objects: usize,
    pub external_objects: usize,
    pub simulated_objects: usize,
    pub hazardous_objects: usize,
    pub captured_objects: usize,
    pub efficiency_percent: u32,
    pub data_source: DataSource,
}
