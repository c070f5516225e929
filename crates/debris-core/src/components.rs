//! ECS components for hecs entities.
//!
//! Components are plain data structs with (almost) no methods.
//! Game logic lives in systems, not components.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{DebrisCategory, SourceKind};
use crate::neo::NeoDescriptor;

/// Identity of a debris record. Not guaranteed unique across history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebrisId(pub u32);

/// RGBA color as used by the canvas (alpha in 0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Visual and scoring tuple. Immutable once the record exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebrisClass {
    pub color: Rgba,
    /// Visual/collision radius.
    pub size: f64,
    /// Normalized danger; drives capture difficulty and highlighting.
    pub danger: f64,
    /// Points awarded on capture.
    pub value: u32,
}

/// Cosmetic rotation (degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub rotation: f64,
    pub rotation_speed: f64,
}

/// Capture status. Once `captured` is set, `progress` only grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureState {
    pub captured: bool,
    /// Fade-out progress, 0.0 → 1.0.
    pub progress: f64,
}

/// Origin of a record, with the external payload when there is one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DebrisSource {
    Simulated { category: DebrisCategory },
    External { payload: NeoDescriptor },
}

impl DebrisSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            DebrisSource::Simulated { .. } => SourceKind::Simulated,
            DebrisSource::External { .. } => SourceKind::External,
        }
    }

    pub fn external(&self) -> Option<&NeoDescriptor> {
        match self {
            DebrisSource::External { payload } => Some(payload),
            DebrisSource::Simulated { .. } => None,
        }
    }

    /// Whether the external payload flags this object as potentially hazardous.
    pub fn is_hazardous(&self) -> bool {
        self.external().is_some_and(|neo| neo.hazardous)
    }
}

/// Marks an entity as a tracked debris record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris;

/// Short-lived visual particle (capture effects).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life, 1.0 → 0.0. Doubles as draw alpha.
    pub life: f64,
    pub decay: f64,
    pub color: Rgba,
    pub size: f64,
}
