//! Near-earth-object descriptors supplied by the external data source.
//!
//! The feed adapter produces these; the engine maps each one into an
//! externally sourced debris record.

use serde::{Deserialize, Serialize};

/// One external object as reported by the feed (or the fallback list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoDescriptor {
    /// Feed-side object id; reused as the debris id.
    pub id: u32,
    pub name: String,
    /// Estimated maximum diameter in meters.
    pub diameter_m: f64,
    /// Relative velocity at closest approach (km/s).
    pub velocity_km_s: f64,
    /// Miss distance at closest approach (km).
    pub miss_distance_km: f64,
    pub hazardous: bool,
    #[serde(default)]
    pub approach_date: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Resolved result of one feed request. The core never sees an error:
/// a failed fetch arrives as `Fallback` with the archived list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "objects")]
pub enum FeedOutcome {
    Live(Vec<NeoDescriptor>),
    Fallback(Vec<NeoDescriptor>),
}

impl FeedOutcome {
    pub fn descriptors(&self) -> &[NeoDescriptor] {
        match self {
            FeedOutcome::Live(objects) | FeedOutcome::Fallback(objects) => objects,
        }
    }

    pub fn into_descriptors(self) -> Vec<NeoDescriptor> {
        match self {
            FeedOutcome::Live(objects) | FeedOutcome::Fallback(objects) => objects,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FeedOutcome::Fallback(_))
    }
}
