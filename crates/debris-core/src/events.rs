//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::StatusLevel;

/// Audio cues for the host's sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// New debris detected.
    Detection { id: u32 },
    AimStart,
    CaptureSuccess { id: u32, value: u32 },
    CaptureFailed { id: u32 },
    /// Fire attempted with an empty net magazine.
    NoAmmunition,
    /// Click landed nowhere near a target.
    TargetNotFound,
    ScanComplete,
    EnergyCritical,
    ResourcesRefilled,
    FeedLoaded { count: usize },
    ListCleared,
}

/// One line for the HUD status bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    pub tick: u64,
}
