//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ViewMode;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Capture ---
    /// Enter aim mode. Rejected when no nets are left.
    BeginAim,
    /// Leave aim mode without firing.
    CancelAim,
    /// Click while aiming: capture the closest live record near the point.
    FireAt { x: f64, y: f64 },
    /// Fire a net at a specific record.
    CaptureTarget { id: u32 },

    // --- Target list ---
    /// Select a record from the target list.
    SelectTarget { id: u32 },
    /// Toggle highlighting of dangerous records.
    ToggleDangerFilter,
    /// Drop captured records from the list.
    ClearCaptured,

    // --- Sensors ---
    /// Active scan: reveals targets and forces detections.
    Scan,
    /// Request a batch of external objects.
    FetchExternalData,

    // --- View ---
    SetViewMode { mode: ViewMode },
    /// Canvas was resized.
    Resize { width: f64, height: f64 },

    // --- Simulation control ---
    /// Set time scale for the scan cooldown clock (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    StartMission,
    Pause,
    /// Resume a paused simulation and reset the mission clock.
    Restart,
}

impl PlayerCommand {
    /// Keyboard shortcut mapping used by the hosts.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            ' ' | 'c' => Some(PlayerCommand::BeginAim),
            's' => Some(PlayerCommand::Scan),
            'f' => Some(PlayerCommand::ToggleDangerFilter),
            'n' => Some(PlayerCommand::FetchExternalData),
            '1' => Some(PlayerCommand::SetViewMode {
                mode: ViewMode::Orbital,
            }),
            '2' => Some(PlayerCommand::SetViewMode {
                mode: ViewMode::Flat,
            }),
            'r' => Some(PlayerCommand::Restart),
            'p' => Some(PlayerCommand::Pause),
            _ => None,
        }
    }
}
