//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::components::{DebrisClass, Rgba};

/// Fixed catalogue of simulated debris categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebrisCategory {
    SmallFragment,
    MediumFragment,
    /// Large fragment, the most dangerous simulated category.
    LargeFragment,
    /// Remains of a decommissioned satellite.
    SatelliteRemnant,
}

impl DebrisCategory {
    pub const ALL: [DebrisCategory; 4] = [
        DebrisCategory::SmallFragment,
        DebrisCategory::MediumFragment,
        DebrisCategory::LargeFragment,
        DebrisCategory::SatelliteRemnant,
    ];

    /// Visual and scoring tuple for this category.
    pub fn class(self) -> DebrisClass {
        match self {
            DebrisCategory::SmallFragment => DebrisClass {
                color: Rgba::new(250, 45, 13, 0.9),
                size: 2.0,
                danger: 0.3,
                value: 100,
            },
            DebrisCategory::MediumFragment => DebrisClass {
                color: Rgba::new(255, 100, 0, 0.9),
                size: 4.0,
                danger: 0.6,
                value: 200,
            },
            DebrisCategory::LargeFragment => DebrisClass {
                color: Rgba::new(255, 0, 0, 0.9),
                size: 6.0,
                danger: 0.9,
                value: 500,
            },
            DebrisCategory::SatelliteRemnant => DebrisClass {
                color: Rgba::new(150, 150, 255, 0.9),
                size: 3.0,
                danger: 0.2,
                value: 150,
            },
        }
    }
}

/// Where a debris record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    #[default]
    Simulated,
    External,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}

/// Which presentation the host should favour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Fixed 2D canvas view.
    #[default]
    Flat,
    /// 3D orbital mirror with a free camera.
    Orbital,
}

/// Severity of a status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    #[default]
    Info,
    Success,
    Warning,
    Critical,
}

/// Energy readout color band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyBand {
    #[default]
    Nominal,
    Warning,
    Critical,
}

/// Which data the live registry currently mixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[default]
    Simulation,
    ExternalAndSimulation,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::Simulation => "Simulation Data",
            DataSource::ExternalAndSimulation => "NEO + Simulation Data",
        }
    }
}
