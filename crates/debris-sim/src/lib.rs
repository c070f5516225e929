//! Simulation engine for the debris capture game.
//!
//! Owns the hecs ECS world (through the object registry), runs systems at a
//! fixed tick rate, and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod feedback;
pub mod presentation;
pub mod registry;
pub mod resources;
pub mod systems;
pub mod world_setup;

pub use debris_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use presentation::PresentationPort;
pub use systems::capture::CaptureOutcome;
