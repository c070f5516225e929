//! Core types and definitions for the debris capture simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, and the
//! near-earth-object descriptors fed in from the external data source.
//! It has no dependency on any runtime, network, or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod neo;
pub mod state;
pub mod types;
