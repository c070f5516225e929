//! Headless host for the debris capture simulation.
//!
//! Runs the engine on its own thread, resolves feed requests on short-lived
//! worker threads, and presents snapshots through a terminal presenter.

pub mod config;
pub mod game_loop;
pub mod presenter;
pub mod state;

pub use debris_core as core;
