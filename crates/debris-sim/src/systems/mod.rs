//! ECS systems that operate on the simulation each tick.
//!
//! Systems are plain functions over the registry (or its world) and the
//! engine-owned state they need. They do not own state themselves.

pub mod capture;
pub mod detection;
pub mod ingest;
pub mod mission_schedule;
pub mod motion;
pub mod particles;
pub mod resources;
pub mod scan;
pub mod snapshot;
pub mod telemetry;
