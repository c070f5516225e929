//! Motion and lifecycle system.
//!
//! Free records: position += velocity, rotation += spin, and a velocity
//! component flips sign when the position is outside `[0, extent]` on that
//! axis. Positions are not clamped, so a record overshoots the edge by up
//! to one step before it heads back.
//!
//! Captured records stop moving and advance their fade by a fixed amount
//! per tick; at 1.0 they are retired to the registry history.

use hecs::Entity;

use debris_core::components::{CaptureState, Debris, Spin};
use debris_core::constants::CAPTURE_PROGRESS_PER_TICK;
use debris_core::types::{Bounds, Position, Velocity};

use crate::registry::Registry;

/// Run one motion step. Uses a pre-allocated buffer for retired entities.
/// Returns the number of records retired this tick.
pub fn run(registry: &mut Registry, bounds: &Bounds, retire_buffer: &mut Vec<Entity>) -> usize {
    retire_buffer.clear();

    for (entity, (_debris, pos, vel, spin, capture)) in registry.world_mut().query_mut::<(
        &Debris,
        &mut Position,
        &mut Velocity,
        &mut Spin,
        &mut CaptureState,
    )>() {
        if capture.captured {
            capture.progress += CAPTURE_PROGRESS_PER_TICK;
            if capture.progress >= 1.0 {
                retire_buffer.push(entity);
            }
            continue;
        }

        step(pos, vel, spin, bounds);
    }

    registry.retire_all(retire_buffer)
}

/// Advance one free record by one tick.
pub fn step(pos: &mut Position, vel: &mut Velocity, spin: &mut Spin, bounds: &Bounds) {
    pos.x += vel.x;
    pos.y += vel.y;
    spin.rotation += spin.rotation_speed;

    if pos.x < 0.0 || pos.x > bounds.width {
        vel.x = -vel.x;
    }
    if pos.y < 0.0 || pos.y > bounds.height {
        vel.y = -vel.y;
    }
}
