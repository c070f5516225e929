//! Capture burst particles. Cosmetic only; they share the registry world
//! but carry no `Debris` marker, so record queries never see them.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use debris_core::components::{Particle, Rgba};
use debris_core::constants::*;
use debris_core::types::{Position, Velocity};

/// Spawn `count` particles at `origin` with random velocity, decay and size.
pub fn spawn_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: Position,
    color: Rgba,
    count: usize,
) {
    for _ in 0..count {
        let velocity = Velocity::new(
            (rng.gen::<f64>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            (rng.gen::<f64>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
        );
        let particle = Particle {
            life: 1.0,
            decay: PARTICLE_MIN_DECAY + rng.gen::<f64>() * (PARTICLE_MAX_DECAY - PARTICLE_MIN_DECAY),
            color,
            size: PARTICLE_MIN_SIZE + rng.gen::<f64>() * (PARTICLE_MAX_SIZE - PARTICLE_MIN_SIZE),
        };
        world.spawn((origin, velocity, particle));
    }
}

/// Move and fade every particle; despawn the spent ones.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, particle)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Particle)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        particle.life -= particle.decay;
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for &entity in despawn_buffer.iter() {
        let _ = world.despawn(entity);
    }
}

pub fn count(world: &World) -> usize {
    world.query::<&Particle>().iter().count()
}
