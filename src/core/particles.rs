//! Ambient particle drift.
//!
//! A fixed pool of points rising at constant per-particle speeds. Particles
//! that pass the ceiling respawn at the floor with fresh x/z but keep their
//! velocity, so the field recycles the same set of "lanes" forever.

use super::config::{AnimationConfig, ParticleBounds, ParticleIntegration};
use super::constants::{PARTICLE_DRIFT_XZ, PARTICLE_RISE_MIN, PARTICLE_RISE_SPAN};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: ParticleBounds,
    integration: ParticleIntegration,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: &AnimationConfig, mut rng: StdRng) -> Self {
        let b = config.particle_bounds;
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * b.width,
                    (rng.gen::<f32>() - 0.5) * b.height,
                    (rng.gen::<f32>() - 0.5) * b.depth + b.depth_offset,
                ),
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT_XZ,
                    rng.gen::<f32>() * PARTICLE_RISE_SPAN + PARTICLE_RISE_MIN,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT_XZ,
                ),
            })
            .collect();
        Self::from_particles(config, particles, rng)
    }

    /// Build a field from explicit particles (count is taken from `particles`).
    pub fn from_particles(config: &AnimationConfig, particles: Vec<Particle>, rng: StdRng) -> Self {
        Self {
            particles,
            bounds: config.particle_bounds,
            integration: config.particle_integration,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame. `delta_secs` only matters for
    /// [`ParticleIntegration::DeltaScaled`].
    pub fn step(&mut self, delta_secs: f32) {
        let scale = match self.integration {
            ParticleIntegration::PerFrame => 1.0,
            ParticleIntegration::DeltaScaled { reference_hz } => delta_secs.max(0.0) * reference_hz,
        };
        let b = self.bounds;
        let mut resets = 0usize;
        for p in &mut self.particles {
            p.position += p.velocity * scale;
            if p.position.y > b.ceiling_y {
                p.position.y = b.floor_y;
                p.position.x = (self.rng.gen::<f32>() - 0.5) * b.width;
                p.position.z = (self.rng.gen::<f32>() - 0.5) * b.depth + b.depth_offset;
                resets += 1;
            }
        }
        if resets > 0 {
            log::trace!("[particles] {} respawned at floor", resets);
        }
    }
}
