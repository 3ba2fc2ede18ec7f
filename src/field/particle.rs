//! A single backdrop particle

use glam::Vec2;
use rand::Rng;

use crate::config::FieldConfig;

/// A drifting point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per frame; magnitude never changes after spawn
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Spawn at a uniformly random position inside `bounds`
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &FieldConfig) -> Self {
        let pos = Vec2::new(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y);
        // (random - 0.5) * 2 * speed, uniform in [-speed, speed]
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * config.speed,
            (rng.random::<f32>() - 0.5) * 2.0 * config.speed,
        );
        let radius =
            config.radius_min + rng.random::<f32>() * (config.radius_max - config.radius_min);

        Self { pos, vel, radius }
    }

    /// Advance one frame, reflecting off the edges of `bounds`.
    ///
    /// The bounce happens after the edge is crossed, so a particle may sit
    /// up to one step outside. Velocity is pointed back toward the surface
    /// rather than blindly negated, so a particle left outside by a resize
    /// drifts back in instead of flickering in place.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;

        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > bounds.x {
            self.vel.x = -self.vel.x.abs();
        }

        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > bounds.y {
            self.vel.y = -self.vel.y.abs();
        }
    }
}
