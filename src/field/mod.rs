//! Particle field simulation
//!
//! The ambient backdrop: a fixed pool of drifting points joined by
//! proximity lines. Pure and seeded:
//! - No rendering or platform dependencies
//! - One `step` per displayed frame (no fixed timestep)
//! - Particle identity is its index in the pool

pub mod links;
pub mod particle;
pub mod state;

pub use links::{Link, link_opacity};
pub use particle::Particle;
pub use state::ParticleField;
