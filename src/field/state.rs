//! Particle pool state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::links::{Link, link_opacity};
use super::particle::Particle;
use crate::config::FieldConfig;

/// The backdrop particle pool, sized once at mount
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    link_distance: f32,
    link_max_opacity: f32,
    /// Frames stepped since mount
    frames: u64,
}

impl ParticleField {
    /// Seed a field covering `width` x `height`
    pub fn new(width: f32, height: f32, config: &FieldConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Vec2::new(width, height);
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, bounds, config))
            .collect();

        Self {
            particles,
            bounds,
            link_distance: config.link_distance,
            link_max_opacity: config.link_max_opacity,
            frames: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance every particle by one frame
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.step(bounds);
        }
        self.frames += 1;
    }

    /// Track a new viewport size. Particles keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Lines between every unordered pair closer than the link distance
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.pos.distance(b.pos);
                if distance < self.link_distance {
                    Some(Link {
                        from: a.pos,
                        to: b.pos,
                        opacity: link_opacity(distance, self.link_distance, self.link_max_opacity),
                    })
                } else {
                    None
                }
            })
        })
    }

    /// Replace the pool (tests and headless runs)
    pub fn with_particles(mut self, particles: Vec<Particle>) -> Self {
        self.particles = particles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field(width: f32, height: f32, seed: u64) -> ParticleField {
        ParticleField::new(width, height, &FieldConfig::default(), seed)
    }

    fn at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 1.0,
        }
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(field(800.0, 600.0, 1).particles().len(), 80);

        let config = FieldConfig {
            particle_count: 12,
            ..Default::default()
        };
        assert_eq!(ParticleField::new(800.0, 600.0, &config, 1).particles().len(), 12);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = field(800.0, 600.0, 42);
        let b = field(800.0, 600.0, 42);
        assert_eq!(a.particles(), b.particles());
        assert_ne!(a.particles(), field(800.0, 600.0, 43).particles());
    }

    #[test]
    fn test_step_counts_frames() {
        let mut f = field(800.0, 600.0, 3);
        let before = f.particles().to_vec();
        f.step();
        f.step();
        assert_eq!(f.frames(), 2);
        assert_ne!(before, f.particles());
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut f = field(1920.0, 1080.0, 5);
        let before = f.particles().to_vec();
        f.resize(400.0, 300.0);
        assert_eq!(f.bounds(), Vec2::new(400.0, 300.0));
        assert_eq!(before, f.particles());
    }

    #[test]
    fn test_shrink_then_particles_return() {
        let mut f = field(1920.0, 1080.0, 9);
        f.resize(400.0, 300.0);
        // Anything moving at least this fast on both axes is back within 40k frames
        let movers: Vec<usize> = f
            .particles()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.vel.x.abs() >= 0.05 && p.vel.y.abs() >= 0.05)
            .map(|(i, _)| i)
            .collect();
        assert!(!movers.is_empty());
        for _ in 0..40_000 {
            f.step();
        }
        for i in movers {
            let p = f.particles()[i];
            assert!(p.pos.x <= 400.0 + p.vel.x.abs() + 1e-3, "{:?}", p);
            assert!(p.pos.y <= 300.0 + p.vel.y.abs() + 1e-3, "{:?}", p);
        }
    }

    #[test]
    fn test_links_by_distance() {
        let f = field(800.0, 600.0, 1).with_particles(vec![
            at(0.0, 0.0),
            at(100.0, 0.0),
            at(0.0, 149.0),
            at(400.0, 400.0),
        ]);
        let links: Vec<Link> = f.links().collect();
        // (0,1) d=100, (0,2) d=149, (1,2) d~179 no, 3 is isolated
        assert_eq!(links.len(), 2);
        assert!((links[0].opacity - 0.15 * (1.0 - 100.0 / 150.0)).abs() < 1e-6);
        assert_eq!(links[0].from, Vec2::new(0.0, 0.0));
        assert_eq!(links[0].to, Vec2::new(100.0, 0.0));
        assert!(links[1].opacity > 0.0 && links[1].opacity < 0.01);
    }

    #[test]
    fn test_links_are_unordered_pairs() {
        let f = field(800.0, 600.0, 1).with_particles(vec![at(10.0, 10.0); 4]);
        // 4 coincident points: C(4,2) pairs, each at full opacity
        let links: Vec<Link> = f.links().collect();
        assert_eq!(links.len(), 6);
        assert!(links.iter().all(|l| l.opacity == 0.15));
    }

    #[test]
    fn test_link_at_exact_distance_excluded() {
        let f = field(800.0, 600.0, 1).with_particles(vec![at(0.0, 0.0), at(150.0, 0.0)]);
        assert_eq!(f.links().count(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Positions never drift more than one step outside the bounds
        #[test]
        fn particles_stay_in_bounds(
            seed in any::<u64>(),
            width in 50.0f32..2000.0,
            height in 50.0f32..2000.0,
            steps in 0usize..3000,
        ) {
            let mut f = field(width, height, seed);
            for _ in 0..steps {
                f.step();
                for p in f.particles() {
                    let slack = Vec2::new(p.vel.x.abs(), p.vel.y.abs()) + 1e-3;
                    prop_assert!(p.pos.x >= -slack.x && p.pos.x <= width + slack.x, "{:?}", p);
                    prop_assert!(p.pos.y >= -slack.y && p.pos.y <= height + slack.y, "{:?}", p);
                }
            }
        }

        /// Bouncing never changes speed
        #[test]
        fn speed_is_constant(seed in any::<u64>(), steps in 0usize..2000) {
            let mut f = field(300.0, 200.0, seed);
            let speeds: Vec<f32> = f.particles().iter().map(|p| p.vel.length()).collect();
            for _ in 0..steps {
                f.step();
            }
            for (p, s) in f.particles().iter().zip(speeds) {
                prop_assert!((p.vel.length() - s).abs() < 1e-6);
            }
        }
    }
}
