//! Backdrop rendering
//!
//! Draws the particle field through the `Surface` trait so the same pass
//! runs against a browser canvas or a recording double in tests.

pub mod color;

pub use color::Rgba;

use glam::Vec2;

use crate::config::FieldConfig;
use crate::field::ParticleField;

/// Particle and link color (light blue)
pub const PARTICLE_RGB: (u8, u8, u8) = (96, 165, 250);
/// Link stroke width
pub const LINK_WIDTH: f32 = 1.0;

/// A 2D drawing target
pub trait Surface {
    /// Current drawing size
    fn size(&self) -> Vec2;
    /// Resize the drawing buffer (clears it)
    fn set_size(&mut self, width: u32, height: u32);
    /// Clear the whole surface
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Colors derived from config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub particle: Rgba,
    pub link_width: f32,
}

impl FieldStyle {
    pub fn from_config(config: &FieldConfig) -> Self {
        let (r, g, b) = PARTICLE_RGB;
        Self {
            particle: Rgba::new(r, g, b, config.particle_opacity),
            link_width: LINK_WIDTH,
        }
    }

    /// Link color at a given opacity
    pub fn link(&self, opacity: f32) -> Rgba {
        self.particle.with_alpha(opacity)
    }
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self::from_config(&FieldConfig::default())
    }
}

/// Draw one frame: clear, particles, then links
pub fn draw_field<S: Surface + ?Sized>(surface: &mut S, field: &ParticleField, style: &FieldStyle) {
    surface.clear();

    for particle in field.particles() {
        surface.fill_circle(particle.pos, particle.radius, style.particle);
    }

    for link in field.links() {
        surface.stroke_line(link.from, link.to, style.link_width, style.link(link.opacity));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::field::Particle;

    /// Surface double that records draw calls
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: Vec2,
        pub ops: Vec<DrawOp>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Resize(u32, u32),
        Clear,
        Circle(Vec2, f32, Rgba),
        Line(Vec2, Vec2, f32, Rgba),
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                size: Vec2::new(width, height),
                ops: Vec::new(),
            }
        }

        pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Vec2 {
            self.size
        }

        fn set_size(&mut self, width: u32, height: u32) {
            self.size = Vec2::new(width as f32, height as f32);
            self.ops.push(DrawOp::Resize(width, height));
        }

        fn clear(&mut self) {
            self.ops.push(DrawOp::Clear);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.ops.push(DrawOp::Circle(center, radius, color));
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
            self.ops.push(DrawOp::Line(from, to, width, color));
        }
    }

    fn at(x: f32, y: f32, radius: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[test]
    fn test_draw_order() {
        let field = ParticleField::new(800.0, 600.0, &FieldConfig::default(), 1).with_particles(
            vec![at(10.0, 10.0, 1.5), at(40.0, 10.0, 2.5), at(700.0, 500.0, 1.0)],
        );
        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_field(&mut surface, &field, &FieldStyle::default());

        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(
            surface.ops[1],
            DrawOp::Circle(Vec2::new(10.0, 10.0), 1.5, Rgba::new(96, 165, 250, 0.5))
        );
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Circle(..))), 3);
        // Only the first two are close enough to link, drawn after all circles
        assert_eq!(surface.ops.len(), 5);
        match &surface.ops[4] {
            DrawOp::Line(from, to, width, color) => {
                assert_eq!(*from, Vec2::new(10.0, 10.0));
                assert_eq!(*to, Vec2::new(40.0, 10.0));
                assert_eq!(*width, 1.0);
                assert!((color.a - 0.12).abs() < 1e-6);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_full_pool_draws_every_particle() {
        let mut field = ParticleField::new(1024.0, 768.0, &FieldConfig::default(), 11);
        let mut surface = RecordingSurface::new(1024.0, 768.0);
        field.step();
        draw_field(&mut surface, &field, &FieldStyle::default());
        assert_eq!(surface.count(|op| *op == DrawOp::Clear), 1);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Circle(..))), 80);
        assert_eq!(
            surface.count(|op| matches!(op, DrawOp::Line(..))),
            field.links().count()
        );
    }

    #[test]
    fn test_link_colors_never_exceed_max() {
        let field = ParticleField::new(300.0, 300.0, &FieldConfig::default(), 2);
        let mut surface = RecordingSurface::new(300.0, 300.0);
        draw_field(&mut surface, &field, &FieldStyle::default());
        for op in &surface.ops {
            if let DrawOp::Line(_, _, _, color) = op {
                assert!(color.a > 0.0 && color.a <= 0.15);
                assert_eq!((color.r, color.g, color.b), PARTICLE_RGB);
            }
        }
    }
}
