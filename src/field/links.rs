//! Proximity links between particles

use glam::Vec2;

/// A line joining two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Line opacity for a pair `distance` apart.
///
/// Linear from `max_opacity` at 0 down to 0 at `max_distance`; zero at or
/// beyond `max_distance`.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32, max_opacity: f32) -> f32 {
    if distance.is_nan() || distance >= max_distance {
        return 0.0;
    }
    (max_opacity * (1.0 - distance / max_distance)).clamp(0.0, max_opacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_link_opacity_endpoints() {
        assert_eq!(link_opacity(0.0, 150.0, 0.15), 0.15);
        assert_eq!(link_opacity(150.0, 150.0, 0.15), 0.0);
        assert_eq!(link_opacity(400.0, 150.0, 0.15), 0.0);
        assert!((link_opacity(75.0, 150.0, 0.15) - 0.075).abs() < 1e-6);
    }

    #[test]
    fn test_link_opacity_nan_is_zero() {
        assert_eq!(link_opacity(f32::NAN, 150.0, 0.15), 0.0);
    }

    proptest! {
        #[test]
        fn link_opacity_stays_in_range(d in 0.0f32..1000.0) {
            let a = link_opacity(d, 150.0, 0.15);
            prop_assert!(a >= 0.0);
            prop_assert!(a <= 0.15);
            if d >= 150.0 {
                prop_assert_eq!(a, 0.0);
            }
        }

        #[test]
        fn link_opacity_decreases_with_distance(a in 0.0f32..150.0, b in 0.0f32..150.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(link_opacity(near, 150.0, 0.15) >= link_opacity(far, 150.0, 0.15));
        }
    }
}
