//! Constant-velocity integration
//!
//! Velocities are in distance per frame, so the step is normally
//! [`SIM_STEP`](crate::consts::SIM_STEP) (one frame).

use glam::Vec2;

/// Advance a position by `velocity * step`
#[inline]
pub fn integrate(position: Vec2, velocity: Vec2, step: f32) -> Vec2 {
    position + velocity * step
}

/// Clamp the center of an extent so `[center - half, center + half]` stays
/// inside `[min, max]`
#[inline]
pub fn clamp_extent(center: f32, half: f32, min: f32, max: f32) -> f32 {
    // A span taller than the bounds pins to the top
    if max - min <= half * 2.0 {
        return min + half;
    }
    center.clamp(min + half, max - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_one_frame() {
        let p = integrate(Vec2::new(450.0, 300.0), Vec2::new(-5.0, 2.5), 1.0);
        assert_eq!(p, Vec2::new(445.0, 302.5));
    }

    #[test]
    fn test_integrate_zero_velocity() {
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(integrate(p, Vec2::ZERO, 1.0), p);
    }

    #[test]
    fn test_clamp_extent() {
        assert_eq!(clamp_extent(10.0, 55.0, 0.0, 600.0), 55.0);
        assert_eq!(clamp_extent(590.0, 55.0, 0.0, 600.0), 545.0);
        assert_eq!(clamp_extent(300.0, 55.0, 0.0, 600.0), 300.0);
    }
}
