//! Vector reflection math
//!
//! Pure functions used by the paddle bounce. Everything here is NaN-safe:
//! degenerate (zero-length) vectors fall back to an explicit direction.

use glam::Vec2;

/// Vectors shorter than this are treated as zero
pub const MIN_VECTOR_LENGTH: f32 = 1e-6;

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Steer a reflected vector toward the side of the paddle that was hit.
///
/// `offset` is the normalized hit position in [-1, 1]. The y term uses the
/// already-deflected x component.
#[inline]
pub fn deflect(reflected: Vec2, offset: f32, factor: f32) -> Vec2 {
    let x = reflected.x + offset * factor * reflected.y.abs();
    let y = reflected.y - offset * factor * x.abs();
    Vec2::new(x, y)
}

/// Rescale `v` to `speed`, or `None` if `v` has no usable direction
#[inline]
pub fn rescale(v: Vec2, speed: f32) -> Option<Vec2> {
    if v.length() < MIN_VECTOR_LENGTH || !v.is_finite() {
        return None;
    }
    v.try_normalize().map(|dir| dir * speed)
}

/// Default diagonal velocity with the given magnitude
#[inline]
pub fn default_velocity(speed: f32) -> Vec2 {
    Vec2::ONE.normalize() * speed
}

/// Full paddle rebound: reflect about `normal`, deflect by the hit offset,
/// then restore the incoming speed.
///
/// A stalled ball (or a reflection that cancels out) leaves along `-normal`
/// at `fallback_speed`, back into the arena.
pub fn paddle_rebound(
    velocity: Vec2,
    normal: Vec2,
    offset: f32,
    factor: f32,
    fallback_speed: f32,
) -> Vec2 {
    let speed = velocity.length();
    if speed < MIN_VECTOR_LENGTH || !speed.is_finite() {
        return -normal * fallback_speed;
    }

    let reflected = deflect(reflect_velocity(velocity, normal), offset, factor);
    rescale(reflected, speed).unwrap_or(-normal * speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits the rim at angle 0 (outward normal +x)
        let reflected = reflect_velocity(Vec2::new(3.0, 0.0), Vec2::X);
        assert!((reflected.x + 3.0).abs() < 1e-6);
        assert!(reflected.y.abs() < 1e-6);
    }

    #[test]
    fn test_centered_hit_has_no_deflection() {
        let v = Vec2::new(-2.0, 1.5);
        assert_eq!(deflect(v, 0.0, 0.4), v);
    }

    #[test]
    fn test_edge_hit_steers_rebound() {
        let left = deflect(Vec2::new(-3.0, 1.0), -1.0, 0.4);
        let right = deflect(Vec2::new(-3.0, 1.0), 1.0, 0.4);
        assert!(left.x < right.x);
        assert!(left.y > right.y);
    }

    #[test]
    fn test_rescale_zero_vector() {
        assert!(rescale(Vec2::ZERO, 5.0).is_none());
        let v = rescale(Vec2::new(0.0, 2.0), 5.0).unwrap();
        assert!((v.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_stalled_ball_rebounds_inward() {
        let v = paddle_rebound(Vec2::ZERO, Vec2::X, 0.0, 0.4, 3.0);
        assert!(v.is_finite());
        assert!((v - Vec2::new(-3.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_default_velocity_magnitude() {
        let v = default_velocity(3.0);
        assert!((v.length() - 3.0).abs() < 1e-5);
        assert!((v.x - v.y).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_reflection_preserves_speed(
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            theta in -3.14f32..3.14,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let r = reflect_velocity(v, n);
            prop_assert!((r.length() - v.length()).abs() < 1e-3);
        }

        #[test]
        fn prop_rebound_preserves_speed(
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            theta in -3.14f32..3.14,
            offset in -1.0f32..=1.0,
        ) {
            let v = Vec2::new(vx, vy);
            prop_assume!(v.length() > 0.01);
            let n = Vec2::new(theta.cos(), theta.sin());
            let out = paddle_rebound(v, n, offset, 0.4, 3.0);
            prop_assert!(out.is_finite());
            prop_assert!((out.length() - v.length()).abs() < 1e-3 * v.length().max(1.0));
        }
    }
}
