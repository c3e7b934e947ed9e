//! The ball: kinematics and speed bookkeeping
//!
//! Velocity is stored "raw"; the global ball speed multiplier only scales
//! position integration.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::reflect::{default_velocity, rescale};

/// The ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Re-center the ball and launch it along a random diagonal.
    ///
    /// Each axis gets `±axis_speed * speed_multiplier`, so the magnitude is
    /// fixed and only the quadrant varies.
    pub fn reset<R: Rng>(&mut self, center: Vec2, axis_speed: f32, speed_multiplier: f32, rng: &mut R) {
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = center;
        self.vel = Vec2::new(sx, sy) * axis_speed * speed_multiplier;
    }

    /// Integrate one step
    #[inline]
    pub fn advance(&mut self, speed_multiplier: f32) {
        self.pos += self.vel * speed_multiplier;
    }

    /// Raw (pre-multiplier) speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Speed as actually travelled per step
    #[inline]
    pub fn effective_speed(&self, speed_multiplier: f32) -> f32 {
        self.speed() * speed_multiplier
    }

    /// Set raw speed, keeping direction; a stalled ball gets the default diagonal
    pub fn set_speed(&mut self, speed: f32) {
        self.vel = rescale(self.vel, speed).unwrap_or_else(|| default_velocity(speed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reset_is_diagonal_with_fixed_magnitude() {
        let mut rng = Pcg32::seed_from_u64(7);
        let center = Vec2::new(300.0, 300.0);
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        for _ in 0..16 {
            ball.reset(center, 3.0, 1.0, &mut rng);
            assert_eq!(ball.pos, center);
            assert_eq!(ball.vel.x.abs(), 3.0);
            assert_eq!(ball.vel.y.abs(), 3.0);
        }
    }

    #[test]
    fn test_reset_applies_speed_multiplier() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        ball.reset(Vec2::ZERO, 3.0, 0.5, &mut rng);
        assert!((ball.vel.x.abs() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_advance_uses_multiplier() {
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        ball.vel = Vec2::new(2.0, -1.0);
        ball.advance(1.5);
        assert_eq!(ball.pos, Vec2::new(3.0, -1.5));
        // Stored velocity is untouched
        assert_eq!(ball.vel, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_set_speed_keeps_direction() {
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        ball.vel = Vec2::new(3.0, 4.0);
        ball.set_speed(10.0);
        assert!((ball.vel - Vec2::new(6.0, 8.0)).length() < 1e-4);
    }

    #[test]
    fn test_set_speed_on_stalled_ball() {
        let mut ball = Ball::new(Vec2::ZERO, 10.0);
        ball.set_speed(3.0);
        assert!(ball.vel.is_finite());
        assert!((ball.speed() - 3.0).abs() < 1e-5);
    }
}
