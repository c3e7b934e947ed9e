//! The player's paddle on the arena rim
//!
//! The angle is written by input once per tick; the half-width is derived
//! from the paddle length, the current size multiplier and the arena radius.

use serde::{Deserialize, Serialize};

use super::arc::{ArcSpan, clamp_half_width};
use crate::normalize_angle;

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Current angle (radians, center of paddle arc)
    pub angle: f32,
    /// Angular half-width (radians)
    pub half_width: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            angle: 0.0,
            half_width: half_width_for(crate::consts::PADDLE_HEIGHT, 1.0, crate::consts::ARENA_RADIUS),
        }
    }
}

impl Paddle {
    pub fn new(paddle_height: f32, size_multiplier: f32, arena_radius: f32) -> Self {
        Self {
            angle: 0.0,
            half_width: half_width_for(paddle_height, size_multiplier, arena_radius),
        }
    }

    /// Set angle from input (last write wins, no smoothing); non-finite input is ignored
    pub fn set_angle(&mut self, angle: f32) {
        if angle.is_finite() {
            self.angle = normalize_angle(angle);
        }
    }

    /// Recompute the half-width after the size multiplier changed
    pub fn resize(&mut self, paddle_height: f32, size_multiplier: f32, arena_radius: f32) {
        self.half_width = half_width_for(paddle_height, size_multiplier, arena_radius);
    }

    /// The paddle as an angular span for collision checks
    pub fn as_span(&self) -> ArcSpan {
        ArcSpan::new(self.angle, self.half_width)
    }
}

/// `atan(height * multiplier / (2 * radius))`, clamped to (0, π)
pub fn half_width_for(paddle_height: f32, size_multiplier: f32, arena_radius: f32) -> f32 {
    clamp_half_width((paddle_height * size_multiplier / (2.0 * arena_radius)).atan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arc::MAX_HALF_WIDTH;

    #[test]
    fn test_half_width_from_geometry() {
        let hw = half_width_for(60.0, 1.0, 250.0);
        assert!((hw - (60.0_f32 / 500.0).atan()).abs() < 1e-6);
    }

    #[test]
    fn test_size_multiplier_widens_paddle() {
        let base = half_width_for(60.0, 1.0, 250.0);
        let wide = half_width_for(60.0, 1.5, 250.0);
        assert!(wide > base);
    }

    #[test]
    fn test_degenerate_geometry_is_clamped() {
        assert!(half_width_for(60.0, 1.0, 0.0) <= MAX_HALF_WIDTH);
        assert!(half_width_for(60.0, f32::INFINITY, 250.0) <= MAX_HALF_WIDTH);
    }

    #[test]
    fn test_set_angle_ignores_nan() {
        let mut paddle = Paddle::default();
        paddle.set_angle(1.0);
        paddle.set_angle(f32::NAN);
        assert!((paddle.angle - 1.0).abs() < 1e-6);
    }
}
