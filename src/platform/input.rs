//! Pointer input
//!
//! Hosts may receive pointer events at any rate. The latch keeps only the
//! most recent aim so each tick consumes exactly one angle.

use glam::Vec2;

use crate::sim::TickInput;

/// Convert a pointer position to a paddle angle around `center`
///
/// Screen coordinates (y grows downward), matching the arena's canvas space,
/// so no axis flip is applied.
pub fn pointer_angle(pointer: Vec2, center: Vec2) -> f32 {
    let d = pointer - center;
    d.y.atan2(d.x)
}

/// Last-write-wins pointer latch
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    angle: Option<f32>,
    start: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position; non-finite positions are dropped
    pub fn pointer_moved(&mut self, pointer: Vec2, center: Vec2) {
        if !pointer.is_finite() {
            return;
        }
        self.set_angle(pointer_angle(pointer, center));
    }

    pub fn set_angle(&mut self, angle: f32) {
        if angle.is_finite() {
            self.angle = Some(angle);
        }
    }

    pub fn latest(&self) -> Option<f32> {
        self.angle
    }

    /// Request a (re)start on the next tick
    pub fn request_start(&mut self) {
        self.start = true;
    }

    /// Build the next tick's input; the start request is one-shot
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            paddle_angle: self.angle,
            start: std::mem::take(&mut self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_pointer_angle_screen_space() {
        let c = Vec2::new(300.0, 300.0);
        assert!((pointer_angle(Vec2::new(400.0, 300.0), c)).abs() < 1e-6);
        // Below the center on screen is +PI/2
        assert!((pointer_angle(Vec2::new(300.0, 400.0), c) - FRAC_PI_2).abs() < 1e-6);
        assert!((pointer_angle(Vec2::new(200.0, 300.0), c).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_latch_last_write_wins() {
        let mut latch = InputLatch::new();
        assert_eq!(latch.latest(), None);
        latch.set_angle(0.3);
        latch.set_angle(1.2);
        latch.set_angle(f32::NAN);
        assert_eq!(latch.latest(), Some(1.2));

        latch.pointer_moved(Vec2::new(f32::INFINITY, 0.0), Vec2::ZERO);
        assert_eq!(latch.latest(), Some(1.2));
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut latch = InputLatch::new();
        latch.request_start();
        latch.set_angle(0.5);
        let first = latch.take_tick_input();
        assert!(first.start);
        assert_eq!(first.paddle_angle, Some(0.5));

        let second = latch.take_tick_input();
        assert!(!second.start);
        assert_eq!(second.paddle_angle, Some(0.5));
    }
}
