//! Rim Pong - A circular arena paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, collisions, power-ups, game state)
//! - `tuning`: Data-driven game balance and device profiles
//! - `platform`: Input normalization for the host (pointer → paddle angle)
//! - `audio`: Feedback routing from simulation events to a sound sink
//! - `settings`: Player preferences

pub mod audio;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, FeedbackError};
pub use settings::Settings;
pub use tuning::{DeviceClass, DeviceProfile, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Square play-field edge; the arena is centered in it
    pub const ARENA_SIZE: f32 = 600.0;
    pub const ARENA_RADIUS: f32 = 250.0;

    /// Paddle chord length along the rim (before size multipliers)
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// Radial thickness, only meaningful to renderers
    pub const PADDLE_WIDTH: f32 = 10.0;

    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis launch speed (the ball starts on a diagonal)
    pub const BALL_START_SPEED: f32 = 3.0;

    /// Hit-position steering strength
    pub const DEFLECTION_FACTOR: f32 = 0.4;
    /// Gap left between the ball and the rim after a paddle hit
    pub const RIM_EPSILON: f32 = 1.0;

    /// Paddle hits needed per level
    pub const LEVEL_UP_SCORE: u32 = 5;
    /// Raw speed added on level-up
    pub const SPEED_INCREASE: f32 = 0.5;
    /// Raw speed cap
    pub const MAX_SPEED: f32 = 10.0;
    /// Effective speed below which the ball counts as stalled
    pub const STALL_SPEED: f32 = 1.0;
    /// Effective speed restored when the ball stalls
    pub const FLOOR_SPEED: f32 = 3.0;

    /// Power-up icon edge length (pixels)
    pub const POWERUP_ICON_SIZE: f32 = 30.0;
    /// How long an activated power-up lasts
    pub const POWERUP_DURATION_MS: u64 = 15_000;
    /// How long an unpicked power-up stays on the field
    pub const POWERUP_LIFETIME_MS: u64 = 15_000;
    pub const SPAWN_INTERVAL_DESKTOP_MS: u64 = 10_000;
    pub const SPAWN_INTERVAL_MOBILE_MS: u64 = 15_000;

    /// Frame period used by the headless driver (~60 Hz)
    pub const FRAME_MS: u64 = 16;
}

/// Normalized angle to [-π, π]; values already in range are returned unchanged
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if (-PI..=PI).contains(&angle) {
        return angle;
    }
    (angle + PI).rem_euclid(TAU) - PI
}

/// Signed shortest angular distance from `from` to `to`, in [-π, π]
#[inline]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta) around `center`
#[inline]
pub fn cartesian_to_polar(center: Vec2, pos: Vec2) -> (f32, f32) {
    let rel = pos - center;
    (rel.length(), rel.y.atan2(rel.x))
}
