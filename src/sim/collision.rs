//! Collision detection and response
//!
//! Two checks run every tick: the axis-aligned play-field walls, then the
//! circular rim where the paddle either returns the ball or misses it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::ArcSpan;
use super::ball::Ball;
use super::reflect::paddle_rebound;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Fixed circular playfield centered in a square field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
    /// Edge length of the square field (walls at 0 and `size`)
    pub size: f32,
}

impl Arena {
    pub fn new(size: f32, radius: f32) -> Self {
        Self {
            center: Vec2::splat(size / 2.0),
            radius,
            size,
        }
    }
}

/// Which axes flipped during a wall bounce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub x: bool,
    pub y: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Where the ball touched the rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimContact {
    /// Ball angle around the arena center
    pub angle: f32,
    /// Ball distance from the arena center
    pub distance: f32,
    /// Outward radial unit normal at `angle`
    pub normal: Vec2,
}

/// Result of the rim check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RimOutcome {
    /// Ball has not reached the rim
    Inside,
    /// Ball reached the rim inside the paddle arc; `offset` is in [-1, 1]
    Hit { contact: RimContact, offset: f32 },
    /// Ball reached the rim outside the paddle arc
    Miss { contact: RimContact },
}

/// Invert velocity on any axis where the ball left `[radius, size - radius]`.
///
/// Only the sign of an axis changes, so raw speed is preserved.
pub fn bounce_walls(ball: &mut Ball, arena_size: f32) -> WallBounce {
    let mut bounce = WallBounce::default();
    if ball.pos.x < ball.radius || ball.pos.x > arena_size - ball.radius {
        ball.vel.x = -ball.vel.x;
        bounce.x = true;
    }
    if ball.pos.y < ball.radius || ball.pos.y > arena_size - ball.radius {
        ball.vel.y = -ball.vel.y;
        bounce.y = true;
    }
    bounce
}

/// Check whether the ball reached the rim and, if so, whether the paddle covers it
pub fn check_rim(ball: &Ball, arena: &Arena, paddle: &ArcSpan) -> RimOutcome {
    let (distance, angle) = cartesian_to_polar(arena.center, ball.pos);
    if distance <= arena.radius - ball.radius {
        return RimOutcome::Inside;
    }

    let contact = RimContact {
        angle,
        distance,
        normal: Vec2::new(angle.cos(), angle.sin()),
    };

    if paddle.contains_angle(angle) {
        RimOutcome::Hit {
            contact,
            offset: paddle.normalized_offset(angle),
        }
    } else {
        RimOutcome::Miss { contact }
    }
}

/// Bounce the ball off the paddle and pull it just inside the rim
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    arena: &Arena,
    contact: &RimContact,
    offset: f32,
    deflection_factor: f32,
    rim_epsilon: f32,
    fallback_speed: f32,
) {
    ball.vel = paddle_rebound(
        ball.vel,
        contact.normal,
        offset,
        deflection_factor,
        fallback_speed,
    );
    let r = arena.radius - ball.radius - rim_epsilon;
    ball.pos = polar_to_cartesian(arena.center, r, contact.angle);
}
