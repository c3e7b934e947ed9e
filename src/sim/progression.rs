//! Score, levels and the ball speed ramp

use serde::{Deserialize, Serialize};

use super::ball::Ball;

/// Score and level bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub score: u64,
    /// Starts at 1
    pub level: u32,
    /// Hits since the last level-up
    pub level_progress: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            level_progress: 0,
        }
    }
}

impl Progress {
    /// Count one paddle hit. Returns true if it completed a level.
    pub fn record_hit(&mut self, level_up_score: u32) -> bool {
        self.score += 1;
        self.level_progress += 1;
        if self.level_progress >= level_up_score {
            self.level += 1;
            self.level_progress = 0;
            true
        } else {
            false
        }
    }
}

/// Level-up speed ramp: raw speed becomes `min(current + increase, max_speed)`,
/// then re-capped to `max_speed * cap` on constrained profiles.
pub fn increase_ball_speed(ball: &mut Ball, increase: f32, max_speed: f32, cap: Option<f32>) {
    let target = (ball.speed() + increase).min(max_speed);
    ball.set_speed(target);
    if let Some(cap) = cap {
        enforce_speed_cap(ball, max_speed * cap);
    }
}

/// If the ball effectively crawls below `stall_speed`, bring it back to
/// `floor_speed` (effective). Returns true if the floor kicked in.
pub fn enforce_speed_floor(
    ball: &mut Ball,
    speed_multiplier: f32,
    stall_speed: f32,
    floor_speed: f32,
) -> bool {
    if ball.effective_speed(speed_multiplier) >= stall_speed {
        return false;
    }
    let raw = if speed_multiplier > 0.0 {
        floor_speed / speed_multiplier
    } else {
        floor_speed
    };
    ball.set_speed(raw);
    true
}

/// Clamp raw speed to `max_speed`. Returns true if the ball was slowed.
pub fn enforce_speed_cap(ball: &mut Ball, max_speed: f32) -> bool {
    if ball.speed() <= max_speed {
        return false;
    }
    ball.set_speed(max_speed);
    true
}
