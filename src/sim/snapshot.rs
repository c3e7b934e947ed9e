//! Render-facing read model
//!
//! A [`SceneSnapshot`] is everything a renderer or HUD needs for one frame.
//! It is a plain value: serializable, comparable, detached from the state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Arena;
use super::powerup::{Multipliers, PowerUpKind};
use super::state::{GameEvent, GamePhase, SimulationState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub angle: f32,
    pub half_width: f32,
    pub start: f32,
    pub end: f32,
}

/// A power-up waiting on the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

/// An effect currently applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePowerUpView {
    pub kind: PowerUpKind,
    pub remaining_ms: u64,
}

/// One frame of scene state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub phase: GamePhase,
    /// True once the ball has escaped; score/level are final
    pub game_over: bool,
    pub now_ms: u64,
    pub arena: Arena,
    pub ball: BallView,
    pub paddle: PaddleView,
    pub score: u64,
    pub level: u32,
    pub level_progress: u32,
    pub multipliers: Multipliers,
    pub visible_powerups: Vec<PowerUpView>,
    pub active_powerups: Vec<ActivePowerUpView>,
    /// Events raised during the frame, in order
    pub events: Vec<GameEvent>,
}

impl SceneSnapshot {
    pub fn capture(state: &SimulationState, events: Vec<GameEvent>) -> Self {
        let span = state.paddle.as_span();
        let duration = state.tuning.powerup_duration_ms;

        Self {
            phase: state.phase,
            game_over: state.phase == GamePhase::GameOver,
            now_ms: state.now_ms,
            arena: state.arena,
            ball: BallView {
                pos: state.ball.pos,
                radius: state.ball.radius,
            },
            paddle: PaddleView {
                angle: state.paddle.angle,
                half_width: span.half_width,
                start: span.start(),
                end: span.end(),
            },
            score: state.progress.score,
            level: state.progress.level,
            level_progress: state.progress.level_progress,
            multipliers: state.multipliers,
            visible_powerups: state
                .powerups
                .visible()
                .map(|p| PowerUpView {
                    kind: p.kind,
                    pos: p.pos,
                })
                .collect(),
            active_powerups: state
                .powerups
                .active()
                .filter_map(|p| {
                    p.remaining_ms(state.now_ms, duration)
                        .map(|remaining_ms| ActivePowerUpView {
                            kind: p.kind,
                            remaining_ms,
                        })
                })
                .collect(),
            events,
        }
    }

    /// Ball position relative to the arena center
    pub fn ball_offset(&self) -> Vec2 {
        self.ball.pos - self.arena.center
    }
}
