//! Game state and session lifecycle
//!
//! Everything the simulation mutates lives in one owned [`SimulationState`];
//! there is no ambient global state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Arena;
use super::paddle::Paddle;
use super::powerup::{Multipliers, PowerUpEvent, PowerUps};
use super::progression::Progress;
use super::snapshot::SceneSnapshot;
use super::tick::{TickInput, tick};
use crate::tuning::{DeviceClass, DeviceProfile, Tuning};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start trigger
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Ball escaped past the paddle; final score is kept for display
    GameOver,
}

/// Discrete side effects for feedback/render collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStart,
    PaddleHit { score: u64 },
    LevelUp { level: u32 },
    WallBounce,
    GameOver { score: u64, level: u32 },
    PowerUp(PowerUpEvent),
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub tuning: Tuning,
    pub device: DeviceClass,
    /// Profile selected from `device` at construction
    pub profile: DeviceProfile,
    pub arena: Arena,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub progress: Progress,
    pub powerups: PowerUps,
    pub multipliers: Multipliers,
    /// Next power-up spawn time; `None` outside a running session
    pub next_spawn_at: Option<u64>,
    /// Timestamp of the most recent tick
    pub now_ms: u64,
    /// Events raised since the last snapshot
    pub events: Vec<GameEvent>,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl SimulationState {
    /// Create an idle session. `tuning` is assumed validated.
    pub fn new(tuning: Tuning, device: DeviceClass, seed: u64) -> Self {
        let profile = tuning.profile(device).clone();
        let arena = Arena::new(tuning.arena_size, tuning.arena_radius);
        let multipliers = Multipliers::device_default(&profile);
        let paddle = Paddle::new(tuning.paddle_height, multipliers.paddle_size, arena.radius);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut ball = Ball::new(arena.center, tuning.ball_radius);
        ball.reset(arena.center, tuning.ball_start_speed, profile.speed_multiplier, &mut rng);

        Self {
            tuning,
            device,
            profile,
            arena,
            phase: GamePhase::Idle,
            ball,
            paddle,
            progress: Progress::default(),
            powerups: PowerUps::new(),
            multipliers,
            next_spawn_at: None,
            now_ms: 0,
            events: Vec::new(),
            seed,
            rng,
        }
    }

    /// Idle session with default tuning
    pub fn with_defaults(device: DeviceClass, seed: u64) -> Self {
        Self::new(Tuning::default(), device, seed)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Start trigger: reset everything and enter `Running`. Valid from any phase.
    pub fn start(&mut self, now: u64) {
        self.progress = Progress::default();
        self.ball.reset(
            self.arena.center,
            self.tuning.ball_start_speed,
            self.profile.speed_multiplier,
            &mut self.rng,
        );
        self.powerups.clear();
        self.refresh_multipliers();
        self.next_spawn_at = Some(now.saturating_add(self.profile.spawn_interval_ms));
        self.now_ms = now;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::GameStart);
        log::info!(
            "Game started ({:?}, seed {}), ball velocity {:?}",
            self.device,
            self.seed,
            self.ball.vel
        );
    }

    /// Running → GameOver: stop spawns, drop power-ups, revert multipliers
    pub fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.next_spawn_at = None;
        self.powerups.clear();
        self.refresh_multipliers();
        self.events.push(GameEvent::GameOver {
            score: self.progress.score,
            level: self.progress.level,
        });
        log::info!(
            "Game over: score {}, level {}",
            self.progress.score,
            self.progress.level
        );
    }

    /// Rebuild multipliers from active power-ups and resize the paddle to match
    pub fn refresh_multipliers(&mut self) {
        self.multipliers = self.powerups.multipliers(&self.profile);
        self.paddle.resize(
            self.tuning.paddle_height,
            self.multipliers.paddle_size,
            self.arena.radius,
        );
    }

    /// Spawn a random power-up inside the arena
    pub fn spawn_powerup(&mut self, now: u64) -> PowerUpEvent {
        self.powerups
            .spawn_random(&mut self.rng, &self.arena, self.tuning.powerup_icon_size, now)
    }

    /// Drain events raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one frame and return the scene to render
    pub fn step(&mut self, input: &TickInput, now: u64) -> SceneSnapshot {
        tick(self, input, now);
        let events = self.take_events();
        SceneSnapshot::capture(self, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = SimulationState::with_defaults(DeviceClass::Desktop, 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.next_spawn_at, None);
        assert_eq!(state.progress, Progress::default());
        assert_eq!(state.ball.pos, state.arena.center);
    }

    #[test]
    fn test_start_arms_spawn_deadline() {
        let mut state = SimulationState::with_defaults(DeviceClass::Desktop, 1);
        state.start(500);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.next_spawn_at, Some(10_500));
        assert_eq!(state.take_events(), vec![GameEvent::GameStart]);
    }

    #[test]
    fn test_mobile_profile_prescales_session() {
        let mut state = SimulationState::with_defaults(DeviceClass::Mobile, 3);
        state.start(0);
        assert!((state.ball.vel.x.abs() - 2.4).abs() < 1e-5);
        assert!((state.ball.vel.y.abs() - 2.4).abs() < 1e-5);
        assert_eq!(state.multipliers.paddle_size, 1.2);
        assert_eq!(state.next_spawn_at, Some(15_000));

        let desktop = SimulationState::with_defaults(DeviceClass::Desktop, 3);
        assert!(state.paddle.half_width > desktop.paddle.half_width);
    }

    #[test]
    fn test_end_game_keeps_score() {
        let mut state = SimulationState::with_defaults(DeviceClass::Desktop, 1);
        state.start(0);
        state.progress.score = 7;
        state.progress.level = 2;
        state.end_game();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.progress.score, 7);
        assert_eq!(state.next_spawn_at, None);
        assert!(state.events.contains(&GameEvent::GameOver { score: 7, level: 2 }));
    }
}
