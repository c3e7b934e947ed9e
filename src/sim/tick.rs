//! Per-frame simulation tick
//!
//! Order inside a running tick is fixed: paddle angle → ball move → walls →
//! rim/paddle → power-ups → speed floor → speed cap.

use super::collision::{RimOutcome, bounce_walls, check_rim, resolve_paddle_hit};
use super::powerup::PowerUpEvent;
use super::progression::{enforce_speed_cap, enforce_speed_floor, increase_ball_speed};
use super::state::{GameEvent, GamePhase, SimulationState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest paddle angle from pointer/touch (radians), if any arrived
    pub paddle_angle: Option<f32>,
    /// Start/restart trigger
    pub start: bool,
}

/// Advance the simulation by one frame at time `now` (milliseconds)
pub fn tick(state: &mut SimulationState, input: &TickInput, now: u64) {
    if let Some(angle) = input.paddle_angle {
        state.paddle.set_angle(angle);
    }
    if input.start {
        state.start(now);
    }

    if state.phase != GamePhase::Running {
        return;
    }
    state.now_ms = now;

    let speed_multiplier = state.multipliers.ball_speed;
    state.ball.advance(speed_multiplier);

    if bounce_walls(&mut state.ball, state.arena.size).any() {
        state.events.push(GameEvent::WallBounce);
    }

    match check_rim(&state.ball, &state.arena, &state.paddle.as_span()) {
        RimOutcome::Inside => {}
        RimOutcome::Hit { contact, offset } => {
            log::trace!(
                "Paddle hit at {:.3} rad (offset {:.2}), speed {:.2}",
                contact.angle,
                offset,
                state.ball.speed()
            );
            resolve_paddle_hit(
                &mut state.ball,
                &state.arena,
                &contact,
                offset,
                state.tuning.deflection_factor,
                state.tuning.rim_epsilon,
                state.tuning.floor_speed,
            );
            if state.progress.record_hit(state.tuning.level_up_score) {
                increase_ball_speed(
                    &mut state.ball,
                    state.tuning.speed_increase,
                    state.tuning.max_speed,
                    state.profile.max_speed_cap,
                );
                state.events.push(GameEvent::LevelUp {
                    level: state.progress.level,
                });
                log::info!(
                    "Level {} reached, ball speed {:.2}",
                    state.progress.level,
                    state.ball.speed()
                );
            }
            state.events.push(GameEvent::PaddleHit {
                score: state.progress.score,
            });
        }
        RimOutcome::Miss { contact } => {
            log::debug!(
                "Ball escaped at {:.3} rad, paddle at {:.3} ± {:.3}",
                contact.angle,
                state.paddle.angle,
                state.paddle.half_width
            );
            state.end_game();
            return;
        }
    }

    update_powerups(state, now);

    if enforce_speed_floor(
        &mut state.ball,
        state.multipliers.ball_speed,
        state.tuning.stall_speed,
        state.tuning.floor_speed,
    ) {
        log::debug!("Ball stalled, speed restored to {:.2}", state.ball.speed());
    }

    let max_speed = state.profile.max_speed(state.tuning.max_speed);
    enforce_speed_cap(&mut state.ball, max_speed);
}

/// Spawn on cadence, pick up, expire; then rebuild multipliers
fn update_powerups(state: &mut SimulationState, now: u64) {
    let mut events = Vec::new();

    if let Some(deadline) = state.next_spawn_at {
        if now >= deadline {
            events.push(state.spawn_powerup(now));
            let interval = state.profile.spawn_interval_ms;
            let mut next = deadline.saturating_add(interval);
            if next <= now {
                // Host stalled for more than one interval; don't burst-spawn
                next = now.saturating_add(interval);
            }
            state.next_spawn_at = Some(next);
        }
    }

    events.extend(
        state
            .powerups
            .collect(&state.ball, state.tuning.powerup_icon_size, now),
    );
    events.extend(state.powerups.expire(
        now,
        state.tuning.powerup_duration_ms,
        state.tuning.powerup_lifetime_ms,
    ));

    if events.is_empty() {
        return;
    }

    let changes_effects = events.iter().any(|e| {
        matches!(
            e,
            PowerUpEvent::Activated { .. } | PowerUpEvent::Expired { .. }
        )
    });
    if changes_effects {
        state.refresh_multipliers();
    }

    for event in events {
        log::debug!("Power-up {:?} at {} ms", event, now);
        state.events.push(GameEvent::PowerUp(event));
    }
    if changes_effects {
        log::debug!(
            "Multipliers now ball={:.3} paddle={:.3}",
            state.multipliers.ball_speed,
            state.multipliers.paddle_size
        );
    }
}
