//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestamps only (no clocks)
//! - Seeded RNG only
//! - Stable iteration order (power-ups in spawn order)
//! - No rendering or platform dependencies

pub mod arc;
pub mod ball;
pub mod collision;
pub mod paddle;
pub mod powerup;
pub mod progression;
pub mod reflect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arc::ArcSpan;
pub use ball::Ball;
pub use collision::{Arena, RimOutcome, bounce_walls, check_rim};
pub use paddle::Paddle;
pub use powerup::{Lifecycle, Multipliers, PowerUp, PowerUpEvent, PowerUpKind, PowerUps};
pub use progression::Progress;
pub use reflect::reflect_velocity;
pub use snapshot::SceneSnapshot;
pub use state::{GameEvent, GamePhase, SimulationState};
pub use tick::{TickInput, tick};
