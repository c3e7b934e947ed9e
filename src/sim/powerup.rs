//! Timed power-ups
//!
//! Each instance moves through `Spawned → Active → removed`, or lapses
//! unpicked. At most one instance per kind is active at a time; picking up a
//! duplicate refreshes the active one instead of stacking.
//!
//! Multipliers are rebuilt from the device baseline and the active set
//! rather than multiplied and divided in place, so repeated pickups never
//! accumulate floating-point drift.

use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Arena;
use crate::polar_to_cartesian;
use crate::tuning::DeviceProfile;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedBoost,
    SizeIncrease,
    SlowMotion,
}

/// Which global multiplier a power-up kind drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierTarget {
    BallSpeed,
    PaddleSize,
}

impl PowerUpKind {
    /// Stable order used for spawning and multiplier rebuilds
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::SizeIncrease,
        PowerUpKind::SlowMotion,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn target(&self) -> MultiplierTarget {
        match self {
            PowerUpKind::SpeedBoost | PowerUpKind::SlowMotion => MultiplierTarget::BallSpeed,
            PowerUpKind::SizeIncrease => MultiplierTarget::PaddleSize,
        }
    }
}

/// Lifecycle of a single power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// On the field, waiting to be picked up
    Spawned { spawned_at: u64 },
    /// Picked up; effect applies until the duration elapses
    Active { activated_at: u64 },
}

/// A power-up entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub lifecycle: Lifecycle,
}

impl PowerUp {
    pub fn spawn(id: u32, kind: PowerUpKind, pos: Vec2, now: u64) -> Self {
        Self {
            id,
            kind,
            pos,
            lifecycle: Lifecycle::Spawned { spawned_at: now },
        }
    }

    /// Spawned → Active
    pub fn activate(self, now: u64) -> Self {
        Self {
            lifecycle: Lifecycle::Active { activated_at: now },
            ..self
        }
    }

    /// Restart an active instance's timer; spawned instances are unchanged
    pub fn refresh(self, now: u64) -> Self {
        match self.lifecycle {
            Lifecycle::Active { .. } => self.activate(now),
            Lifecycle::Spawned { .. } => self,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Active { .. })
    }

    /// Ball overlaps the icon
    pub fn touches(&self, ball: &Ball, icon_size: f32) -> bool {
        self.pos.distance(ball.pos) < ball.radius + icon_size / 2.0
    }

    /// Active past its duration, or unpicked past its lifetime
    pub fn is_expired(&self, now: u64, duration_ms: u64, lifetime_ms: u64) -> bool {
        match self.lifecycle {
            Lifecycle::Active { activated_at } => now.saturating_sub(activated_at) > duration_ms,
            Lifecycle::Spawned { spawned_at } => now.saturating_sub(spawned_at) > lifetime_ms,
        }
    }

    /// Time left on an active effect
    pub fn remaining_ms(&self, now: u64, duration_ms: u64) -> Option<u64> {
        match self.lifecycle {
            Lifecycle::Active { activated_at } => {
                Some(duration_ms.saturating_sub(now.saturating_sub(activated_at)))
            }
            Lifecycle::Spawned { .. } => None,
        }
    }
}

/// Global simulation multipliers driven by power-ups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub ball_speed: f32,
    pub paddle_size: f32,
}

impl Multipliers {
    /// Baseline for a device profile, with no power-ups active
    pub fn device_default(profile: &DeviceProfile) -> Self {
        Self {
            ball_speed: 1.0,
            paddle_size: profile.paddle_size_multiplier,
        }
    }
}

/// Power-up state change raised during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PowerUpEvent {
    Spawned { kind: PowerUpKind, pos: Vec2 },
    Activated { kind: PowerUpKind },
    /// A duplicate was picked up; the active instance's timer restarted
    Refreshed { kind: PowerUpKind },
    /// An active effect ran out and was reverted
    Expired { kind: PowerUpKind },
    /// An unpicked power-up disappeared
    Lapsed { kind: PowerUpKind },
}

/// All power-ups on the field plus the set of active kinds
#[derive(Debug, Clone, Default)]
pub struct PowerUps {
    items: Vec<PowerUp>,
    active: HashSet<PowerUpKind>,
    next_id: u32,
}

impl PowerUps {
    pub fn new() -> Self {
        Self::default()
    }

    /// All instances, in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &PowerUp> {
        self.items.iter()
    }

    /// Instances still waiting to be picked up
    pub fn visible(&self) -> impl Iterator<Item = &PowerUp> {
        self.items.iter().filter(|p| !p.is_active())
    }

    /// Instances whose effect currently applies
    pub fn active(&self) -> impl Iterator<Item = &PowerUp> {
        self.items.iter().filter(|p| p.is_active())
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything; effects revert with the next multiplier rebuild
    pub fn clear(&mut self) {
        self.items.clear();
        self.active.clear();
    }

    /// Place a new inactive instance
    pub fn spawn(&mut self, kind: PowerUpKind, pos: Vec2, now: u64) -> PowerUpEvent {
        self.next_id += 1;
        self.items.push(PowerUp::spawn(self.next_id, kind, pos, now));
        PowerUpEvent::Spawned { kind, pos }
    }

    /// Spawn a random kind at a random point inside the arena
    pub fn spawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        arena: &Arena,
        icon_size: f32,
        now: u64,
    ) -> PowerUpEvent {
        let kind = PowerUpKind::random(rng);
        let theta = rng.random_range(0.0..TAU);
        let max_distance = (arena.radius - icon_size).max(f32::EPSILON);
        let distance = rng.random_range(0.0..max_distance);
        self.spawn(kind, polar_to_cartesian(arena.center, distance, theta), now)
    }

    /// Pick up every spawned instance the ball touches
    pub fn collect(&mut self, ball: &Ball, icon_size: f32, now: u64) -> Vec<PowerUpEvent> {
        let mut events = Vec::new();
        let mut refreshed = Vec::new();
        let items = std::mem::take(&mut self.items);
        let mut kept = Vec::with_capacity(items.len());

        for p in items {
            if p.is_active() || !p.touches(ball, icon_size) {
                kept.push(p);
                continue;
            }
            if self.active.contains(&p.kind) {
                // Duplicate: keep the active instance, discard this one
                refreshed.push(p.kind);
                events.push(PowerUpEvent::Refreshed { kind: p.kind });
            } else {
                self.active.insert(p.kind);
                events.push(PowerUpEvent::Activated { kind: p.kind });
                kept.push(p.activate(now));
            }
        }

        for kind in refreshed {
            if let Some(p) = kept.iter_mut().find(|p| p.kind == kind && p.is_active()) {
                *p = p.refresh(now);
            }
        }

        self.items = kept;
        events
    }

    /// Remove expired actives and lapsed pickups
    pub fn expire(&mut self, now: u64, duration_ms: u64, lifetime_ms: u64) -> Vec<PowerUpEvent> {
        let mut events = Vec::new();
        let active = &mut self.active;
        self.items.retain(|p| {
            if !p.is_expired(now, duration_ms, lifetime_ms) {
                return true;
            }
            if p.is_active() {
                active.remove(&p.kind);
                events.push(PowerUpEvent::Expired { kind: p.kind });
            } else {
                events.push(PowerUpEvent::Lapsed { kind: p.kind });
            }
            false
        });
        events
    }

    /// Rebuild multipliers from the device baseline and active kinds
    pub fn multipliers(&self, profile: &DeviceProfile) -> Multipliers {
        let mut m = Multipliers::device_default(profile);
        for kind in PowerUpKind::ALL {
            if !self.active.contains(&kind) {
                continue;
            }
            let factor = profile.factors.factor(kind);
            match kind.target() {
                MultiplierTarget::BallSpeed => m.ball_speed *= factor,
                MultiplierTarget::PaddleSize => m.paddle_size *= factor,
            }
        }
        m
    }
}
