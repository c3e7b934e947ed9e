//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults mirror [`crate::consts`];
//! a JSON document may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::PowerUpKind;

/// Device class reported by the host at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceClass {
    #[default]
    Desktop,
    /// Constrained input/display (touch, small screen)
    Mobile,
}

impl DeviceClass {
    pub fn from_mobile_flag(mobile: bool) -> Self {
        if mobile {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Multiplier each power-up kind applies while active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpFactors {
    pub speed_boost: f32,
    pub size_increase: f32,
    pub slow_motion: f32,
}

impl PowerUpFactors {
    pub fn factor(&self, kind: PowerUpKind) -> f32 {
        match kind {
            PowerUpKind::SpeedBoost => self.speed_boost,
            PowerUpKind::SizeIncrease => self.size_increase,
            PowerUpKind::SlowMotion => self.slow_motion,
        }
    }
}

/// Tunables selected once per session from the device class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Pre-scales the ball's launch velocity
    pub speed_multiplier: f32,
    /// Baseline paddle size multiplier (power-ups scale from here)
    pub paddle_size_multiplier: f32,
    /// Power-up spawn cadence
    pub spawn_interval_ms: u64,
    /// Extra clamp on raw speed, as a fraction of `max_speed` (constrained profiles only)
    pub max_speed_cap: Option<f32>,
    pub factors: PowerUpFactors,
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self {
            speed_multiplier: 1.0,
            paddle_size_multiplier: 1.0,
            spawn_interval_ms: SPAWN_INTERVAL_DESKTOP_MS,
            max_speed_cap: None,
            factors: PowerUpFactors {
                speed_boost: 1.25,
                size_increase: 1.5,
                slow_motion: 0.5,
            },
        }
    }

    pub fn mobile() -> Self {
        Self {
            speed_multiplier: 0.8,
            paddle_size_multiplier: 1.2,
            spawn_interval_ms: SPAWN_INTERVAL_MOBILE_MS,
            max_speed_cap: Some(0.8),
            factors: PowerUpFactors {
                speed_boost: 1.1,
                size_increase: 1.3,
                slow_motion: 0.7,
            },
        }
    }

    /// Raw speed ceiling under this profile
    pub fn max_speed(&self, max_speed: f32) -> f32 {
        max_speed * self.max_speed_cap.unwrap_or(1.0)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        let positive = [
            self.speed_multiplier,
            self.paddle_size_multiplier,
            self.factors.speed_boost,
            self.factors.size_increase,
            self.factors.slow_motion,
        ];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::invalid(
                field,
                "multipliers and factors must be finite and > 0",
            ));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::invalid(field, "spawn interval must be > 0"));
        }
        if let Some(cap) = self.max_speed_cap {
            if !(cap > 0.0 && cap <= 1.0) {
                return Err(ConfigError::invalid(field, "max speed cap must be in (0, 1]"));
            }
        }
        Ok(())
    }
}

/// Complete game balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_size: f32,
    pub arena_radius: f32,
    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub paddle_height: f32,
    pub deflection_factor: f32,
    pub rim_epsilon: f32,
    pub level_up_score: u32,
    pub speed_increase: f32,
    pub max_speed: f32,
    pub stall_speed: f32,
    pub floor_speed: f32,
    pub powerup_icon_size: f32,
    pub powerup_duration_ms: u64,
    pub powerup_lifetime_ms: u64,
    pub desktop: DeviceProfile,
    pub mobile: DeviceProfile,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_size: ARENA_SIZE,
            arena_radius: ARENA_RADIUS,
            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            paddle_height: PADDLE_HEIGHT,
            deflection_factor: DEFLECTION_FACTOR,
            rim_epsilon: RIM_EPSILON,
            level_up_score: LEVEL_UP_SCORE,
            speed_increase: SPEED_INCREASE,
            max_speed: MAX_SPEED,
            stall_speed: STALL_SPEED,
            floor_speed: FLOOR_SPEED,
            powerup_icon_size: POWERUP_ICON_SIZE,
            powerup_duration_ms: POWERUP_DURATION_MS,
            powerup_lifetime_ms: POWERUP_LIFETIME_MS,
            desktop: DeviceProfile::desktop(),
            mobile: DeviceProfile::mobile(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn profile(&self, class: DeviceClass) -> &DeviceProfile {
        match class {
            DeviceClass::Desktop => &self.desktop,
            DeviceClass::Mobile => &self.mobile,
        }
    }

    /// Reject values that would break geometry or stall the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_positive = [
            ("arena_size", self.arena_size),
            ("arena_radius", self.arena_radius),
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
            ("paddle_height", self.paddle_height),
            ("max_speed", self.max_speed),
            ("floor_speed", self.floor_speed),
            ("powerup_icon_size", self.powerup_icon_size),
        ];
        for (field, value) in finite_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }
        if !self.deflection_factor.is_finite() || self.deflection_factor < 0.0 {
            return Err(ConfigError::invalid("deflection_factor", "must be >= 0"));
        }
        if !self.rim_epsilon.is_finite() || self.rim_epsilon < 0.0 {
            return Err(ConfigError::invalid("rim_epsilon", "must be >= 0"));
        }
        if self.arena_radius * 2.0 > self.arena_size {
            return Err(ConfigError::invalid(
                "arena_radius",
                "arena must fit inside the play field",
            ));
        }
        if self.arena_radius <= self.ball_radius + self.rim_epsilon {
            return Err(ConfigError::invalid(
                "arena_radius",
                "must exceed ball_radius + rim_epsilon",
            ));
        }
        if self.arena_radius <= self.powerup_icon_size {
            return Err(ConfigError::invalid(
                "powerup_icon_size",
                "must be smaller than arena_radius",
            ));
        }
        if self.level_up_score == 0 {
            return Err(ConfigError::invalid("level_up_score", "must be > 0"));
        }
        if !self.speed_increase.is_finite() || self.speed_increase < 0.0 {
            return Err(ConfigError::invalid("speed_increase", "must be >= 0"));
        }
        if !self.stall_speed.is_finite() || self.stall_speed < 0.0 {
            return Err(ConfigError::invalid("stall_speed", "must be >= 0"));
        }
        self.desktop.validate("desktop")?;
        self.mobile.validate("mobile")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 12.0, "level_up_score": 3 }"#).unwrap();
        assert_eq!(tuning.max_speed, 12.0);
        assert_eq!(tuning.level_up_score, 3);
        // Untouched fields keep their defaults
        assert_eq!(tuning.arena_radius, ARENA_RADIUS);
        assert_eq!(tuning.mobile, DeviceProfile::mobile());
    }

    #[test]
    fn test_rejects_zero_level_up_score() {
        let err = Tuning::from_json(r#"{ "level_up_score": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "level_up_score", .. }));
    }

    #[test]
    fn test_rejects_oversized_icon() {
        let err = Tuning::from_json(r#"{ "powerup_icon_size": 400.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "powerup_icon_size", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_profile_selection() {
        let tuning = Tuning::default();
        assert_eq!(tuning.profile(DeviceClass::Desktop).spawn_interval_ms, 10_000);
        assert_eq!(tuning.profile(DeviceClass::Mobile).spawn_interval_ms, 15_000);
        assert_eq!(DeviceClass::from_mobile_flag(true), DeviceClass::Mobile);
    }

    #[test]
    fn test_mobile_max_speed_cap() {
        assert_eq!(DeviceProfile::desktop().max_speed(MAX_SPEED), MAX_SPEED);
        assert!((DeviceProfile::mobile().max_speed(MAX_SPEED) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_factor_lookup() {
        let factors = DeviceProfile::desktop().factors;
        assert_eq!(factors.factor(PowerUpKind::SpeedBoost), 1.25);
        assert_eq!(factors.factor(PowerUpKind::SizeIncrease), 1.5);
        assert_eq!(factors.factor(PowerUpKind::SlowMotion), 0.5);
    }
}
