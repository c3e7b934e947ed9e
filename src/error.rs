//! Error types for the fallible edges of the crate
//!
//! The simulation itself never fails; only configuration loading and
//! feedback sinks produce errors.

use thiserror::Error;

use crate::audio::SoundEffect;

/// Errors raised while loading or validating [`crate::Tuning`] and [`crate::Settings`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors a feedback sink may report; never fatal to the simulation
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    #[error("failed to play {effect:?}: {reason}")]
    Playback { effect: SoundEffect, reason: String },
}
