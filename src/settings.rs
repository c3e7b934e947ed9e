//! Player preferences
//!
//! Sound toggles and volume. Hosts persist these however they like; the
//! JSON helpers keep the format stable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects (paddle hit, start, game over, ...)
    pub sfx_enabled: bool,
    /// Background music
    pub music_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_enabled: true,
            music_enabled: true,
            master_volume: 0.8,
        }
    }
}

impl Settings {
    /// Flip the SFX switch, returning the new state
    pub fn toggle_sfx(&mut self) -> bool {
        self.sfx_enabled = !self.sfx_enabled;
        self.sfx_enabled
    }

    /// Flip the music switch, returning the new state
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 0.0 };
    }

    /// Volume for sound effects; zero when SFX are off
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.sfx_enabled {
            self.master_volume
        } else {
            0.0
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.set_master_volume(settings.master_volume);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_sfx());
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert!(settings.toggle_sfx());
        assert!(!settings.toggle_music());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut settings = Settings::default();
        settings.set_master_volume(3.0);
        assert_eq!(settings.master_volume, 1.0);
        settings.set_master_volume(f32::NAN);
        assert_eq!(settings.master_volume, 0.0);
    }

    #[test]
    fn test_json_partial_and_clamped() {
        let settings = Settings::from_json(r#"{ "music_enabled": false, "master_volume": -2 }"#).unwrap();
        assert!(settings.sfx_enabled);
        assert!(!settings.music_enabled);
        assert_eq!(settings.master_volume, 0.0);

        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }
}
