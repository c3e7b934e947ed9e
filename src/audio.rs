//! Audio feedback routing
//!
//! The simulation raises [`GameEvent`]s; [`Feedback`] turns them into sound
//! effect and music requests on a host-provided [`SoundSink`]. Sink failures
//! are logged and otherwise ignored - the game never waits on audio.

use crate::error::FeedbackError;
use crate::settings::Settings;
use crate::sim::{GameEvent, PowerUpEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Session started
    GameStart,
    /// Ball escaped
    GameOver,
    /// New level reached
    LevelUp,
    /// Power-up picked up (or refreshed)
    PowerUpCollect,
}

impl SoundEffect {
    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::GameStart => Some(SoundEffect::GameStart),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::LevelUp { .. } => Some(SoundEffect::LevelUp),
            GameEvent::PowerUp(PowerUpEvent::Activated { .. })
            | GameEvent::PowerUp(PowerUpEvent::Refreshed { .. }) => {
                Some(SoundEffect::PowerUpCollect)
            }
            GameEvent::WallBounce | GameEvent::PowerUp(_) => None,
        }
    }
}

/// Host audio backend
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), FeedbackError>;
    fn start_music(&mut self, volume: f32) -> Result<(), FeedbackError>;
    fn stop_music(&mut self) -> Result<(), FeedbackError>;
}

/// Sink that only logs; used by the headless binary
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), FeedbackError> {
        log::debug!("♪ {:?} (vol {:.2})", effect, volume);
        Ok(())
    }

    fn start_music(&mut self, volume: f32) -> Result<(), FeedbackError> {
        log::debug!("♪ music on (vol {:.2})", volume);
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), FeedbackError> {
        log::debug!("♪ music off");
        Ok(())
    }
}

/// Routes simulation events to a sound sink according to player settings
pub struct Feedback<S: SoundSink> {
    sink: S,
    settings: Settings,
    music_playing: bool,
    failures: u32,
}

impl<S: SoundSink> Feedback<S> {
    pub fn new(sink: S, settings: Settings) -> Self {
        Self {
            sink,
            settings,
            music_playing: false,
            failures: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Sink calls that failed so far
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// React to one frame's events
    pub fn handle(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
            match event {
                GameEvent::GameStart => self.start_music(),
                GameEvent::GameOver { .. } => self.stop_music(),
                _ => {}
            }
        }
    }

    /// Flip SFX on/off
    pub fn toggle_sfx(&mut self) -> bool {
        self.settings.toggle_sfx()
    }

    /// Flip music on/off; takes effect immediately
    pub fn toggle_music(&mut self) -> bool {
        if self.settings.toggle_music() {
            self.start_music();
        } else {
            self.stop_music();
        }
        self.settings.music_enabled
    }

    fn play(&mut self, effect: SoundEffect) {
        let vol = self.settings.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        let result = self.sink.play(effect, vol);
        self.note(result);
    }

    fn start_music(&mut self) {
        if !self.settings.music_enabled {
            return;
        }
        let result = self.sink.start_music(self.settings.master_volume);
        self.music_playing = result.is_ok();
        self.note(result);
    }

    fn stop_music(&mut self) {
        // Always honored, even with music disabled
        let result = self.sink.stop_music();
        self.music_playing = false;
        self.note(result);
    }

    fn note(&mut self, result: Result<(), FeedbackError>) {
        if let Err(e) = result {
            self.failures += 1;
            log::warn!("Audio feedback failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PowerUpKind;

    #[derive(Debug, Default)]
    struct Recorder {
        played: Vec<SoundEffect>,
        music: Vec<bool>,
        fail: bool,
    }

    impl SoundSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) -> Result<(), FeedbackError> {
            if self.fail {
                return Err(FeedbackError::Playback {
                    effect,
                    reason: "no device".into(),
                });
            }
            self.played.push(effect);
            Ok(())
        }

        fn start_music(&mut self, _volume: f32) -> Result<(), FeedbackError> {
            if self.fail {
                return Err(FeedbackError::Unavailable("no device".into()));
            }
            self.music.push(true);
            Ok(())
        }

        fn stop_music(&mut self) -> Result<(), FeedbackError> {
            self.music.push(false);
            Ok(())
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut fb = Feedback::new(Recorder::default(), Settings::default());
        fb.handle(&[
            GameEvent::GameStart,
            GameEvent::WallBounce,
            GameEvent::PaddleHit { score: 1 },
            GameEvent::PowerUp(PowerUpEvent::Activated {
                kind: PowerUpKind::SlowMotion,
            }),
            GameEvent::GameOver { score: 1, level: 1 },
        ]);
        assert_eq!(
            fb.sink().played,
            vec![
                SoundEffect::GameStart,
                SoundEffect::PaddleHit,
                SoundEffect::PowerUpCollect,
                SoundEffect::GameOver,
            ]
        );
        assert_eq!(fb.sink().music, vec![true, false]);
        assert!(!fb.music_playing());
    }

    #[test]
    fn test_sfx_toggle_suppresses_effects() {
        let mut fb = Feedback::new(Recorder::default(), Settings::default());
        assert!(!fb.toggle_sfx());
        fb.handle(&[GameEvent::PaddleHit { score: 1 }]);
        assert!(fb.sink().played.is_empty());
    }

    #[test]
    fn test_music_toggle() {
        let settings = Settings {
            music_enabled: false,
            ..Settings::default()
        };
        let mut fb = Feedback::new(Recorder::default(), settings);
        fb.handle(&[GameEvent::GameStart]);
        assert!(fb.sink().music.is_empty());

        assert!(fb.toggle_music());
        assert!(fb.music_playing());
        assert!(!fb.toggle_music());
        assert_eq!(fb.sink().music, vec![true, false]);
    }

    #[test]
    fn test_failing_sink_is_tolerated() {
        let sink = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut fb = Feedback::new(sink, Settings::default());
        fb.handle(&[GameEvent::GameStart, GameEvent::PaddleHit { score: 1 }]);
        assert_eq!(fb.failures(), 3);
        assert!(!fb.music_playing());
    }
}
