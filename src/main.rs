//! Rim Pong headless runner
//!
//! Drives the simulation at a fixed frame cadence with an automatic paddle,
//! routing feedback to the log. Useful for balance checks and replays.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use glam::Vec2;

    use rim_pong::audio::{Feedback, LogSink};
    use rim_pong::consts::FRAME_MS;
    use rim_pong::platform::InputLatch;
    use rim_pong::sim::{GamePhase, SceneSnapshot, SimulationState};
    use rim_pong::{DeviceClass, Settings, Tuning, angle_delta};

    /// Max paddle turn per frame for the automatic player (radians)
    const AUTO_TURN_RATE: f32 = 0.06;

    #[derive(Parser, Debug)]
    #[command(name = "rim-pong", version, about = "Run a seeded Rim Pong session headless", long_about = None)]
    struct Args {
        /// Use the mobile device profile
        #[arg(long)]
        mobile: bool,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Frames to simulate at most
        #[arg(long, default_value_t = 3600)]
        frames: u64,

        /// Tuning JSON overrides
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    }

    impl Args {
        fn device(&self) -> DeviceClass {
            DeviceClass::from_mobile_flag(self.mobile)
        }
    }

    /// Turn the paddle toward the ball, limited to a fixed rate
    fn auto_aim(snap: &SceneSnapshot) -> f32 {
        let offset = snap.ball_offset();
        let target = offset.y.atan2(offset.x);
        let step = angle_delta(snap.paddle.angle, target).clamp(-AUTO_TURN_RATE, AUTO_TURN_RATE);
        snap.paddle.angle + step
    }

    pub fn run() -> i32 {
        env_logger::init();

        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => match Tuning::load(path) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("Could not load tuning from {}: {e}", path.display());
                    return 1;
                }
            },
            None => Tuning::default(),
        };

        log::info!(
            "Rim Pong headless: {:?}, seed {}, {} frames",
            args.device(),
            args.seed,
            args.frames
        );

        let mut state = SimulationState::new(tuning, args.device(), args.seed);
        let mut feedback = Feedback::new(LogSink, Settings::default());
        let mut latch = InputLatch::new();
        latch.request_start();

        let center = state.arena.center;
        let mut now = 0;
        let mut snap = state.step(&latch.take_tick_input(), now);
        feedback.handle(&snap.events);

        for _ in 1..args.frames {
            if snap.phase != GamePhase::Running {
                break;
            }
            let aim = auto_aim(&snap);
            latch.pointer_moved(center + Vec2::from_angle(aim) * 100.0, center);

            now += FRAME_MS;
            snap = state.step(&latch.take_tick_input(), now);
            feedback.handle(&snap.events);
        }

        if args.json {
            match serde_json::to_string_pretty(&snap) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    log::error!("Failed to serialize snapshot: {e}");
                    return 1;
                }
            }
        } else {
            println!(
                "{} after {} ms: score {}, level {}",
                if snap.game_over { "Game over" } else { "Stopped" },
                snap.now_ms,
                snap.score,
                snap.level
            );
        }
        0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_args() {
            let args = Args::try_parse_from([
                "rim-pong", "--mobile", "--seed", "7", "--frames", "100", "--json",
            ])
            .unwrap();
            assert_eq!(args.device(), DeviceClass::Mobile);
            assert_eq!(args.seed, 7);
            assert_eq!(args.frames, 100);
            assert!(args.json);
            assert!(args.tuning.is_none());
        }

        #[test]
        fn test_parse_defaults() {
            let args = Args::try_parse_from(["rim-pong", "--tuning", "balance.json"]).unwrap();
            assert_eq!(args.device(), DeviceClass::Desktop);
            assert_eq!(args.seed, 0);
            assert_eq!(args.frames, 3600);
            assert_eq!(args.tuning, Some(PathBuf::from("balance.json")));
        }

        #[test]
        fn test_parse_rejects_bad_input() {
            assert!(Args::try_parse_from(["rim-pong", "--seed"]).is_err());
            assert!(Args::try_parse_from(["rim-pong", "--frames", "lots"]).is_err());
            assert!(Args::try_parse_from(["rim-pong", "--fast"]).is_err());
        }

        #[test]
        fn test_auto_aim_is_rate_limited() {
            let mut state = SimulationState::with_defaults(DeviceClass::Desktop, 3);
            state.paddle.set_angle(0.0);
            state.ball.pos = state.arena.center + Vec2::new(0.0, 100.0);
            let snap = SceneSnapshot::capture(&state, Vec::new());
            assert!((auto_aim(&snap) - AUTO_TURN_RATE).abs() < 1e-6);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    std::process::exit(headless::run());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts embed the library directly
}
