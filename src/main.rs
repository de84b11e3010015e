//! Stick Runner headless entry point
//!
//! Runs the simulation at the display cadence with the autopilot on the
//! controls, logging each run. Usage:
//!
//! `stick-runner [SETTINGS] [--frames N] [--fast]`

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;

use stick_runner::consts::FRAMES_PER_SECOND;
use stick_runner::sim::{Autopilot, GameEvent, Intent, RunnerSimulation};
use stick_runner::{HighScores, InputController, PhysicalInput, Settings, ViewportClass};

/// Maximum frames to catch up in one wake-up
const MAX_SUBSTEPS: u32 = 4;

#[derive(Parser, Debug)]
#[command(name = "stick-runner")]
#[command(about = "Headless endless runner driven by the autopilot", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a settings JSON file
    settings: Option<PathBuf>,

    /// Frames to simulate before exiting
    #[arg(long, default_value_t = 60 * u64::from(FRAMES_PER_SECOND))]
    frames: u64,

    /// Run frames back to back instead of pacing at the display rate
    #[arg(long)]
    fast: bool,
}

/// Game instance holding all state
struct Game {
    sim: RunnerSimulation,
    input: InputController,
    pilot: Autopilot,
    high_scores: HighScores,
    mode: ViewportClass,
    runs: u32,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        let mut input = InputController::new(settings.input_cooldown_ms);
        input.set_viewport_width(settings.viewport_width);
        let mode = settings.viewport.resolve(settings.viewport_width);

        Self {
            sim: RunnerSimulation::new(settings.game_mode(), seed),
            input,
            pilot: Autopilot::default(),
            high_scores: HighScores::new(),
            mode,
            runs: 0,
        }
    }

    /// One display frame: input, tick, then side effects
    fn frame(&mut self, elapsed_ms: u32) {
        self.input.advance(elapsed_ms);

        if let Some(intent) = self.pilot.decide(&self.sim.snapshot()) {
            let physical = match intent {
                Intent::Jump | Intent::Reset => PhysicalInput::Action,
                Intent::Duck(true) => PhysicalInput::DuckPressed,
                Intent::Duck(false) => PhysicalInput::DuckReleased,
                Intent::SwitchMode(_) => PhysicalInput::Exit,
            };
            self.input.handle(physical, &mut self.sim);
        }

        self.sim.tick();

        let events: Vec<GameEvent> = self.sim.drain_events().collect();
        for event in &events {
            self.input.observe(event);
            match event {
                GameEvent::Started => self.runs += 1,
                GameEvent::GameOver { score } => {
                    let frames = self.sim.clock.frame_count;
                    if let Some(rank) = self.high_scores.add_score(*score, self.mode, frames) {
                        println!("Run {}: {} points (rank #{})", self.runs, score, rank);
                    } else {
                        println!("Run {}: {} points", self.runs, score);
                    }
                }
                _ => {}
            }
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Stick Runner (headless) starting, seed {}", seed);

    let mut game = Game::new(&settings, seed);
    let frame_time = Duration::from_secs(1) / FRAMES_PER_SECOND;
    let frame_ms = frame_time.as_millis() as u32;

    if args.fast {
        for _ in 0..args.frames {
            game.frame(frame_ms);
        }
    } else {
        let mut accumulator = Duration::ZERO;
        let mut last = Instant::now();
        let mut done = 0u64;

        while done < args.frames {
            let now = Instant::now();
            accumulator += now - last;
            last = now;

            let mut substeps = 0;
            while accumulator >= frame_time && substeps < MAX_SUBSTEPS && done < args.frames {
                game.frame(frame_ms);
                accumulator -= frame_time;
                substeps += 1;
                done += 1;
            }
            // Drop time we could not catch up on
            if substeps == MAX_SUBSTEPS {
                accumulator = Duration::ZERO;
            }
            std::thread::sleep(frame_time.saturating_sub(accumulator));
        }
    }

    if game.sim.is_running() {
        println!("Run {} still going: {} points", game.runs, game.sim.score());
    }
    match game.high_scores.best_in(game.mode) {
        Some(best) => println!(
            "Best of {} runs ({:?}): {} points over {} frames",
            game.runs, best.mode, best.score, best.frames
        ),
        None => println!("No scores recorded"),
    }
    match game.high_scores.to_json() {
        Ok(json) => log::debug!("High scores: {}", json),
        Err(e) => log::warn!("Could not serialize high scores: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["stick-runner"]).unwrap();
        assert_eq!(args.settings, None);
        assert_eq!(args.frames, 3600);
        assert!(!args.fast);
    }

    #[test]
    fn test_args_flags() {
        let args =
            Args::try_parse_from(["stick-runner", "runner.json", "--fast", "--frames", "10"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("runner.json")));
        assert_eq!(args.frames, 10);
        assert!(args.fast);
    }

    #[test]
    fn test_args_rejects_bad_input() {
        assert!(Args::try_parse_from(["stick-runner", "--frames", "abc"]).is_err());
        assert!(Args::try_parse_from(["stick-runner", "--speed", "9"]).is_err());
        let help = Args::try_parse_from(["stick-runner", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
