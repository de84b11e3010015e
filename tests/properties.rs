//! Invariants of the runner simulation under arbitrary input sequences

use proptest::prelude::*;

use stick_runner::sim::{GameModeConfig, RunPhase, RunnerSimulation};

#[derive(Debug, Clone)]
enum Op {
    Tick(u8),
    Jump,
    Duck(bool),
    Reset,
    SwitchMode(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (1u8..40).prop_map(Op::Tick),
        3 => Just(Op::Jump),
        2 => any::<bool>().prop_map(Op::Duck),
        1 => Just(Op::Reset),
        1 => any::<bool>().prop_map(Op::SwitchMode),
    ]
}

fn mode(mobile: bool) -> GameModeConfig {
    if mobile {
        GameModeConfig::mobile()
    } else {
        GameModeConfig::desktop()
    }
}

fn assert_nothing_offscreen(sim: &RunnerSimulation) {
    assert!(sim.obstacles.iter().all(|o| o.pos.x + o.size.x > 0.0));
    assert!(sim.clouds.iter().all(|c| c.pos.x + c.size.x > 0.0));
}

proptest! {
    #[test]
    fn invariants_hold(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..60)) {
        let mut sim = RunnerSimulation::new(GameModeConfig::desktop(), seed);

        for op in ops {
            match op {
                Op::Tick(n) => {
                    for _ in 0..n {
                        let before = sim.clone();
                        sim.tick();

                        if before.phase == RunPhase::Stopped {
                            prop_assert_eq!(&sim.clock, &before.clock);
                            prop_assert_eq!(&sim.character, &before.character);
                            prop_assert_eq!(&sim.obstacles, &before.obstacles);
                            prop_assert_eq!(&sim.clouds, &before.clouds);
                            continue;
                        }

                        prop_assert_eq!(sim.clock.raw_score, before.clock.raw_score + 1);
                        prop_assert_eq!(sim.clock.frame_count, before.clock.frame_count + 1);
                        prop_assert!(sim.clock.speed >= before.clock.speed);
                        prop_assert!(sim.clock.spawn_interval <= before.clock.spawn_interval);
                        if before.character.airborne && !sim.character.airborne {
                            prop_assert_eq!(sim.character.vertical_velocity, 0.0);
                            prop_assert_eq!(sim.character.jumps_remaining, sim.character.max_jumps);
                            prop_assert_eq!(sim.character.pos.y, sim.config.character_ground_y());
                        }
                        assert_nothing_offscreen(&sim);
                    }
                }
                Op::Jump => {
                    let before = sim.character.clone();
                    sim.jump();
                    if before.jumps_remaining == 0 || before.ducking || !sim.is_running() {
                        prop_assert_eq!(&sim.character, &before);
                    } else {
                        prop_assert!(sim.character.airborne);
                        prop_assert_eq!(sim.character.jumps_remaining, before.jumps_remaining - 1);
                    }
                }
                Op::Duck(active) => {
                    let before = sim.character.clone();
                    sim.duck(active);
                    if before.airborne {
                        prop_assert_eq!(&sim.character, &before);
                    } else {
                        prop_assert_eq!(sim.character.ducking, active);
                    }
                }
                Op::Reset => {
                    sim.reset();
                    prop_assert_eq!(sim.phase, RunPhase::Running);
                    prop_assert!(sim.obstacles.is_empty() && sim.clouds.is_empty());
                    prop_assert_eq!(sim.clock.frame_count, 0);
                    prop_assert_eq!(sim.clock.raw_score, 0);
                    prop_assert_eq!(sim.clock.speed, sim.config.initial_speed);
                    prop_assert_eq!(sim.clock.spawn_interval, sim.config.initial_spawn_interval);
                    prop_assert!(!sim.character.airborne && !sim.character.ducking);
                    prop_assert_eq!(sim.character.jumps_remaining, sim.config.max_jumps);
                }
                Op::SwitchMode(mobile) => {
                    sim.switch_mode(mode(mobile));
                    prop_assert_eq!(sim.phase, RunPhase::Stopped);
                    prop_assert_eq!(&sim.config, &mode(mobile));
                    prop_assert!(sim.obstacles.is_empty() && sim.clouds.is_empty());
                }
            }

            prop_assert_eq!(sim.score(), sim.clock.raw_score / 10);
            prop_assert_eq!(u64::from(sim.clock.difficulty_level), sim.clock.raw_score / 500);
            prop_assert!(sim.clock.spawn_interval >= sim.config.min_spawn_interval);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn difficulty_steps_once_per_milestone(
        seed in any::<u64>(),
        decrement in 0u32..40,
        min_interval in 1u32..150,
        ticks in 1u32..4000,
    ) {
        let config = GameModeConfig {
            spawn_interval_decrement: decrement,
            min_spawn_interval: min_interval,
            ..GameModeConfig::desktop()
        };
        let mut sim = RunnerSimulation::new(config, seed);
        sim.reset();

        for _ in 0..ticks {
            sim.tick();
            // Keep the run alive
            sim.obstacles.clear();
        }

        let steps = u64::from(ticks) / 500;
        prop_assert_eq!(u64::from(sim.clock.difficulty_level), steps);
        let expected_interval = (0..steps).fold(sim.config.initial_spawn_interval, |interval, _| {
            interval.saturating_sub(decrement).max(min_interval)
        });
        prop_assert_eq!(sim.clock.spawn_interval, expected_interval);
        prop_assert!(sim.clock.spawn_interval >= min_interval);

        let difficulty_events = sim
            .drain_events()
            .filter(|e| matches!(e, stick_runner::sim::GameEvent::DifficultyIncreased { .. }))
            .count() as u64;
        prop_assert_eq!(difficulty_events, steps);
    }
}
