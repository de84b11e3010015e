//! Game state and core simulation types
//!
//! `RunnerSimulation` owns everything that changes during a run. Input
//! methods live here; the per-frame update lives in `tick.rs`.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::config::GameModeConfig;
use crate::consts::*;

/// Run state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Advancing every tick
    Running,
    /// Before the first run, after a crash, or back at the menu
    #[default]
    Stopped,
}

/// Obstacle types, each with fixed geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Short crawler
    Low,
    /// Pipe
    Tall,
}

impl ObstacleKind {
    /// Width and height
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Low => Vec2::new(24.0, 24.0),
            ObstacleKind::Tall => Vec2::new(32.0, 48.0),
        }
    }

    /// Distance from the ground line up to the obstacle's top edge
    pub fn ground_offset(self) -> f32 {
        match self {
            ObstacleKind::Low => 24.0,
            ObstacleKind::Tall => 48.0,
        }
    }
}

/// The player's runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Top-left corner; x never changes within a mode
    pub pos: Vec2,
    pub size: Vec2,
    /// Positive is down
    pub vertical_velocity: f32,
    pub airborne: bool,
    pub ducking: bool,
    pub jumps_remaining: u32,
    pub max_jumps: u32,
}

impl Character {
    /// Standing on the ground with a full jump budget
    pub fn grounded(config: &GameModeConfig) -> Self {
        Self {
            pos: Vec2::new(config.character_x, config.character_ground_y()),
            size: Vec2::new(CHARACTER_WIDTH, CHARACTER_HEIGHT),
            vertical_velocity: 0.0,
            airborne: false,
            ducking: false,
            jumps_remaining: config.max_jumps,
            max_jumps: config.max_jumps,
        }
    }

    /// Apply one tick of gravity. Returns true if the character landed.
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) -> bool {
        if !self.airborne {
            return false;
        }

        self.vertical_velocity += gravity;
        self.pos.y += self.vertical_velocity;

        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vertical_velocity = 0.0;
            self.airborne = false;
            self.jumps_remaining = self.max_jumps;
            return true;
        }
        false
    }

    /// Collision box: inset horizontally, lowered while ducking
    pub fn hitbox(&self) -> Aabb {
        let drop = if self.ducking { DUCK_HITBOX_DROP } else { 0.0 };
        Aabb::new(
            Vec2::new(self.pos.x + HITBOX_INSET_X, self.pos.y + drop),
            Vec2::new(self.size.x - 2.0 * HITBOX_INSET_X, self.size.y - drop),
        )
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// New obstacle at the right edge, standing on the ground line
    pub fn at_right_edge(id: u32, kind: ObstacleKind, config: &GameModeConfig) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(
                config.field_width,
                config.ground_line_y() - kind.ground_offset(),
            ),
            size: kind.size(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Still (partly) on screen
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.pos.x + self.size.x > 0.0
    }
}

/// A background cloud, no collision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Cloud {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.pos.x + self.size.x > 0.0
    }
}

/// Counters and difficulty state for the current run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Ticks since reset
    pub frame_count: u64,
    /// One point per tick while running
    pub raw_score: u64,
    /// Obstacle scroll speed (pixels per tick)
    pub speed: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u32,
    /// Difficulty steps applied so far
    pub difficulty_level: u32,
}

impl SimulationClock {
    pub fn new(config: &GameModeConfig) -> Self {
        Self {
            frame_count: 0,
            raw_score: 0,
            speed: config.initial_speed,
            spawn_interval: config.initial_spawn_interval,
            difficulty_level: 0,
        }
    }

    /// Score shown to the player
    #[inline]
    pub fn display_score(&self) -> u64 {
        self.raw_score / SCORE_DIVISOR
    }
}

/// Side effects for the host (sound, shake, input cooldown, leaderboard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped { jumps_remaining: u32 },
    Landed,
    ObstacleSpawned { kind: ObstacleKind },
    DifficultyIncreased { level: u32, speed: f32, spawn_interval: u32 },
    GameOver { score: u64 },
}

/// Discrete requests from the input layer
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Jump,
    Duck(bool),
    Reset,
    SwitchMode(GameModeConfig),
}

/// Complete runner simulation (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct RunnerSimulation {
    /// Active mode, replaced only by `switch_mode`
    pub config: GameModeConfig,
    pub phase: RunPhase,
    pub character: Character,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Active clouds in spawn order
    pub clouds: Vec<Cloud>,
    pub clock: SimulationClock,
    /// Seed the RNG was built from
    pub seed: u64,
    pub(super) rng: Pcg32,
    /// Pending host events, oldest first, capped at `MAX_PENDING_EVENTS`
    events: VecDeque<GameEvent>,
    next_id: u32,
}

impl RunnerSimulation {
    /// New simulation, stopped, with the character on the ground
    pub fn new(config: GameModeConfig, seed: u64) -> Self {
        let config = config.sanitized();
        Self {
            character: Character::grounded(&config),
            clock: SimulationClock::new(&config),
            config,
            phase: RunPhase::Stopped,
            obstacles: Vec::new(),
            clouds: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(super) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Displayed score of the current (or last) run
    pub fn score(&self) -> u64 {
        self.clock.display_score()
    }

    /// Queue an event for the host, dropping the oldest when the queue is full
    pub(super) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            let dropped = self.events.pop_front();
            log::trace!("Event queue full, dropped {dropped:?}");
        }
        self.events.push_back(event);
    }

    /// Events waiting to be drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take all events raised since the last drain
    ///
    /// Hosts should drain once per frame; at most `MAX_PENDING_EVENTS` are
    /// kept and older ones are discarded first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Start a jump, or a mid-air jump while the budget lasts
    pub fn jump(&mut self) {
        if !self.is_running() || self.character.ducking || self.character.jumps_remaining == 0 {
            return;
        }

        self.character.vertical_velocity = self.config.jump_impulse;
        self.character.airborne = true;
        self.character.jumps_remaining -= 1;
        self.push_event(GameEvent::Jumped {
            jumps_remaining: self.character.jumps_remaining,
        });
    }

    /// Start or stop ducking; ignored mid-air
    pub fn duck(&mut self, active: bool) {
        if self.character.airborne {
            return;
        }
        self.character.ducking = active;
    }

    /// Begin a fresh run with the current mode
    pub fn reset(&mut self) {
        self.clear_run();
        self.phase = RunPhase::Running;
        self.push_event(GameEvent::Started);
        log::info!(
            "Run started (seed {}, {}x{} field)",
            self.seed,
            self.config.field_width,
            self.config.field_height
        );
    }

    /// Back to the menu with a new mode; the next `reset` starts a run in it
    pub fn switch_mode(&mut self, config: GameModeConfig) {
        self.config = config.sanitized();
        self.clear_run();
        self.phase = RunPhase::Stopped;
    }

    /// Dispatch an intent to the matching operation
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Jump => self.jump(),
            Intent::Duck(active) => self.duck(active),
            Intent::Reset => self.reset(),
            Intent::SwitchMode(config) => self.switch_mode(config),
        }
    }

    fn clear_run(&mut self) {
        self.obstacles.clear();
        self.clouds.clear();
        self.clock = SimulationClock::new(&self.config);
        self.character = Character::grounded(&self.config);
    }
}
