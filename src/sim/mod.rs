//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod config;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Aabb, first_hit};
pub use config::GameModeConfig;
pub use snapshot::{CharacterPose, CloudView, ObstacleView, Snapshot};
pub use state::{
    Character, Cloud, GameEvent, Intent, Obstacle, ObstacleKind, RunPhase, RunnerSimulation,
    SimulationClock,
};
