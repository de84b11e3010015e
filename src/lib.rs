//! Stick Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `input`: Physical input to simulation intents, with post-death cooldown
//! - `settings`: Host preferences (viewport class, seed, cooldown)
//! - `highscores`: Top-10 leaderboard

pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use input::{InputController, PhysicalInput};
pub use settings::{Settings, ViewportClass};

/// Game configuration constants shared by every mode
pub mod consts {
    /// Display refresh the host is expected to tick at
    pub const FRAMES_PER_SECOND: u32 = 60;

    /// Character box size
    pub const CHARACTER_WIDTH: f32 = 32.0;
    pub const CHARACTER_HEIGHT: f32 = 32.0;
    /// Grounded character top sits this far above the field bottom
    pub const CHARACTER_GROUND_OFFSET: f32 = 100.0;
    /// Ground line sits this far above the field bottom
    pub const GROUND_LINE_OFFSET: f32 = 60.0;

    /// Horizontal hitbox inset on each side
    pub const HITBOX_INSET_X: f32 = 5.0;
    /// Ducking lowers the hitbox top (and shrinks its height) by this much
    pub const DUCK_HITBOX_DROP: f32 = 20.0;

    /// Ticks between cloud spawns
    pub const CLOUD_SPAWN_INTERVAL: u64 = 200;
    /// Clouds scroll at this fraction of the obstacle speed
    pub const CLOUD_PARALLAX: f32 = 0.5;
    pub const CLOUD_WIDTH: f32 = 40.0;
    pub const CLOUD_HEIGHT: f32 = 20.0;
    /// Cloud y is drawn from [MIN, MIN + BAND)
    pub const CLOUD_BAND_MIN: f32 = 20.0;
    pub const CLOUD_BAND_HEIGHT: f32 = 80.0;

    /// Raw score points per displayed point
    pub const SCORE_DIVISOR: u64 = 10;
    /// Raw score between difficulty steps
    pub const DIFFICULTY_MILESTONE: u64 = 500;

    /// Viewports at or below this width use the mobile preset
    pub const MOBILE_MAX_WIDTH: u32 = 768;

    /// Controls stay disabled this long after a game over
    pub const DEFAULT_INPUT_COOLDOWN_MS: u32 = 1000;

    /// Undrained events kept by the simulation
    pub const MAX_PENDING_EVENTS: usize = 256;
}
