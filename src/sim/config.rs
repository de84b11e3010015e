//! Per-session game mode configuration
//!
//! A mode fixes the field size and every physics/difficulty constant for a
//! session. The simulation never mutates it; changing modes goes through
//! `RunnerSimulation::switch_mode`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

fn default_max_jumps() -> u32 {
    2
}

/// Immutable tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModeConfig {
    /// Play field size in pixels
    pub field_width: f32,
    pub field_height: f32,
    /// Fixed horizontal position of the character
    pub character_x: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Scroll speed at run start (pixels per tick)
    pub initial_speed: f32,
    /// Ticks between obstacle spawns at run start
    pub initial_spawn_interval: u32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Speed added per difficulty step
    pub speed_increment: f32,
    /// Spawn interval removed per difficulty step
    pub spawn_interval_decrement: u32,
    /// Floor for the spawn interval
    pub min_spawn_interval: u32,
    /// Jumps available between landings (1 disables double jump)
    #[serde(default = "default_max_jumps")]
    pub max_jumps: u32,
}

impl Default for GameModeConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl GameModeConfig {
    /// Wide landscape field
    pub fn desktop() -> Self {
        Self {
            field_width: 800.0,
            field_height: 400.0,
            character_x: 80.0,
            gravity: 0.6,
            initial_speed: 5.0,
            initial_spawn_interval: 150,
            jump_impulse: -12.0,
            speed_increment: 0.5,
            spawn_interval_decrement: 5,
            min_spawn_interval: 100,
            max_jumps: default_max_jumps(),
        }
    }

    /// Narrow portrait field, slower and more forgiving
    pub fn mobile() -> Self {
        Self {
            field_width: 300.0,
            field_height: 500.0,
            character_x: 50.0,
            gravity: 0.5,
            initial_speed: 3.5,
            initial_spawn_interval: 180,
            jump_impulse: -11.0,
            speed_increment: 0.3,
            spawn_interval_decrement: 3,
            min_spawn_interval: 140,
            max_jumps: default_max_jumps(),
        }
    }

    /// Pick the preset for a viewport of the given CSS width
    pub fn for_viewport_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    /// Same mode with a different jump budget
    pub fn with_max_jumps(mut self, max_jumps: u32) -> Self {
        self.max_jumps = max_jumps;
        self.sanitized()
    }

    /// Parse a config from JSON, then sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        if self.min_spawn_interval == 0 {
            log::warn!("min_spawn_interval of 0 raised to 1");
            self.min_spawn_interval = 1;
        }
        if self.initial_spawn_interval < self.min_spawn_interval {
            log::warn!(
                "initial_spawn_interval {} below minimum, raised to {}",
                self.initial_spawn_interval,
                self.min_spawn_interval
            );
            self.initial_spawn_interval = self.min_spawn_interval;
        }
        if self.max_jumps == 0 {
            log::warn!("max_jumps of 0 raised to 1");
            self.max_jumps = 1;
        }
        if self.speed_increment < 0.0 {
            log::warn!("negative speed_increment {} clamped to 0", self.speed_increment);
            self.speed_increment = 0.0;
        }
        self
    }

    /// Top of the grounded character
    #[inline]
    pub fn character_ground_y(&self) -> f32 {
        self.field_height - CHARACTER_GROUND_OFFSET
    }

    /// Y of the ground line obstacles stand on
    #[inline]
    pub fn ground_line_y(&self) -> f32 {
        self.field_height - GROUND_LINE_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_selection() {
        assert_eq!(GameModeConfig::for_viewport_width(375), GameModeConfig::mobile());
        assert_eq!(GameModeConfig::for_viewport_width(768), GameModeConfig::mobile());
        assert_eq!(GameModeConfig::for_viewport_width(769), GameModeConfig::desktop());
    }

    #[test]
    fn test_from_json_defaults_max_jumps() {
        let json = r#"{
            "field_width": 640.0, "field_height": 360.0, "character_x": 60.0,
            "gravity": 0.5, "initial_speed": 4.0, "initial_spawn_interval": 120,
            "jump_impulse": -10.0, "speed_increment": 0.25,
            "spawn_interval_decrement": 4, "min_spawn_interval": 90
        }"#;
        let config = GameModeConfig::from_json(json).unwrap();
        assert_eq!(config.max_jumps, 2);
        assert_eq!(config.ground_line_y(), 300.0);
        assert_eq!(config.character_ground_y(), 260.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(GameModeConfig::from_json("{\"field_width\": \"wide\"}").is_err());
    }

    #[test]
    fn test_sanitize() {
        let config = GameModeConfig {
            initial_spawn_interval: 10,
            min_spawn_interval: 0,
            max_jumps: 0,
            ..GameModeConfig::desktop()
        }
        .sanitized();
        assert_eq!(config.min_spawn_interval, 1);
        assert_eq!(config.initial_spawn_interval, 10);
        assert_eq!(config.max_jumps, 1);

        let config = GameModeConfig {
            initial_spawn_interval: 50,
            ..GameModeConfig::desktop()
        }
        .sanitized();
        assert_eq!(config.initial_spawn_interval, 100);
    }
}
