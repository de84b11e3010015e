//! Host settings and preferences
//!
//! Persisted as JSON by the host; anything unreadable falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INPUT_COOLDOWN_MS, MOBILE_MAX_WIDTH};
use crate::sim::GameModeConfig;

/// Viewport class that selects the game mode preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewportClass {
    /// Decide from the viewport width at startup
    #[default]
    Auto,
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// Concrete class for a viewport width (never `Auto`)
    pub fn resolve(&self, viewport_width: u32) -> ViewportClass {
        match self {
            ViewportClass::Auto if viewport_width <= MOBILE_MAX_WIDTH => ViewportClass::Mobile,
            ViewportClass::Auto => ViewportClass::Desktop,
            class => *class,
        }
    }

    /// Mode preset for this class at the given viewport width
    pub fn config(&self, viewport_width: u32) -> GameModeConfig {
        match self.resolve(viewport_width) {
            ViewportClass::Mobile => GameModeConfig::mobile(),
            _ => GameModeConfig::desktop(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode preset selection
    pub viewport: ViewportClass,
    /// Viewport width assumed when `viewport` is `Auto`
    pub viewport_width: u32,
    /// Jumps between landings (1 for classic single jump)
    pub max_jumps: u32,
    /// Fixed RNG seed; a fresh one per launch when unset
    pub seed: Option<u64>,
    /// Controls disabled this long after a crash
    pub input_cooldown_ms: u32,
    /// Full mode override, replaces the preset when present
    pub custom_mode: Option<GameModeConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport: ViewportClass::Auto,
            viewport_width: 1024,
            max_jumps: 2,
            seed: None,
            input_cooldown_ms: DEFAULT_INPUT_COOLDOWN_MS,
            custom_mode: None,
        }
    }
}

impl Settings {
    /// Mode the next session should use
    pub fn game_mode(&self) -> GameModeConfig {
        match &self.custom_mode {
            Some(config) => config.clone().sanitized(),
            None => self
                .viewport
                .config(self.viewport_width)
                .with_max_jumps(self.max_jumps),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as JSON; failures are logged, not fatal
    pub fn save_to(&self, path: &Path) {
        match self.to_json() {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
