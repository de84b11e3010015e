//! Physical input to simulation intents
//!
//! The simulation only knows about `Intent`s. This layer decides what a key
//! press means right now (restart vs. jump) and owns the short cooldown after
//! a crash during which the action key is ignored.

use crate::consts::DEFAULT_INPUT_COOLDOWN_MS;
use crate::sim::{GameEvent, GameModeConfig, Intent, RunnerSimulation};

/// Device-independent input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalInput {
    /// Space or a touch tap
    Action,
    DuckPressed,
    DuckReleased,
    /// Escape or the exit button
    Exit,
}

impl PhysicalInput {
    /// Map a DOM-style key code
    pub fn from_key(code: &str, pressed: bool) -> Option<Self> {
        match (code, pressed) {
            ("Space", true) => Some(PhysicalInput::Action),
            ("ArrowDown", true) => Some(PhysicalInput::DuckPressed),
            ("ArrowDown", false) => Some(PhysicalInput::DuckReleased),
            ("Escape", true) => Some(PhysicalInput::Exit),
            _ => None,
        }
    }
}

/// Turns physical input into intents for one simulation
#[derive(Debug, Clone)]
pub struct InputController {
    cooldown_ms: u32,
    remaining_ms: u32,
    viewport_width: u32,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_COOLDOWN_MS)
    }
}

impl InputController {
    pub fn new(cooldown_ms: u32) -> Self {
        Self {
            cooldown_ms,
            remaining_ms: 0,
            viewport_width: 1024,
        }
    }

    /// Viewport width used to pick the mode on exit
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// True while the post-crash cooldown is running
    pub fn controls_disabled(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Count the cooldown down by wall-clock time
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    /// Arm the cooldown when a run ends
    pub fn observe(&mut self, event: &GameEvent) {
        if let GameEvent::GameOver { .. } = event {
            self.remaining_ms = self.cooldown_ms;
        }
    }

    /// What the input means for the simulation in its current state
    pub fn translate(&mut self, input: PhysicalInput, sim: &RunnerSimulation) -> Option<Intent> {
        match input {
            PhysicalInput::Exit => {
                self.remaining_ms = 0;
                let config = GameModeConfig::for_viewport_width(self.viewport_width)
                    .with_max_jumps(sim.config.max_jumps);
                Some(Intent::SwitchMode(config))
            }
            PhysicalInput::Action if self.controls_disabled() => None,
            PhysicalInput::Action if sim.is_running() => Some(Intent::Jump),
            PhysicalInput::Action => Some(Intent::Reset),
            PhysicalInput::DuckPressed => Some(Intent::Duck(true)),
            PhysicalInput::DuckReleased => Some(Intent::Duck(false)),
        }
    }

    /// Translate and apply in one go
    pub fn handle(&mut self, input: PhysicalInput, sim: &mut RunnerSimulation) {
        if let Some(intent) = self.translate(input, sim) {
            log::trace!("{:?} -> {:?}", input, intent);
            sim.apply(intent);
        }
    }
}
