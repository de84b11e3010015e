//! Attract-mode player
//!
//! Picks an intent from a snapshot each frame, the same way a host would feed
//! keyboard input. Used by the headless binary and for soak tests.

use super::snapshot::{ObstacleView, Snapshot};
use super::state::{Intent, RunPhase};
use crate::consts::HITBOX_INSET_X;

/// Simple jump-timing bot
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Start a new run whenever the last one ended
    pub auto_restart: bool,
    /// Jump when the next obstacle is this many frames away
    pub lookahead_frames: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            auto_restart: true,
            lookahead_frames: 6.0,
        }
    }
}

impl Autopilot {
    /// Intent for this frame, if any
    pub fn decide(&self, snapshot: &Snapshot) -> Option<Intent> {
        if snapshot.phase == RunPhase::Stopped {
            return self.auto_restart.then_some(Intent::Reset);
        }

        let character = &snapshot.character;
        if character.ducking {
            return Some(Intent::Duck(false));
        }
        if character.airborne {
            return None;
        }

        let next = next_obstacle(snapshot)?;
        let gap = next.pos.x - (character.pos.x + character.size.x);
        let window = snapshot.speed * self.lookahead_frames;

        (gap <= window).then_some(Intent::Jump)
    }
}

/// Closest obstacle the runner has not yet passed
fn next_obstacle(snapshot: &Snapshot) -> Option<&ObstacleView> {
    let hitbox_left = snapshot.character.pos.x + HITBOX_INSET_X;
    snapshot
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > hitbox_left)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
}
