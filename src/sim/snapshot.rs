//! Read-only view of the simulation for renderers
//!
//! A snapshot is an owned copy, so a renderer never holds a borrow of the
//! simulation across frames and never sees internal bookkeeping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{ObstacleKind, RunPhase, RunnerSimulation};

/// Character pose for drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPose {
    pub pos: Vec2,
    pub size: Vec2,
    pub ducking: bool,
    pub airborne: bool,
    pub jumps_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudView {
    pub id: u32,
    pub pos: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: RunPhase,
    pub character: CharacterPose,
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<CloudView>,
    /// Displayed score
    pub score: u64,
    /// Ticks since reset; drives idle animation cycles
    pub frame_count: u64,
    /// Current scroll speed; drives ground-detail scrolling
    pub speed: f32,
    pub field_size: Vec2,
    pub ground_y: f32,
}

impl RunnerSimulation {
    pub fn snapshot(&self) -> Snapshot {
        let c = &self.character;
        Snapshot {
            phase: self.phase,
            character: CharacterPose {
                pos: c.pos,
                size: c.size,
                ducking: c.ducking,
                airborne: c.airborne,
                jumps_remaining: c.jumps_remaining,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    pos: o.pos,
                    size: o.size,
                })
                .collect(),
            clouds: self
                .clouds
                .iter()
                .map(|cloud| CloudView {
                    id: cloud.id,
                    pos: cloud.pos,
                })
                .collect(),
            score: self.clock.display_score(),
            frame_count: self.clock.frame_count,
            speed: self.clock.speed,
            field_size: Vec2::new(self.config.field_width, self.config.field_height),
            ground_y: self.config.ground_line_y(),
        }
    }
}
