//! Fixed-cadence simulation tick
//!
//! Core game loop that advances a running simulation by one display frame.

use glam::Vec2;
use rand::Rng;

use super::collision::first_hit;
use super::state::{Cloud, GameEvent, Obstacle, ObstacleKind, RunPhase, RunnerSimulation};
use crate::consts::*;

impl RunnerSimulation {
    /// Advance the run by one frame. Does nothing while stopped.
    pub fn tick(&mut self) {
        if self.phase != RunPhase::Running {
            return;
        }

        // Physics
        let ground_y = self.config.character_ground_y();
        if self.character.integrate(self.config.gravity, ground_y) {
            self.push_event(GameEvent::Landed);
        }

        self.scroll();
        self.spawn();
        self.advance_score();
        self.clock.frame_count += 1;

        if let Some(hit) = first_hit(&self.character.hitbox(), &self.obstacles) {
            log::debug!("Hit {:?} obstacle {} at x={}", hit.kind, hit.id, hit.pos.x);
            let score = self.clock.display_score();
            self.phase = RunPhase::Stopped;
            self.push_event(GameEvent::GameOver { score });
            log::info!(
                "Game over: score {} after {} frames (speed {:.1})",
                score,
                self.clock.frame_count,
                self.clock.speed
            );
        }
    }

    /// Move obstacles and clouds left, dropping whatever left the field
    fn scroll(&mut self) {
        let speed = self.clock.speed;
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= speed;
        }
        self.obstacles.retain(Obstacle::is_visible);

        let cloud_speed = speed * CLOUD_PARALLAX;
        for cloud in &mut self.clouds {
            cloud.pos.x -= cloud_speed;
        }
        self.clouds.retain(Cloud::is_visible);
    }

    fn spawn(&mut self) {
        let frame = self.clock.frame_count;

        if frame % u64::from(self.clock.spawn_interval) == 0 {
            let kind = if self.rng.random_bool(0.5) {
                ObstacleKind::Tall
            } else {
                ObstacleKind::Low
            };
            let id = self.next_entity_id();
            self.obstacles.push(Obstacle::at_right_edge(id, kind, &self.config));
            self.push_event(GameEvent::ObstacleSpawned { kind });
            log::trace!("Spawned {:?} obstacle {} on frame {}", kind, id, frame);
        }

        if frame % CLOUD_SPAWN_INTERVAL == 0 {
            let y = self
                .rng
                .random_range(CLOUD_BAND_MIN..CLOUD_BAND_MIN + CLOUD_BAND_HEIGHT);
            let id = self.next_entity_id();
            self.clouds.push(Cloud {
                id,
                pos: Vec2::new(self.config.field_width, y),
                size: Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT),
            });
        }
    }

    /// One raw point per tick, one difficulty step per milestone reached
    fn advance_score(&mut self) {
        self.clock.raw_score += 1;

        let reached = (self.clock.raw_score / DIFFICULTY_MILESTONE) as u32;
        while self.clock.difficulty_level < reached {
            self.clock.difficulty_level += 1;
            self.clock.speed += self.config.speed_increment;
            self.clock.spawn_interval = self
                .clock
                .spawn_interval
                .saturating_sub(self.config.spawn_interval_decrement)
                .max(self.config.min_spawn_interval);

            log::info!(
                "Difficulty {}: speed {:.1}, spawn every {} frames",
                self.clock.difficulty_level,
                self.clock.speed,
                self.clock.spawn_interval
            );
            self.push_event(GameEvent::DifficultyIncreased {
                level: self.clock.difficulty_level,
                speed: self.clock.speed,
                spawn_interval: self.clock.spawn_interval,
            });
        }
    }
}
