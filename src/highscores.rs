//! High score leaderboard
//!
//! Tracks the top 10 displayed scores. Storage is up to the host; the board
//! round-trips through JSON.

use serde::{Deserialize, Serialize};

use crate::settings::ViewportClass;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Displayed score at game over
    pub score: u64,
    /// Mode the run was played in
    pub mode: ViewportClass,
    /// Frames survived
    pub frames: u64,
}

/// High score leaderboard, sorted best first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScoreEntry {
    /// Ranking key: displayed score, then frames survived
    fn key(&self) -> (u64, u64) {
        (self.score, self.frames)
    }
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank (1-indexed) a finished run would take, if it makes the board
    ///
    /// Equal scores are split by frames survived. A run that ties an existing
    /// entry on both goes below it. Zero scores never place.
    pub fn rank_for(&self, score: u64, frames: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let index = self
            .entries
            .partition_point(|e| e.key() >= (score, frames));
        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    /// Record a finished run, returning its rank if it made the board
    pub fn add_score(&mut self, score: u64, mode: ViewportClass, frames: u64) -> Option<usize> {
        let rank = self.rank_for(score, frames)?;
        self.entries.insert(rank - 1, HighScoreEntry { score, mode, frames });
        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!("High score #{rank}: {score} ({mode:?}, {frames} frames)");
        Some(rank)
    }

    /// Best entry recorded in the given mode
    pub fn best_in(&self, mode: ViewportClass) -> Option<&HighScoreEntry> {
        self.entries.iter().find(|e| e.mode == mode)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut scores: Self = serde_json::from_str(json)?;
        scores.entries.sort_by(|a, b| b.key().cmp(&a.key()));
        scores.entries.truncate(MAX_HIGH_SCORES);
        Ok(scores)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
