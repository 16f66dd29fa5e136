//! Core domain: session state shared by every domain.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::LevelRequest;

/// Progress through the level list plus the score of the current attempt.
#[derive(Resource, Debug, Default)]
pub struct GameSession {
    pub current_level: usize,
    pub level_count: usize,
    pub score: u32,
    /// Virtual time when the first level started
    pub started_at: Option<Duration>,
    /// Virtual time when the last goal was reached
    pub completed_at: Option<Duration>,
}

impl GameSession {
    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Move to the next level. Past the last one the index stays one beyond
    /// the end and the run is complete.
    pub fn advance_level(&mut self) -> LevelRequest {
        self.current_level = (self.current_level + 1).min(self.level_count);
        if self.current_level >= self.level_count {
            LevelRequest::Complete
        } else {
            LevelRequest::Advance
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_level >= self.level_count
    }

    /// Seconds between the first level load and `end`.
    pub fn run_seconds(&self, end: Duration) -> f32 {
        let start = self.started_at.unwrap_or(end);
        end.saturating_sub(start).as_secs_f32()
    }

    /// Human-readable 1-based level label for the HUD.
    pub fn level_label(&self) -> String {
        if self.level_count == 0 {
            return "No levels".to_string();
        }
        let shown = (self.current_level + 1).min(self.level_count);
        format!("Level {} / {}", shown, self.level_count)
    }
}
