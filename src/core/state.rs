//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    /// Config and level files are read during Startup
    #[default]
    Loading,
    Playing,
    /// Reached after the goal of the last level
    LevelComplete,
}
