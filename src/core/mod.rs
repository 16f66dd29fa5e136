//! Core domain: game state, session, level-flow messages and the camera.

mod events;
mod resources;
mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use events::{BurstEvent, BurstKind, LevelRequest, LevelRequestEvent};
pub use resources::GameSession;
pub use state::GameState;
pub use systems::MainCamera;

use bevy::prelude::*;

use crate::core::systems::{begin_run, follow_player, read_restart_input, setup_camera};
use crate::core::ui::{spawn_complete_screen, stop_run_clock};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameSession>()
            .add_message::<LevelRequestEvent>()
            .add_message::<BurstEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), begin_run)
            .add_systems(
                OnEnter(GameState::LevelComplete),
                (stop_run_clock, spawn_complete_screen).chain(),
            )
            .add_systems(
                Update,
                (
                    read_restart_input.run_if(in_state(GameState::Playing)),
                    follow_player,
                ),
            );
    }
}
