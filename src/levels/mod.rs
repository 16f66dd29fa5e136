//! Levels domain: instantiating levels and reacting to player contacts.

mod components;
mod reactions;
mod registry;
mod spawn;
mod systems;


pub use components::LevelBody;
pub use registry::{LevelEntities, LevelEntry};

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::systems::{apply_level_requests, dispatch_level_reactions};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelEntities>().add_systems(
            Update,
            (
                dispatch_level_reactions.run_if(in_state(GameState::Playing)),
                apply_level_requests,
            )
                .chain(),
        );
    }
}
