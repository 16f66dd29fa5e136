//! Movement domain: collision groups, surface probes and the player controller.

mod bootstrap;
mod components;
mod controller;
mod layers;
mod probe;
mod resources;
mod systems;


pub use components::{Player, PlayerBody, PlayerState, SurfaceContacts};
pub use layers::{CollisionGroup, classify};
pub use probe::SurfaceProbe;
pub use resources::{MovementInput, MovementTuning};

pub(crate) use bootstrap::PLAYER_COLOR;
pub(crate) use systems::record_pre_step_velocity;

use bevy::prelude::*;

use crate::content::ContentSystems;
use crate::core::GameState;
use crate::movement::bootstrap::{apply_gravity_tuning, spawn_player};
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, detect_surfaces, expire_deadlines, read_input,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (spawn_player, apply_gravity_tuning).after(ContentSystems),
            )
            .add_systems(
                Update,
                read_input.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                (
                    detect_surfaces,
                    expire_deadlines,
                    apply_horizontal_movement,
                    apply_jump,
                    record_pre_step_velocity,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
