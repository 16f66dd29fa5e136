//! Portals domain: linked blue/orange portals fired at terrain.

mod components;
mod events;
mod resources;
mod systems;
mod teleport;


pub use components::{Portal, PortalColor, PortalInstance, PortalPair};
pub use events::FirePortalEvent;
pub use resources::PortalTuning;

pub(crate) use systems::clear_portals;

use bevy::prelude::*;

use crate::core::GameState;
use crate::portals::systems::{fire_portals, read_fire_input, teleport_player};

pub struct PortalsPlugin;

impl Plugin for PortalsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PortalTuning>()
            .init_resource::<PortalPair>()
            .add_message::<FirePortalEvent>()
            .add_systems(
                Update,
                (read_fire_input, fire_portals, teleport_player)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
