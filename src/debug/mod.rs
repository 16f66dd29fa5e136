//! Developer tools, compiled with the `dev-tools` feature.
//!
//! - F1 toggles probe and portal-normal gizmos
//! - N skips to the next level

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    draw_portal_gizmos, draw_probe_gizmos, gizmos_enabled, skip_level, toggle_gizmos,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_gizmos,
                skip_level.run_if(in_state(GameState::Playing)),
                (draw_probe_gizmos, draw_portal_gizmos).run_if(gizmos_enabled),
            ),
        );
    }
}
