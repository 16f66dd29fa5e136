//! UI domain: in-level HUD.

mod hud_score;


use bevy::prelude::*;

use crate::ui::hud_score::{spawn_score_hud, update_score_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_hud)
            .add_systems(Update, update_score_hud);
    }
}
