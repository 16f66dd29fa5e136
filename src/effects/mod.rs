//! Effects domain: burst particles and idle animation of level visuals.

mod animation;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CollectibleVisual, GoalVisual, Particle};
pub use resources::{EffectsRng, EffectsTuning};

use bevy::prelude::*;

use crate::content::ContentSystems;
use crate::effects::systems::{
    animate_goals, seed_effects_rng, spawn_bursts, spin_collectibles, update_particles,
};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EffectsTuning>()
            .init_resource::<EffectsRng>()
            .add_systems(Startup, seed_effects_rng.after(ContentSystems))
            .add_systems(
                Update,
                (
                    spawn_bursts,
                    update_particles,
                    animate_goals,
                    spin_collectibles,
                ),
            );
    }
}
