//! Content domain: level files, gameplay config, and their loading.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{GameplayConfig, LevelDef, MissingSpawnPolicy, ObjectKind, PlacedObject};
pub use registry::LevelRegistry;

#[cfg(test)]
pub(crate) use loader::parse_level;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::{load_gameplay_config, load_levels};
use crate::core::{GameSession, GameState};
use crate::effects::EffectsTuning;
use crate::movement::MovementTuning;
use crate::portals::PortalTuning;

/// Path of the gameplay config, relative to the working directory.
pub const GAMEPLAY_CONFIG_PATH: &str = "assets/data/gameplay.ron";

/// Startup systems that must finish before anything reads tuning or levels.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSystems;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayConfig>()
            .init_resource::<LevelRegistry>()
            .add_systems(Startup, load_content.in_set(ContentSystems));
    }
}

/// Load the gameplay config and every level, then publish the tuning
/// sections as their own resources and start playing.
fn load_content(
    mut gameplay: ResMut<GameplayConfig>,
    mut registry: ResMut<LevelRegistry>,
    mut movement: ResMut<MovementTuning>,
    mut portals: ResMut<PortalTuning>,
    mut effects: ResMut<EffectsTuning>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let config = match load_gameplay_config(Path::new(GAMEPLAY_CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded gameplay config from {}", GAMEPLAY_CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("{}. Using default gameplay config.", e);
            GameplayConfig::default()
        }
    };

    registry.levels = load_levels(&config.levels);
    info!("{}", registry.summary());
    if registry.is_empty() {
        error!("No levels configured! Add level files to the gameplay config.");
    }

    session.level_count = registry.len();

    *movement = config.movement.clone();
    *portals = config.portals.clone();
    *effects = config.effects.clone();
    *gameplay = config;

    next_state.set(GameState::Playing);
}
