//! Data definitions for level files and the gameplay config.
//!
//! Level files are JSON arrays of `LevelObject` records in editor space
//! (y grows downward, angles clockwise). `LevelDef` is the validated,
//! world-space form that the level runtime instantiates.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::effects::EffectsTuning;
use crate::movement::MovementTuning;
use crate::portals::PortalTuning;

// ============================================================================
// Level objects (assets/levels/*.json)
// ============================================================================

/// Kind of object placed in a level file.
///
/// `spike` and `coin` are the level editor's names for hazards and
/// collectibles and are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Ground,
    #[serde(alias = "spike")]
    Hazard,
    #[serde(alias = "coin")]
    Collectible,
    Goal,
    Spawn,
}

impl ObjectKind {
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Ground => "ground",
            ObjectKind::Hazard => "hazard",
            ObjectKind::Collectible => "collectible",
            ObjectKind::Goal => "goal",
            ObjectKind::Spawn => "spawn",
        }
    }
}

/// One record of a level file, exactly as written by the editor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelObject {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub angle: Option<f32>,
}

impl LevelObject {
    /// Center of the object in world space (y up).
    pub fn world_position(&self) -> Vec2 {
        Vec2::new(self.x, -self.y)
    }

    /// Counter-clockwise rotation in world space.
    pub fn world_angle(&self) -> f32 {
        -self.angle.unwrap_or(0.0)
    }
}

/// A validated, non-spawn object ready to become a body + visual.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub kind: ObjectKind,
    pub position: Vec2,
    pub size: Vec2,
    pub angle: f32,
}

/// A validated level in world space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelDef {
    pub name: String,
    pub spawn: Option<Vec2>,
    pub objects: Vec<PlacedObject>,
}

impl LevelDef {
    pub fn count_of(&self, kind: ObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }
}

// ============================================================================
// Gameplay config (assets/data/gameplay.ron)
// ============================================================================

/// What to do with the player when a level has no spawn object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum MissingSpawnPolicy {
    /// Leave the player where the previous level left it.
    #[default]
    KeepPosition,
    /// Move the player to the world origin.
    WorldOrigin,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelSettings {
    pub level_dir: String,
    pub level_files: Vec<String>,
    pub missing_spawn: MissingSpawnPolicy,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            level_dir: "assets/levels".to_string(),
            level_files: vec![
                "level0.json".to_string(),
                "level1.json".to_string(),
                "level2.json".to_string(),
            ],
            missing_spawn: MissingSpawnPolicy::default(),
        }
    }
}

/// Top-level gameplay configuration; every section falls back to defaults.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub movement: MovementTuning,
    pub portals: PortalTuning,
    pub levels: LevelSettings,
    pub effects: EffectsTuning,
}
