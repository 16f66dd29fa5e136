//! Portals domain: tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PortalTuning {
    /// How far a fired portal ray reaches
    pub range: f32,
    /// Speed added to the player on every transit
    pub exit_boost: f32,
    pub cooldown_ms: u64,
    /// Thickness along the surface normal
    pub width: f32,
    /// Length along the surface
    pub height: f32,
}

impl Default for PortalTuning {
    fn default() -> Self {
        Self {
            range: 20.0,
            exit_boost: 12.0,
            cooldown_ms: 300,
            width: 0.2,
            height: 2.0,
        }
    }
}

impl PortalTuning {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}
