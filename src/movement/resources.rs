//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// World units are metres; the camera draws 60 pixels per unit.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Upward speed applied by a ground, air or wall jump
    pub jump_speed: f32,
    /// Fraction of `jump_speed` pushed away from a wall on a wall jump
    pub wall_jump_push: f32,
    pub wall_jump_lockout_ms: u64,
    pub gravity: f32,
    pub player_size: f32,
    /// Extra reach past the player's half extent for the floor probe
    pub floor_probe_margin: f32,
    /// Extra reach past the player's half extent for the wall probes
    pub wall_probe_margin: f32,
    pub friction: f32,
    pub linear_damping: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 12.0,
            jump_speed: 30.0,
            wall_jump_push: 0.5,
            wall_jump_lockout_ms: 150,
            gravity: 100.0,
            player_size: 1.0,
            floor_probe_margin: 0.1,
            wall_probe_margin: 0.01,
            friction: 0.1,
            linear_damping: 0.6,
        }
    }
}

impl MovementTuning {
    pub fn wall_jump_lockout(&self) -> Duration {
        Duration::from_millis(self.wall_jump_lockout_ms)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.player_size * 0.5)
    }

    /// Apex height of a single jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }
}

/// Held-key state plus a latched jump edge.
///
/// Keys are sampled every frame; the jump edge stays latched until the next
/// fixed tick consumes it, so a press is never lost or repeated while held.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump_requested: bool,
}

impl MovementInput {
    /// Horizontal intent in {-1, 0, +1}. Opposing keys cancel out.
    pub fn horizontal_intent(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Take the latched jump edge, clearing it.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }
}
