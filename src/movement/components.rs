//! Movement domain: player components and transient state.

use bevy::prelude::*;
use std::time::Duration;

#[derive(Component, Debug)]
pub struct Player;

/// Collision box of the player, used to size surface probes.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerBody {
    pub half_extents: Vec2,
}

/// A point in time after which a transient flag clears itself.
/// Checked every tick instead of scheduling a separate task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Duration>);

impl Deadline {
    pub fn arm(&mut self, now: Duration, length: Duration) {
        self.0 = Some(now + length);
    }

    pub fn is_active(&self, now: Duration) -> bool {
        matches!(self.0, Some(until) if now < until)
    }

    /// Drop the deadline once it has passed. Returns true on the tick it clears.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.0 {
            Some(until) if now >= until => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn until(&self) -> Option<Duration> {
        self.0
    }
}

/// Surfaces adjacent to the player, recomputed every tick.
/// Flags are independent; the player can touch both walls in a narrow shaft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceContacts {
    pub on_ground: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
}

#[derive(Component, Debug, Default)]
pub struct PlayerState {
    pub contacts: SurfaceContacts,
    pub can_double_jump: bool,
    /// Suppresses horizontal air control right after a wall jump
    pub wall_jump_lockout: Deadline,
    /// Suppresses teleporting and steering right after a portal transit
    pub teleport_cooldown: Deadline,
    /// Velocity handed to the last physics step, before contacts resolved it
    pub pre_step_velocity: Vec2,
}

impl PlayerState {
    /// Drop every transient flag, as on a level (re)load.
    pub fn reset_transients(&mut self) {
        self.contacts = SurfaceContacts::default();
        self.can_double_jump = false;
        self.wall_jump_lockout.clear();
        self.teleport_cooldown.clear();
    }
}
