//! Movement domain: per-tick control rules for the player.
//!
//! These functions hold the jump/steer state machine with no ECS access,
//! so the systems in `systems::movement` stay thin and the rules are
//! testable on plain values.

use bevy::prelude::*;
use std::time::Duration;

use crate::movement::{MovementTuning, PlayerState, SurfaceContacts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

/// Which jump writes a single press produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpOutcome {
    pub ground: bool,
    pub air: bool,
    pub wall: Option<WallSide>,
}

impl JumpOutcome {
    pub fn jumped(&self) -> bool {
        self.ground || self.air || self.wall.is_some()
    }
}

/// Store this tick's probe results. Standing on ground re-arms the air jump.
/// Returns true on the tick the player lands.
pub fn refresh_contacts(state: &mut PlayerState, contacts: SurfaceContacts) -> bool {
    let landed = contacts.on_ground && !state.contacts.on_ground;
    state.contacts = contacts;
    if contacts.on_ground {
        state.can_double_jump = true;
    }
    landed
}

/// Whether directional input currently controls horizontal velocity.
pub fn steering_locked(state: &PlayerState, now: Duration) -> bool {
    state.wall_jump_lockout.is_active(now) || state.teleport_cooldown.is_active(now)
}

/// Apply horizontal intent. With no intent, or while locked out, velocity is
/// left untouched so wall-jump and portal momentum carry through.
pub fn steer(
    state: &PlayerState,
    velocity: &mut Vec2,
    intent: f32,
    tuning: &MovementTuning,
    now: Duration,
) -> bool {
    if intent == 0.0 || steering_locked(state, now) {
        return false;
    }
    velocity.x = intent * tuning.speed;
    true
}

/// Resolve one jump press against the current contacts.
///
/// Ground and air jumps are exclusive. A wall jump is checked independently
/// afterwards and overwrites the whole velocity, so it wins when both fire.
pub fn jump(
    state: &mut PlayerState,
    velocity: &mut Vec2,
    tuning: &MovementTuning,
    now: Duration,
) -> JumpOutcome {
    let mut outcome = JumpOutcome::default();
    let contacts = state.contacts;

    if contacts.on_ground {
        velocity.y = tuning.jump_speed;
        state.can_double_jump = true;
        outcome.ground = true;
    } else if state.can_double_jump {
        velocity.y = tuning.jump_speed;
        state.can_double_jump = false;
        outcome.air = true;
    }

    let push = tuning.jump_speed * tuning.wall_jump_push;
    if contacts.on_wall_left {
        *velocity = Vec2::new(push, tuning.jump_speed);
        state.wall_jump_lockout.arm(now, tuning.wall_jump_lockout());
        outcome.wall = Some(WallSide::Left);
    }
    if contacts.on_wall_right {
        *velocity = Vec2::new(-push, tuning.jump_speed);
        state.wall_jump_lockout.arm(now, tuning.wall_jump_lockout());
        outcome.wall = Some(WallSide::Right);
    }

    outcome
}
