//! Movement domain: locomotion systems for timers, steering and jumps.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{jump, steer};
use crate::movement::{MovementInput, MovementTuning, Player, PlayerState};

pub(crate) fn expire_deadlines(
    time: Res<Time<Virtual>>,
    mut query: Query<&mut PlayerState, With<Player>>,
) {
    let now = time.elapsed();

    for mut state in &mut query {
        if state.wall_jump_lockout.expire(now) {
            debug!("Wall jump lockout cleared");
        }
        if state.teleport_cooldown.expire(now) {
            debug!("Teleport cooldown cleared");
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time<Virtual>>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&PlayerState, &mut LinearVelocity), With<Player>>,
) {
    let now = time.elapsed();
    let intent = input.horizontal_intent();

    for (state, mut velocity) in &mut query {
        steer(state, &mut velocity.0, intent, &tuning, now);
    }
}

pub(crate) fn apply_jump(
    time: Res<Time<Virtual>>,
    mut input: ResMut<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut PlayerState, &mut LinearVelocity), With<Player>>,
) {
    if !input.take_jump() {
        return;
    }
    let now = time.elapsed();

    for (mut state, mut velocity) in &mut query {
        let outcome = jump(&mut state, &mut velocity.0, &tuning, now);
        if outcome.jumped() {
            debug!(
                "Jump: ground={}, air={}, wall={:?}, can_double_jump={}",
                outcome.ground, outcome.air, outcome.wall, state.can_double_jump
            );
        }
    }
}

/// Remember the velocity going into the physics step. Contacts reported by
/// that step are judged against it, since the solver may already have
/// stopped the body.
pub(crate) fn record_pre_step_velocity(
    mut query: Query<(&mut PlayerState, &LinearVelocity), With<Player>>,
) {
    for (mut state, velocity) in &mut query {
        state.pre_step_velocity = velocity.0;
    }
}
