//! Movement domain: floor and wall detection systems.

use bevy::prelude::*;

use crate::movement::controller::refresh_contacts;
use crate::movement::probe::SurfaceProbe;
use crate::movement::{MovementTuning, Player, PlayerBody, PlayerState};

pub(crate) fn detect_surfaces(
    probe: SurfaceProbe,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &PlayerBody, &mut PlayerState), With<Player>>,
) {
    for (entity, transform, body, mut state) in &mut query {
        let was = state.contacts;
        let contacts = probe.contacts(
            transform.translation.truncate(),
            body.half_extents,
            &tuning,
            entity,
        );

        if refresh_contacts(&mut state, contacts) {
            debug!("Landed: can_double_jump={}", state.can_double_jump);
        } else if was.on_ground && !contacts.on_ground {
            debug!("Left ground: can_double_jump={}", state.can_double_jump);
        }

        if contacts.on_wall_left != was.on_wall_left || contacts.on_wall_right != was.on_wall_right
        {
            debug!(
                "Wall contact: left={}, right={}",
                contacts.on_wall_left, contacts.on_wall_right
            );
        }
    }
}
