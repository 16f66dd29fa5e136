//! Debug domain: overlay toggles, level skipping and gizmo drawing.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameSession, LevelRequestEvent};
use crate::debug::state::DebugState;
use crate::movement::{MovementTuning, Player, PlayerBody, PlayerState};
use crate::portals::Portal;

const PROBE_HIT_COLOR: Color = Color::srgb(0.2, 1.0, 0.3);
const PROBE_MISS_COLOR: Color = Color::srgb(1.0, 0.25, 0.25);

/// Toggle gizmo drawing with F1
pub(crate) fn toggle_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("[DEBUG] Gizmos {}", if debug_state.show_gizmos { "on" } else { "off" });
    }
}

/// N skips straight to the next level, as if its goal were reached
pub(crate) fn skip_level(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<GameSession>,
    mut requests: MessageWriter<LevelRequestEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyN) {
        return;
    }
    let request = session.advance_level();
    info!("[DEBUG] Skipping to level index {}", session.current_level);
    requests.write(LevelRequestEvent { request });
}

pub(crate) fn gizmos_enabled(debug_state: Res<DebugState>) -> bool {
    debug_state.show_gizmos
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Transform, &PlayerBody, &PlayerState), With<Player>>,
) {
    for (transform, body, state) in &query {
        let origin = transform.translation.truncate();
        let floor = body.half_extents.y + tuning.floor_probe_margin;
        let wall = body.half_extents.x + tuning.wall_probe_margin;

        let probes = [
            (Vec2::NEG_Y * floor, state.contacts.on_ground),
            (Vec2::NEG_X * wall, state.contacts.on_wall_left),
            (Vec2::X * wall, state.contacts.on_wall_right),
        ];
        for (reach, touching) in probes {
            let color = if touching { PROBE_HIT_COLOR } else { PROBE_MISS_COLOR };
            gizmos.line_2d(origin, origin + reach, color);
        }
    }
}

/// Portals lie with their local x axis along the surface normal.
pub(crate) fn draw_portal_gizmos(mut gizmos: Gizmos, query: Query<(&Transform, &Portal)>) {
    for (transform, portal) in &query {
        let origin = transform.translation.truncate();
        let normal = (transform.rotation * Vec3::X).truncate();
        gizmos.arrow_2d(origin, origin + normal, portal.color.tint());
    }
}
