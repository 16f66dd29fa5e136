//! Core domain: camera, run clock and restart input.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameSession, LevelRequest, LevelRequestEvent};
use crate::movement::Player;

/// Screen pixels per world unit.
pub const PIXELS_PER_UNIT: f32 = 60.0;

/// Fraction of the remaining distance the camera closes per 60 Hz frame.
pub const CAMERA_FOLLOW_RATE: f32 = 0.05;

#[derive(Component, Debug)]
pub struct MainCamera;

/// Follow blend for a frame of `delta_secs`, so the camera eases at the same
/// speed whatever the frame rate.
pub fn follow_blend(delta_secs: f32) -> f32 {
    1.0 - (1.0 - CAMERA_FOLLOW_RATE).powf(delta_secs * 60.0)
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let blend = follow_blend(time.delta_secs());
    let target = player.translation.truncate();
    let current = camera.translation.truncate();
    let next = current.lerp(target, blend);
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}

/// Start the run clock and build the first level.
pub(crate) fn begin_run(
    time: Res<Time<Virtual>>,
    mut session: ResMut<GameSession>,
    mut requests: MessageWriter<LevelRequestEvent>,
) {
    if session.started_at.is_none() {
        session.started_at = Some(time.elapsed());
    }
    info!("[LEVEL] Starting at level index {}", session.current_level);
    requests.write(LevelRequestEvent {
        request: LevelRequest::Reload,
    });
}

pub(crate) fn read_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<LevelRequestEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        info!("[LEVEL] Restart requested");
        requests.write(LevelRequestEvent {
            request: LevelRequest::Reload,
        });
    }
}
