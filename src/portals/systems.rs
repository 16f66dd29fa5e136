//! Portals domain: aiming, placement and transit systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::MainCamera;
use crate::movement::{CollisionGroup, Player, PlayerState, SurfaceProbe};
use crate::portals::teleport::{firing_direction, portal_angle, resolve_teleport, teleport_exit};
use crate::portals::{FirePortalEvent, Portal, PortalColor, PortalInstance, PortalPair, PortalTuning};

const PORTAL_Z: f32 = 4.0;

/// Map mouse clicks to fire requests aimed at the cursor's world position.
pub(crate) fn read_fire_input(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut fire_events: MessageWriter<FirePortalEvent>,
) {
    let pressed: Vec<PortalColor> = PortalColor::ALL
        .into_iter()
        .filter(|color| mouse.just_pressed(color.mouse_button()))
        .collect();
    if pressed.is_empty() {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(target) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    for color in pressed {
        fire_events.write(FirePortalEvent { color, target });
    }
}

pub(crate) fn fire_portals(
    mut commands: Commands,
    mut fire_events: MessageReader<FirePortalEvent>,
    tuning: Res<PortalTuning>,
    mut pair: ResMut<PortalPair>,
    probe: SurfaceProbe,
    player_query: Query<(Entity, &Transform), With<Player>>,
) {
    let Ok((player, player_transform)) = player_query.single() else {
        for _ in fire_events.read() {}
        return;
    };
    let origin = player_transform.translation.truncate();

    for event in fire_events.read() {
        let Some(direction) = firing_direction(origin, event.target) else {
            continue;
        };

        let Some(hit) = probe.cast_for_ground(origin, direction, tuning.range, player) else {
            debug!("[PORTAL] {:?} shot hit no surface", event.color);
            continue;
        };

        let angle = portal_angle(hit.normal);
        let entity = spawn_portal(&mut commands, event.color, hit.point, angle, &tuning);

        let placed = PortalInstance {
            entity,
            position: hit.point,
            angle,
            normal: hit.normal,
        };
        if let Some(old) = pair.replace(event.color, placed) {
            commands.entity(old.entity).try_despawn();
        }

        info!(
            "[PORTAL] Placed {:?} at ({:.2}, {:.2}) facing ({:.2}, {:.2})",
            event.color, hit.point.x, hit.point.y, hit.normal.x, hit.normal.y
        );
    }
}

pub(crate) fn spawn_portal(
    commands: &mut Commands,
    color: PortalColor,
    position: Vec2,
    angle: f32,
    tuning: &PortalTuning,
) -> Entity {
    commands
        .spawn((
            Portal { color },
            Sprite {
                color: color.tint(),
                custom_size: Some(Vec2::new(tuning.width, tuning.height)),
                ..default()
            },
            Transform::from_translation(position.extend(PORTAL_Z))
                .with_rotation(Quat::from_rotation_z(angle)),
            RigidBody::Static,
            Collider::rectangle(tuning.width, tuning.height),
            Sensor,
            CollisionEventsEnabled,
            // Only overlaps other neutral bodies, i.e. the player
            CollisionLayers::new(CollisionGroup::Neutral, CollisionGroup::Neutral),
        ))
        .id()
}

/// Remove both portals and forget them.
pub(crate) fn clear_portals(commands: &mut Commands, pair: &mut PortalPair) {
    for portal in pair.take_all() {
        commands.entity(portal.entity).try_despawn();
    }
}

pub(crate) fn teleport_player(
    time: Res<Time<Virtual>>,
    tuning: Res<PortalTuning>,
    pair: Res<PortalPair>,
    mut collision_events: MessageReader<CollisionStart>,
    mut player_query: Query<
        (Entity, &mut Transform, &mut LinearVelocity, &mut PlayerState),
        With<Player>,
    >,
) {
    // Read everything up front; a transit moves the player mid-step
    let contacts: Vec<(Entity, Entity)> = collision_events
        .read()
        .map(|event| (event.collider1, event.collider2))
        .collect();

    let Ok((player, mut transform, mut velocity, mut state)) = player_query.single_mut() else {
        return;
    };
    let now = time.elapsed();

    for (a, b) in contacts {
        let cooling_down = state.teleport_cooldown.is_active(now);
        let Some(exit) = resolve_teleport(&pair, a, b, player, cooling_down) else {
            continue;
        };

        // The solver may already have stopped the player against the
        // surface behind the portal
        let incoming = state.pre_step_velocity;
        let out = teleport_exit(&exit, incoming, tuning.exit_boost);

        transform.translation.x = out.position.x;
        transform.translation.y = out.position.y;
        velocity.0 = out.velocity;
        state.pre_step_velocity = out.velocity;
        state.teleport_cooldown.arm(now, tuning.cooldown());

        info!(
            "[PORTAL] Teleported to ({:.2}, {:.2}), speed {:.2} -> {:.2}",
            out.position.x,
            out.position.y,
            incoming.length(),
            out.velocity.length()
        );
    }
}
