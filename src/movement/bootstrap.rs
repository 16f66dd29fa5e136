//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CollisionGroup, MovementTuning, Player, PlayerBody, PlayerState};

pub(crate) const PLAYER_COLOR: Color = Color::srgb(0.95, 0.55, 0.75);
const PLAYER_Z: f32 = 5.0;

/// Spawn the single player body. It is never despawned; level loads only
/// move it.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let size = Vec2::splat(tuning.player_size);

    commands.spawn((
        // Identity & Movement
        (
            Player,
            PlayerState::default(),
            PlayerBody {
                half_extents: tuning.half_extents(),
            },
        ),
        // Rendering
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, PLAYER_Z),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(tuning.friction),
            LinearDamping(tuning.linear_damping),
            CollisionEventsEnabled,
            // Neutral: collides with everything, never read as terrain
            CollisionLayers::new(CollisionGroup::Neutral, LayerMask::ALL),
        ),
    ));

    info!(
        "Spawned player: size={}, speed={}, jump_speed={}",
        tuning.player_size, tuning.speed, tuning.jump_speed
    );
}

/// Apply the configured gravity to the physics world.
pub(crate) fn apply_gravity_tuning(tuning: Res<MovementTuning>, mut gravity: ResMut<Gravity>) {
    gravity.0 = Vec2::NEG_Y * tuning.gravity;
}
