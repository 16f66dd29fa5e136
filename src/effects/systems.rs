//! Effects domain: burst spawning, particle integration and idle animation.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{BurstEvent, BurstKind};
use crate::effects::animation::{collectible_spin, goal_pulse, particle_alpha, roll_burst};
use crate::effects::{CollectibleVisual, EffectsRng, EffectsTuning, GoalVisual, Particle};
use crate::movement::PLAYER_COLOR;

const PARTICLE_Z: f32 = 10.0;

fn burst_color(kind: BurstKind) -> Color {
    match kind {
        BurstKind::Hazard => PLAYER_COLOR,
        BurstKind::Collectible => Color::srgb(0.95, 0.8, 0.2),
        BurstKind::Goal => Color::srgb(0.3, 0.9, 0.4),
    }
}

/// Reseed once the configured seed is known.
pub(crate) fn seed_effects_rng(tuning: Res<EffectsTuning>, mut rng: ResMut<EffectsRng>) {
    *rng = EffectsRng::from_seed(tuning.seed);
    debug!("Effects RNG seeded with {:#x}", tuning.seed);
}

pub(crate) fn spawn_bursts(
    mut commands: Commands,
    mut bursts: MessageReader<BurstEvent>,
    tuning: Res<EffectsTuning>,
    mut rng: ResMut<EffectsRng>,
) {
    for burst in bursts.read() {
        let color = burst_color(burst.kind);
        let size = Vec2::splat(tuning.particle_size);

        for seed in roll_burst(&mut rng.0, &tuning) {
            commands.spawn((
                Particle {
                    velocity: seed.velocity,
                    remaining: seed.lifetime,
                },
                Sprite {
                    color: color.with_alpha(particle_alpha(seed.lifetime)),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(burst.position.extend(PARTICLE_Z)),
            ));
        }
    }
}

pub(crate) fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<EffectsTuning>,
    mut query: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform, mut sprite) in &mut query {
        particle.remaining -= dt;
        if particle.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
            continue;
        }

        particle.velocity.y -= tuning.gravity * dt;
        transform.translation += (particle.velocity * dt).extend(0.0);
        sprite.color.set_alpha(particle_alpha(particle.remaining));
    }
}

pub(crate) fn animate_goals(
    time: Res<Time<Virtual>>,
    mut query: Query<&mut Transform, With<GoalVisual>>,
) {
    let (scale, sway) = goal_pulse(time.elapsed_secs());
    for mut transform in &mut query {
        transform.scale = Vec3::new(scale, scale, 1.0);
        transform.rotation = Quat::from_rotation_z(sway);
    }
}

pub(crate) fn spin_collectibles(
    time: Res<Time<Virtual>>,
    mut query: Query<&mut Transform, With<CollectibleVisual>>,
) {
    let rotation = Quat::from_rotation_z(collectible_spin(time.elapsed_secs()));
    for mut transform in &mut query {
        transform.rotation = rotation;
    }
}
