//! Levels domain: turning placed objects into bodies and placing the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{LevelDef, MissingSpawnPolicy, ObjectKind, PlacedObject};
use crate::effects::{CollectibleVisual, GoalVisual};
use crate::levels::{LevelBody, LevelEntities, LevelEntry};
use crate::movement::{CollisionGroup, classify};

const LEVEL_Z: f32 = 0.0;

fn object_color(kind: ObjectKind) -> Color {
    match kind {
        ObjectKind::Ground => Color::srgb(0.35, 0.4, 0.35),
        ObjectKind::Hazard => Color::srgb(0.9, 0.2, 0.2),
        ObjectKind::Collectible => Color::srgb(0.95, 0.8, 0.2),
        ObjectKind::Goal => Color::srgb(0.3, 0.9, 0.4),
        ObjectKind::Spawn => Color::NONE,
    }
}

/// Create the body and its visual for one placed object and register it.
/// Returns `None` for kinds that never become bodies.
pub fn spawn_level_object(
    commands: &mut Commands,
    entities: &mut LevelEntities,
    object: &PlacedObject,
) -> Option<Entity> {
    let group = classify(object.kind)?;
    let size = object.size;

    let mut body = commands.spawn((
        LevelBody,
        Transform::from_translation(object.position.extend(LEVEL_Z))
            .with_rotation(Quat::from_rotation_z(object.angle)),
        Visibility::default(),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        group.layers(),
    ));

    // Pickups and the goal are walked through, not stood on
    if matches!(group, CollisionGroup::Collectible | CollisionGroup::Goal) {
        body.insert(Sensor);
    }

    let color = object_color(object.kind);
    body.with_children(|parent| {
        let mut visual = parent.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::default(),
        ));
        match group {
            CollisionGroup::Goal => {
                visual.insert(GoalVisual);
            }
            CollisionGroup::Collectible => {
                visual.insert(CollectibleVisual);
            }
            _ => {}
        }
    });

    let entity = body.id();
    entities.insert(
        entity,
        LevelEntry {
            group,
            position: object.position,
        },
    );
    Some(entity)
}

/// Where the player starts a level, or `None` to leave it in place.
pub fn spawn_point(level: &LevelDef, policy: MissingSpawnPolicy) -> Option<Vec2> {
    match (level.spawn, policy) {
        (Some(spawn), _) => Some(spawn),
        (None, MissingSpawnPolicy::KeepPosition) => None,
        (None, MissingSpawnPolicy::WorldOrigin) => Some(Vec2::ZERO),
    }
}
