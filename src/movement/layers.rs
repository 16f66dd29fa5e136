//! Movement domain: collision groups and world classification.

use avian2d::prelude::*;

use crate::content::ObjectKind;

/// Physics layers for collision filtering.
///
/// Every static or sensor body in a level carries exactly one group. Actors
/// and portal sensors are `Neutral`, so nothing mistakes them for terrain.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionGroup {
    #[default]
    Neutral,
    /// Surfaces the player stands on, wall-jumps from and fires portals at
    Ground,
    /// Touching resets the level
    Hazard,
    /// Removed and scored on touch
    Collectible,
    /// Advances to the next level
    Goal,
}

impl CollisionGroup {
    /// Groups a level body can carry, in classification order.
    pub const CLASSIFIED: [CollisionGroup; 4] = [
        CollisionGroup::Ground,
        CollisionGroup::Hazard,
        CollisionGroup::Collectible,
        CollisionGroup::Goal,
    ];

    /// Layers for a body of this group that interacts with everything.
    pub fn layers(self) -> CollisionLayers {
        CollisionLayers::new(self, LayerMask::ALL)
    }
}

/// Map a level object kind to its collision group.
/// `spawn` has no group because it never becomes a body.
pub fn classify(kind: ObjectKind) -> Option<CollisionGroup> {
    match kind {
        ObjectKind::Ground => Some(CollisionGroup::Ground),
        ObjectKind::Hazard => Some(CollisionGroup::Hazard),
        ObjectKind::Collectible => Some(CollisionGroup::Collectible),
        ObjectKind::Goal => Some(CollisionGroup::Goal),
        ObjectKind::Spawn => None,
    }
}

/// The group a body belongs to, read from its memberships.
/// Bodies without a classified membership read as `Neutral`.
pub fn group_of(layers: &CollisionLayers) -> CollisionGroup {
    CollisionGroup::CLASSIFIED
        .into_iter()
        .find(|group| layers.memberships.0 & group.to_bits() != 0)
        .unwrap_or(CollisionGroup::Neutral)
}

pub fn is_ground(layers: &CollisionLayers) -> bool {
    group_of(layers) == CollisionGroup::Ground
}
