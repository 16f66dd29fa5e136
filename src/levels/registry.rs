//! Levels domain: the live level's bodies keyed by entity.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::CollisionGroup;

/// What the runtime remembers about one instantiated level body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelEntry {
    pub group: CollisionGroup,
    pub position: Vec2,
}

/// Every body the current level instantiated, player excluded.
///
/// Collision reactions look bodies up here by collider id, so removing an
/// entry is enough to stop it reacting even before its despawn is applied.
#[derive(Resource, Debug, Default)]
pub struct LevelEntities {
    entries: HashMap<Entity, LevelEntry>,
}

impl LevelEntities {
    pub fn insert(&mut self, entity: Entity, entry: LevelEntry) {
        self.entries.insert(entity, entry);
    }

    pub fn get(&self, entity: Entity) -> Option<&LevelEntry> {
        self.entries.get(&entity)
    }

    pub fn remove(&mut self, entity: Entity) -> Option<LevelEntry> {
        self.entries.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, group: CollisionGroup) -> usize {
        self.entries.values().filter(|e| e.group == group).count()
    }

    /// Empty the registry, handing back every entity for despawning.
    pub fn drain(&mut self) -> Vec<Entity> {
        self.entries.drain().map(|(entity, _)| entity).collect()
    }

    /// For a contact between `a` and `b`, the registered body touching the
    /// player. `None` unless exactly one side is the player.
    pub fn resolve_pair(&self, a: Entity, b: Entity, player: Entity) -> Option<(Entity, LevelEntry)> {
        let other = if a == player {
            b
        } else if b == player {
            a
        } else {
            return None;
        };
        self.get(other).map(|entry| (other, *entry))
    }
}
