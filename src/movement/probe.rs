//! Movement domain: ray probes for adjacent surfaces and portal targets.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::layers::is_ground;
use crate::movement::{MovementTuning, SurfaceContacts};

/// Hits collected per ray; enough to see past sensors and props to terrain.
pub const MAX_PROBE_HITS: u32 = 16;

/// One raw intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    pub normal: Vec2,
}

/// The first ground surface along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub entity: Entity,
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
}

/// Pick the nearest hit whose body is ground, ignoring anything else the
/// ray crosses first.
pub fn first_ground_hit(
    origin: Vec2,
    direction: Dir2,
    hits: impl IntoIterator<Item = RayHit>,
    is_ground: impl Fn(Entity) -> bool,
) -> Option<SurfaceHit> {
    let mut hits: Vec<RayHit> = hits.into_iter().collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    hits.into_iter()
        .find(|hit| is_ground(hit.entity))
        .map(|hit| SurfaceHit {
            entity: hit.entity,
            point: origin + *direction * hit.distance,
            normal: hit.normal,
            distance: hit.distance,
        })
}

/// Ray queries against the physics world, classified through collision groups.
#[derive(SystemParam)]
pub struct SurfaceProbe<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    layers: Query<'w, 's, &'static CollisionLayers>,
}

impl SurfaceProbe<'_, '_> {
    pub fn is_ground(&self, entity: Entity) -> bool {
        self.layers.get(entity).is_ok_and(is_ground)
    }

    /// First ground surface along `direction` within `range`, skipping `exclude`.
    pub fn cast_for_ground(
        &self,
        origin: Vec2,
        direction: Dir2,
        range: f32,
        exclude: Entity,
    ) -> Option<SurfaceHit> {
        let filter = SpatialQueryFilter::default().with_excluded_entities([exclude]);
        let hits = self.spatial_query.ray_hits(
            origin,
            direction,
            range,
            MAX_PROBE_HITS,
            true,
            &filter,
        );

        first_ground_hit(
            origin,
            direction,
            hits.into_iter().map(|hit| RayHit {
                entity: hit.entity,
                distance: hit.distance,
                normal: hit.normal,
            }),
            |entity| self.is_ground(entity),
        )
    }

    pub fn touches_ground(&self, origin: Vec2, direction: Dir2, reach: f32, exclude: Entity) -> bool {
        self.cast_for_ground(origin, direction, reach, exclude)
            .is_some()
    }

    /// Floor and wall checks from the player's center.
    pub fn contacts(
        &self,
        origin: Vec2,
        half_extents: Vec2,
        tuning: &MovementTuning,
        player: Entity,
    ) -> SurfaceContacts {
        let floor_reach = half_extents.y + tuning.floor_probe_margin;
        let wall_reach = half_extents.x + tuning.wall_probe_margin;

        SurfaceContacts {
            on_ground: self.touches_ground(origin, Dir2::NEG_Y, floor_reach, player),
            on_wall_left: self.touches_ground(origin, Dir2::NEG_X, wall_reach, player),
            on_wall_right: self.touches_ground(origin, Dir2::X, wall_reach, player),
        }
    }
}
