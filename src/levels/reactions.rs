//! Levels domain: what happens when the player touches a level body.
//!
//! One table maps each reacting collision group to a plain function. The
//! functions only touch session data and the registry; despawns, bursts and
//! level transitions are returned for the calling system to apply.

use bevy::prelude::*;

use crate::core::{BurstKind, GameSession, LevelRequest};
use crate::levels::{LevelEntities, LevelEntry};
use crate::movement::CollisionGroup;

pub struct ReactionContext<'a> {
    pub session: &'a mut GameSession,
    pub entities: &'a mut LevelEntities,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReactionOutcome {
    /// Body to despawn now
    pub despawn: Option<Entity>,
    pub burst: Option<(Vec2, BurstKind)>,
    pub transition: Option<LevelRequest>,
}

pub type ReactionFn = fn(&mut ReactionContext<'_>, Entity, LevelEntry) -> ReactionOutcome;

pub const REACTION_TABLE: [(CollisionGroup, ReactionFn); 3] = [
    (CollisionGroup::Hazard, on_hazard),
    (CollisionGroup::Collectible, on_collectible),
    (CollisionGroup::Goal, on_goal),
];

pub fn reaction_for(group: CollisionGroup) -> Option<ReactionFn> {
    REACTION_TABLE
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, reaction)| *reaction)
}

/// Run the reaction for a player contact with `entity`. Returns `None` when
/// the body is unknown (already removed or cleared) or has no reaction.
pub fn react(ctx: &mut ReactionContext<'_>, entity: Entity) -> Option<ReactionOutcome> {
    let entry = *ctx.entities.get(entity)?;
    let reaction = reaction_for(entry.group)?;
    Some(reaction(ctx, entity, entry))
}

fn on_hazard(_ctx: &mut ReactionContext<'_>, _entity: Entity, entry: LevelEntry) -> ReactionOutcome {
    ReactionOutcome {
        despawn: None,
        burst: Some((entry.position, BurstKind::Hazard)),
        transition: Some(LevelRequest::Reload),
    }
}

fn on_collectible(ctx: &mut ReactionContext<'_>, entity: Entity, entry: LevelEntry) -> ReactionOutcome {
    // Removal gates scoring, so a second contact in the same step is a no-op
    if ctx.entities.remove(entity).is_none() {
        return ReactionOutcome::default();
    }
    ctx.session.add_score(1);

    ReactionOutcome {
        despawn: Some(entity),
        burst: Some((entry.position, BurstKind::Collectible)),
        transition: None,
    }
}

fn on_goal(ctx: &mut ReactionContext<'_>, _entity: Entity, entry: LevelEntry) -> ReactionOutcome {
    let request = ctx.session.advance_level();
    let burst = match request {
        LevelRequest::Complete => None,
        _ => Some((entry.position, BurstKind::Goal)),
    };

    ReactionOutcome {
        despawn: None,
        burst,
        transition: Some(request),
    }
}
