//! Levels domain: collision dispatch, clearing and (re)loading.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{GameplayConfig, LevelRegistry};
use crate::core::{BurstEvent, GameSession, GameState, LevelRequest, LevelRequestEvent};
use crate::levels::reactions::{ReactionContext, react};
use crate::levels::spawn::{spawn_level_object, spawn_point};
use crate::levels::LevelEntities;
use crate::movement::{Player, PlayerState};
use crate::portals::{PortalPair, clear_portals};

/// Run the reaction table over this step's player contacts.
pub(crate) fn dispatch_level_reactions(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut session: ResMut<GameSession>,
    mut entities: ResMut<LevelEntities>,
    mut requests: MessageWriter<LevelRequestEvent>,
    mut bursts: MessageWriter<BurstEvent>,
    player_query: Query<Entity, With<Player>>,
) {
    let contacts: Vec<(Entity, Entity)> = collision_events
        .read()
        .map(|event| (event.collider1, event.collider2))
        .collect();

    let Ok(player) = player_query.single() else {
        return;
    };

    let mut ctx = ReactionContext {
        session: &mut *session,
        entities: &mut *entities,
    };

    for (a, b) in contacts {
        let Some((entity, _)) = ctx.entities.resolve_pair(a, b, player) else {
            continue;
        };
        let Some(outcome) = react(&mut ctx, entity) else {
            continue;
        };

        if let Some(removed) = outcome.despawn {
            commands.entity(removed).try_despawn();
            debug!("[LEVEL] Collected {:?}, score {}", removed, ctx.session.score);
        }
        if let Some((position, kind)) = outcome.burst {
            bursts.write(BurstEvent { position, kind });
        }
        if let Some(request) = outcome.transition {
            info!("[TRANSITION] {:?} after touching {:?}", request, entity);
            requests.write(LevelRequestEvent { request });
            // The remaining contacts belong to the level being torn down
            break;
        }
    }
}

/// Despawn every level body and both portals. Safe to call on an empty level.
pub(crate) fn clear_level(
    commands: &mut Commands,
    entities: &mut LevelEntities,
    portals: &mut PortalPair,
) {
    let bodies = entities.drain();
    for entity in &bodies {
        commands.entity(*entity).try_despawn();
    }
    clear_portals(commands, portals);

    if !bodies.is_empty() {
        debug!("[LEVEL] Cleared {} bodies", bodies.len());
    }
}

/// Fold a frame's requests into one. Completion wins; otherwise any request
/// rebuilds whatever level the session points at.
pub fn coalesce_requests(requests: impl IntoIterator<Item = LevelRequest>) -> Option<LevelRequest> {
    requests.into_iter().reduce(|acc, next| match (acc, next) {
        (LevelRequest::Complete, _) | (_, LevelRequest::Complete) => LevelRequest::Complete,
        (_, next) => next,
    })
}

pub(crate) fn apply_level_requests(
    mut commands: Commands,
    mut requests: MessageReader<LevelRequestEvent>,
    registry: Res<LevelRegistry>,
    gameplay: Res<GameplayConfig>,
    mut session: ResMut<GameSession>,
    mut entities: ResMut<LevelEntities>,
    mut portals: ResMut<PortalPair>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player_query: Query<(&mut Transform, &mut PlayerState), With<Player>>,
) {
    let Some(request) = coalesce_requests(requests.read().map(|event| event.request)) else {
        return;
    };

    if request == LevelRequest::Complete {
        info!("[TRANSITION] Final goal reached");
        next_state.set(GameState::LevelComplete);
        return;
    }

    clear_level(&mut commands, &mut entities, &mut portals);

    let index = session.current_level;
    let level = match registry.level(index) {
        Some(Ok(level)) => level,
        Some(Err(e)) => {
            error!("[LEVEL] Cannot load level {}: {}", index, e);
            return;
        }
        None => {
            warn!("[LEVEL] No level at index {} ({} configured)", index, registry.len());
            return;
        }
    };

    session.reset_score();
    for object in &level.objects {
        spawn_level_object(&mut commands, &mut entities, object);
    }

    // Only the position moves; the player keeps its velocity across loads
    if let Ok((mut transform, mut state)) = player_query.single_mut() {
        let policy = gameplay.levels.missing_spawn;
        if level.spawn.is_none() {
            warn!("[LEVEL] '{}' has no spawn; applying {:?}", level.name, policy);
        }
        if let Some(spawn) = spawn_point(level, policy) {
            transform.translation.x = spawn.x;
            transform.translation.y = spawn.y;
        }
        state.reset_transients();
    }

    info!(
        "[LEVEL] Loaded '{}' (index {}): {} bodies",
        level.name,
        index,
        entities.len()
    );
}
