//! Portals domain: aiming and transit math.

use bevy::prelude::*;

use crate::portals::{PortalInstance, PortalPair};

/// Where and how fast the player leaves the exit portal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleportExit {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Unit direction from the shooter toward the aimed point.
/// `None` when the target sits on the shooter.
pub fn firing_direction(from: Vec2, target: Vec2) -> Option<Dir2> {
    Dir2::new(target - from).ok()
}

/// Rotation that lays a portal flat against a surface with this normal:
/// its thin axis points along the normal.
pub fn portal_angle(normal: Vec2) -> f32 {
    normal.y.atan2(normal.x)
}

/// Exit state: one normal-length out of the exit portal, launched along the
/// exit normal at the incoming speed plus `boost`. The entry angle does not
/// matter.
pub fn teleport_exit(exit: &PortalInstance, incoming: Vec2, boost: f32) -> TeleportExit {
    TeleportExit {
        position: exit.position + exit.normal,
        velocity: exit.normal * (incoming.length() + boost),
    }
}

/// Decide whether a contact between `a` and `b` teleports the player.
/// Requires one side to be a live portal, the other the player, both colors
/// present and no active cooldown.
pub fn resolve_teleport(
    pair: &PortalPair,
    a: Entity,
    b: Entity,
    player: Entity,
    cooldown_active: bool,
) -> Option<PortalInstance> {
    if cooldown_active || !pair.is_linked() {
        return None;
    }

    let (portal, other) = if pair.color_of(a).is_some() {
        (a, b)
    } else if pair.color_of(b).is_some() {
        (b, a)
    } else {
        return None;
    };

    if other != player {
        return None;
    }

    pair.exit_for(portal).copied()
}
