//! Portals domain: messages for portal placement.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::portals::PortalColor;

/// Request to fire a portal of `color` from the player toward `target`
/// (world coordinates).
#[derive(Debug)]
pub struct FirePortalEvent {
    pub color: PortalColor,
    pub target: Vec2,
}

impl Message for FirePortalEvent {}
