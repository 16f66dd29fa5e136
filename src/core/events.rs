//! Core domain: messages for level flow and visual feedback.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// What the level runtime should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelRequest {
    /// Clear and rebuild the current level index
    Reload,
    /// Clear and build the level the session now points at
    Advance,
    /// The last level is done; stop playing
    Complete,
}

#[derive(Debug)]
pub struct LevelRequestEvent {
    pub request: LevelRequest,
}

impl Message for LevelRequestEvent {}

/// Which reaction produced a burst; picks the particle colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Hazard,
    Collectible,
    Goal,
}

/// Fire-and-forget particle burst at a world position.
#[derive(Debug)]
pub struct BurstEvent {
    pub position: Vec2,
    pub kind: BurstKind,
}

impl Message for BurstEvent {}
