//! Effects domain: particle and animated-visual components.

use bevy::prelude::*;

/// A short-lived burst particle. Purely visual.
#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub velocity: Vec2,
    /// Seconds left before despawn
    pub remaining: f32,
}

/// Visual child of a goal body; pulses and sways.
#[derive(Component, Debug)]
pub struct GoalVisual;

/// Visual child of a collectible body; spins.
#[derive(Component, Debug)]
pub struct CollectibleVisual;
