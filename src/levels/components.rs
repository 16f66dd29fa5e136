use bevy::prelude::*;

/// Root entity of an instantiated level object (the physics body).
#[derive(Component, Debug)]
pub struct LevelBody;
