//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_surfaces;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_horizontal_movement, apply_jump, expire_deadlines, record_pre_step_velocity,
};
