//! Validation of raw level records before anything is instantiated.

use bevy::prelude::*;

use super::data::{LevelDef, LevelObject, ObjectKind, PlacedObject};

/// A schema problem found in a level file.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelValidationError {
    /// More than one `spawn` record.
    MultipleSpawns { count: usize },
    /// A body-producing record lacks a dimension.
    MissingField {
        index: usize,
        kind: ObjectKind,
        field: &'static str,
    },
    /// Width or height is zero or negative.
    NonPositiveSize {
        index: usize,
        width: f32,
        height: f32,
    },
    /// A coordinate, size or angle is NaN or infinite.
    NonFinite { index: usize },
}

impl std::fmt::Display for LevelValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelValidationError::MultipleSpawns { count } => {
                write!(f, "level has {} spawn objects, at most one allowed", count)
            }
            LevelValidationError::MissingField { index, kind, field } => write!(
                f,
                "object #{} ({}) is missing required field '{}'",
                index,
                kind.label(),
                field
            ),
            LevelValidationError::NonPositiveSize {
                index,
                width,
                height,
            } => write!(
                f,
                "object #{} has non-positive size {}x{}",
                index, width, height
            ),
            LevelValidationError::NonFinite { index } => {
                write!(f, "object #{} has a non-finite value", index)
            }
        }
    }
}

impl std::error::Error for LevelValidationError {}

/// Validate raw records and convert them into a world-space `LevelDef`.
/// Returns every problem found; a level with any error is rejected whole.
pub fn validate_level(
    name: &str,
    objects: &[LevelObject],
) -> Result<LevelDef, Vec<LevelValidationError>> {
    let mut errors = Vec::new();
    let mut spawn = None;
    let mut spawn_count = 0;
    let mut placed = Vec::with_capacity(objects.len());

    for (index, object) in objects.iter().enumerate() {
        if !object.x.is_finite() || !object.y.is_finite() {
            errors.push(LevelValidationError::NonFinite { index });
            continue;
        }

        // Spawn ignores width/height/angle even when present.
        if object.kind == ObjectKind::Spawn {
            spawn_count += 1;
            spawn.get_or_insert(object.world_position());
            continue;
        }

        let Some(width) = object.width else {
            errors.push(LevelValidationError::MissingField {
                index,
                kind: object.kind,
                field: "width",
            });
            continue;
        };
        let Some(height) = object.height else {
            errors.push(LevelValidationError::MissingField {
                index,
                kind: object.kind,
                field: "height",
            });
            continue;
        };

        let angle = object.world_angle();
        if !width.is_finite() || !height.is_finite() || !angle.is_finite() {
            errors.push(LevelValidationError::NonFinite { index });
            continue;
        }
        if width <= 0.0 || height <= 0.0 {
            errors.push(LevelValidationError::NonPositiveSize {
                index,
                width,
                height,
            });
            continue;
        }

        placed.push(PlacedObject {
            kind: object.kind,
            position: object.world_position(),
            size: Vec2::new(width, height),
            angle,
        });
    }

    if spawn_count > 1 {
        errors.push(LevelValidationError::MultipleSpawns { count: spawn_count });
    }

    if errors.is_empty() {
        Ok(LevelDef {
            name: name.to_string(),
            spawn,
            objects: placed,
        })
    } else {
        Err(errors)
    }
}
