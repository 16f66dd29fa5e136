//! Content domain: unit tests for level parsing, validation and config.

use bevy::prelude::*;

use super::data::LevelObject;
use super::loader::{parse_gameplay_config, parse_level};
use super::validation::{LevelValidationError, validate_level};
use super::{GameplayConfig, LevelRegistry, MissingSpawnPolicy, ObjectKind};

fn record(kind: ObjectKind, x: f32, y: f32, size: Option<(f32, f32)>) -> LevelObject {
    LevelObject {
        kind,
        x,
        y,
        width: size.map(|s| s.0),
        height: size.map(|s| s.1),
        angle: None,
    }
}

// ----------------------------------------------------------------------------
// Level files
// ----------------------------------------------------------------------------

#[test]
fn test_parse_minimal_level() {
    let json = r#"[
        {"type": "spawn", "x": 0, "y": 0},
        {"type": "ground", "x": 0, "y": 5, "width": 20, "height": 1},
        {"type": "goal", "x": 10, "y": 5, "width": 1, "height": 1}
    ]"#;

    let level = parse_level("level0.json", json);
    assert!(level.is_ok(), "{:?}", level.err());
    let Ok(level) = level else { return };

    assert_eq!(level.spawn, Some(Vec2::ZERO));
    assert_eq!(level.objects.len(), 2);
    assert_eq!(level.count_of(ObjectKind::Ground), 1);
    assert_eq!(level.count_of(ObjectKind::Goal), 1);

    // Editor y grows downward; the world is y-up
    let ground = &level.objects[0];
    assert_eq!(ground.position, Vec2::new(0.0, -5.0));
    assert_eq!(ground.size, Vec2::new(20.0, 1.0));
    assert_eq!(ground.angle, 0.0);
}

#[test]
fn test_editor_aliases_are_accepted() {
    let json = r#"[
        {"type": "spike", "x": 1, "y": 1, "width": 1, "height": 1, "angle": 0},
        {"type": "coin", "x": 2, "y": 1, "width": 1, "height": 1, "angle": 0}
    ]"#;

    let level = parse_level("aliases.json", json);
    assert!(level.is_ok_and(|l| l.count_of(ObjectKind::Hazard) == 1
        && l.count_of(ObjectKind::Collectible) == 1));
}

#[test]
fn test_angle_is_mirrored_into_world_space() {
    let json = r#"[{"type": "ground", "x": 0, "y": 0, "width": 4, "height": 1, "angle": 0.5}]"#;
    let level = parse_level("tilted.json", json);
    assert!(level.is_ok_and(|l| (l.objects[0].angle + 0.5).abs() < 1e-6));
}

#[test]
fn test_unknown_type_rejects_level() {
    let json = r#"[{"type": "lava", "x": 0, "y": 0, "width": 1, "height": 1}]"#;
    let err = parse_level("bad_type.json", json);
    assert!(err.is_err_and(|e| e.file == "bad_type.json"));
}

#[test]
fn test_malformed_json_rejects_level() {
    assert!(parse_level("broken.json", "[{\"type\": ").is_err());
}

#[test]
fn test_spawn_ignores_size_and_angle() {
    let json = r#"[{"type": "spawn", "x": 3, "y": -2, "width": 9, "height": 9, "angle": 1}]"#;
    let level = parse_level("spawn.json", json);
    assert!(level.is_ok_and(|l| l.spawn == Some(Vec2::new(3.0, 2.0)) && l.objects.is_empty()));
}

#[test]
fn test_level_without_spawn_is_valid() {
    let objects = [record(ObjectKind::Ground, 0.0, 0.0, Some((5.0, 1.0)))];
    let level = validate_level("nospawn", &objects);
    assert!(level.is_ok_and(|l| l.spawn.is_none()));
}

// ----------------------------------------------------------------------------
// Validation
// ----------------------------------------------------------------------------

#[test]
fn test_missing_width_is_reported() {
    let mut goal = record(ObjectKind::Goal, 0.0, 0.0, Some((1.0, 1.0)));
    goal.width = None;

    let errors = validate_level("missing", &[goal]).err().unwrap_or_default();
    assert_eq!(
        errors,
        vec![LevelValidationError::MissingField {
            index: 0,
            kind: ObjectKind::Goal,
            field: "width",
        }]
    );
}

#[test]
fn test_multiple_spawns_rejected() {
    let objects = [
        record(ObjectKind::Spawn, 0.0, 0.0, None),
        record(ObjectKind::Spawn, 1.0, 0.0, None),
    ];
    let errors = validate_level("two_spawns", &objects).err().unwrap_or_default();
    assert!(errors.contains(&LevelValidationError::MultipleSpawns { count: 2 }));
}

#[test]
fn test_non_positive_and_non_finite_rejected() {
    let objects = [
        record(ObjectKind::Ground, 0.0, 0.0, Some((0.0, 1.0))),
        record(ObjectKind::Hazard, f32::NAN, 0.0, Some((1.0, 1.0))),
    ];
    let errors = validate_level("bad_values", &objects).err().unwrap_or_default();

    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], LevelValidationError::NonPositiveSize { index: 0, .. }));
    assert_eq!(errors[1], LevelValidationError::NonFinite { index: 1 });
}

#[test]
fn test_rejected_level_reports_every_problem() {
    let json = r#"[
        {"type": "ground", "x": 0, "y": 0, "height": 1},
        {"type": "coin", "x": 0, "y": 0, "width": 1}
    ]"#;
    let err = parse_level("two_problems.json", json);
    assert!(err.is_err_and(|e| e.message.contains("width") && e.message.contains("height")));
}

// ----------------------------------------------------------------------------
// Gameplay config
// ----------------------------------------------------------------------------

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_gameplay_config("empty.ron", "()");
    assert!(config.is_ok());
    let Ok(config) = config else { return };

    assert_eq!(config.movement.speed, 12.0);
    assert_eq!(config.portals.cooldown_ms, 300);
    assert_eq!(config.levels.level_files.len(), 3);
    assert_eq!(config.levels.missing_spawn, MissingSpawnPolicy::KeepPosition);
}

#[test]
fn test_partial_config_overrides_only_named_fields() {
    let ron = r#"(
        movement: (jump_speed: 25.0),
        levels: (missing_spawn: WorldOrigin, level_files: ["a.json"]),
    )"#;
    let config = parse_gameplay_config("partial.ron", ron);
    assert!(config.is_ok(), "{:?}", config.as_ref().err());
    let Ok(config) = config else { return };

    assert_eq!(config.movement.jump_speed, 25.0);
    assert_eq!(config.movement.speed, 12.0);
    assert_eq!(config.levels.missing_spawn, MissingSpawnPolicy::WorldOrigin);
    assert_eq!(config.levels.level_files, vec!["a.json".to_string()]);
    assert_eq!(config.levels.level_dir, "assets/levels");
}

#[test]
fn test_invalid_config_is_an_error() {
    assert!(parse_gameplay_config("bad.ron", "(movement: 7)").is_err());
}

#[test]
fn test_shipped_config_parses() {
    let contents = include_str!("../../assets/data/gameplay.ron");
    let config = parse_gameplay_config("gameplay.ron", contents);
    assert!(config.is_ok(), "{:?}", config.err());
    let default_files = GameplayConfig::default().levels.level_files;
    assert!(config.is_ok_and(|c| c.levels.level_files == default_files));
}

#[test]
fn test_shipped_levels_parse() {
    let levels = [
        ("level0.json", include_str!("../../assets/levels/level0.json")),
        ("level1.json", include_str!("../../assets/levels/level1.json")),
        ("level2.json", include_str!("../../assets/levels/level2.json")),
    ];
    for (file, contents) in levels {
        let level = parse_level(file, contents);
        assert!(level.is_ok(), "{}: {:?}", file, level.err());
        assert!(level.is_ok_and(|l| l.spawn.is_some() && l.count_of(ObjectKind::Goal) == 1));
    }
}

// ----------------------------------------------------------------------------
// Registry
// ----------------------------------------------------------------------------

#[test]
fn test_registry_keeps_rejected_slots() {
    let registry = LevelRegistry {
        levels: vec![
            parse_level("ok.json", r#"[{"type": "spawn", "x": 0, "y": 0}]"#),
            parse_level("bad.json", "not json"),
        ],
    };

    assert_eq!(registry.len(), 2);
    assert!(registry.level(0).is_some_and(|l| l.is_ok()));
    assert!(registry.level(1).is_some_and(|l| l.is_err()));
    assert!(registry.level(2).is_none());
    assert!(registry.summary().contains("1 valid, 1 rejected"));
}
