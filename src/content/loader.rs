//! Loaders for the gameplay config (RON) and level files (JSON).

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayConfig, LevelDef, LevelObject, LevelSettings};
use super::validation::validate_level;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a gameplay config from RON text.
pub fn parse_gameplay_config(file: &str, contents: &str) -> Result<GameplayConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the gameplay config from disk.
pub fn load_gameplay_config(path: &Path) -> Result<GameplayConfig, ContentLoadError> {
    let contents = read_file(path)?;
    parse_gameplay_config(&path.display().to_string(), &contents)
}

/// Parse and validate one level from JSON text.
///
/// Unknown object types and malformed records fail here, so a level is
/// either accepted whole or rejected with a diagnostic.
pub fn parse_level(file: &str, contents: &str) -> Result<LevelDef, ContentLoadError> {
    let objects: Vec<LevelObject> =
        serde_json::from_str(contents).map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    validate_level(file, &objects).map_err(|errors| ContentLoadError {
        file: file.to_string(),
        message: errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; "),
    })
}

/// Load one level file from disk.
pub fn load_level_file(path: &Path) -> Result<LevelDef, ContentLoadError> {
    let contents = read_file(path)?;
    parse_level(&path.display().to_string(), &contents)
}

/// Load every level listed in the settings, in order.
/// A failed level keeps its slot so indices stay aligned with the file list.
pub fn load_levels(settings: &LevelSettings) -> Vec<Result<LevelDef, ContentLoadError>> {
    let base = Path::new(&settings.level_dir);
    settings
        .level_files
        .iter()
        .map(|file| {
            let result = load_level_file(&base.join(file));
            match &result {
                Ok(level) => debug!(
                    "[LEVEL] Parsed '{}': {} objects, spawn={:?}",
                    file,
                    level.objects.len(),
                    level.spawn
                ),
                Err(e) => error!("[LEVEL] Rejected level: {}", e),
            }
            result
        })
        .collect()
}
