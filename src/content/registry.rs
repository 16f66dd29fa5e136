//! LevelRegistry resource holding the ordered level list.

use bevy::prelude::*;

use super::data::LevelDef;
use super::loader::ContentLoadError;

/// Ordered levels, indexed 0..N-1. Rejected levels keep their slot as an
/// error so the level index always matches the configured file list.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: Vec<Result<LevelDef, ContentLoadError>>,
}

impl LevelRegistry {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Look up a level by index. `None` when the index is out of range.
    pub fn level(&self, index: usize) -> Option<Result<&LevelDef, &ContentLoadError>> {
        self.levels.get(index).map(|slot| slot.as_ref())
    }

    /// Returns a summary of loaded levels for logging.
    pub fn summary(&self) -> String {
        let valid = self.levels.iter().filter(|l| l.is_ok()).count();
        format!(
            "LevelRegistry loaded: {} levels ({} valid, {} rejected)",
            self.levels.len(),
            valid,
            self.levels.len() - valid
        )
    }
}
