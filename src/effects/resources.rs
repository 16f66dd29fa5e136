//! Effects domain: burst tuning and the seeded RNG.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Burst parameters. Lifetimes are counted in 60 Hz frames.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EffectsTuning {
    pub seed: u64,
    pub burst_count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub lifetime_min_frames: f32,
    pub lifetime_max_frames: f32,
    /// Downward pull on particles, units/s²
    pub gravity: f32,
    pub particle_size: f32,
}

impl Default for EffectsTuning {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe,
            burst_count: 100,
            speed_min: 6.0,
            speed_max: 12.0,
            lifetime_min_frames: 50.0,
            lifetime_max_frames: 100.0,
            gravity: 28.8,
            particle_size: 0.2,
        }
    }
}

/// RNG for visual effects only. Seeded so bursts replay identically.
#[derive(Resource)]
pub struct EffectsRng(pub ChaCha8Rng);

impl EffectsRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for EffectsRng {
    fn default() -> Self {
        Self::from_seed(EffectsTuning::default().seed)
    }
}
