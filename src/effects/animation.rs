//! Effects domain: burst kinematics and idle animation curves.

use bevy::prelude::*;
use rand::Rng;

use crate::effects::EffectsTuning;

/// Frames per second the frame-counted lifetimes refer to.
const REFERENCE_FPS: f32 = 60.0;

/// Period divisor of the goal/collectible wobble, in seconds.
const WOBBLE_PERIOD: f32 = 0.3;

/// Initial velocity and lifetime (seconds) of one burst particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    pub velocity: Vec2,
    pub lifetime: f32,
}

/// Roll a full burst: random direction, speed and lifetime per particle.
pub fn roll_burst(rng: &mut impl Rng, tuning: &EffectsTuning) -> Vec<ParticleSeed> {
    // Inverted ranges from a hand-edited config would panic the sampler
    let speed_max = tuning.speed_max.max(tuning.speed_min);
    let frames_max = tuning.lifetime_max_frames.max(tuning.lifetime_min_frames);

    (0..tuning.burst_count)
        .map(|_| {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(tuning.speed_min..=speed_max);
            let frames = rng.random_range(tuning.lifetime_min_frames..=frames_max);
            ParticleSeed {
                velocity: Vec2::from_angle(angle) * speed,
                lifetime: frames / REFERENCE_FPS,
            }
        })
        .collect()
}

/// Opacity for a particle with `remaining` seconds left; fully opaque at
/// 100 frames and fading linearly to zero.
pub fn particle_alpha(remaining: f32) -> f32 {
    (remaining * REFERENCE_FPS / 100.0).clamp(0.0, 1.0)
}

/// Goal visual scale and sway angle at `seconds` of virtual time.
pub fn goal_pulse(seconds: f32) -> (f32, f32) {
    let wave = (seconds / WOBBLE_PERIOD).sin();
    (1.3 + wave * 0.2, wave * 0.2)
}

/// Collectible visual rotation at `seconds` of virtual time.
pub fn collectible_spin(seconds: f32) -> f32 {
    (seconds / WOBBLE_PERIOD).sin() * std::f32::consts::TAU
}
