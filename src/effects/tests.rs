//! Effects domain: unit tests for burst rolls and animation curves.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::EffectsTuning;
use super::animation::{collectible_spin, goal_pulse, particle_alpha, roll_burst};

#[test]
fn test_burst_has_configured_count_and_ranges() {
    let tuning = EffectsTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let burst = roll_burst(&mut rng, &tuning);

    assert_eq!(burst.len(), 100);
    for particle in &burst {
        let speed = particle.velocity.length();
        assert!((6.0 - 1e-4..=12.0 + 1e-4).contains(&speed), "speed {}", speed);
        assert!(
            (50.0 / 60.0..=100.0 / 60.0).contains(&particle.lifetime),
            "lifetime {}",
            particle.lifetime
        );
    }
}

#[test]
fn test_same_seed_same_burst() {
    let tuning = EffectsTuning::default();
    let a = roll_burst(&mut ChaCha8Rng::seed_from_u64(42), &tuning);
    let b = roll_burst(&mut ChaCha8Rng::seed_from_u64(42), &tuning);
    assert_eq!(a, b);
}

#[test]
fn test_inverted_ranges_do_not_panic() {
    let tuning = EffectsTuning {
        speed_min: 5.0,
        speed_max: 1.0,
        lifetime_min_frames: 30.0,
        lifetime_max_frames: 10.0,
        burst_count: 4,
        ..Default::default()
    };
    let burst = roll_burst(&mut ChaCha8Rng::seed_from_u64(1), &tuning);
    assert_eq!(burst.len(), 4);
}

#[test]
fn test_particle_alpha_fades_out() {
    assert_eq!(particle_alpha(100.0 / 60.0), 1.0);
    assert!((particle_alpha(50.0 / 60.0) - 0.5).abs() < 1e-6);
    assert_eq!(particle_alpha(0.0), 0.0);
    assert_eq!(particle_alpha(-1.0), 0.0);
}

#[test]
fn test_goal_pulse_oscillates_around_base_scale() {
    let (scale, sway) = goal_pulse(0.0);
    assert!((scale - 1.3).abs() < 1e-6);
    assert!(sway.abs() < 1e-6);

    for step in 0..100 {
        let (scale, sway) = goal_pulse(step as f32 * 0.07);
        assert!((1.1 - 1e-5..=1.5 + 1e-5).contains(&scale));
        assert!(sway.abs() <= 0.2 + 1e-5);
    }
}

#[test]
fn test_collectible_spin_bounded_by_full_turn() {
    for step in 0..100 {
        assert!(collectible_spin(step as f32 * 0.05).abs() <= std::f32::consts::TAU + 1e-4);
    }
}
