//! Core domain: unit tests for session progression and camera easing.

use std::time::Duration;

use super::systems::follow_blend;
use super::{GameSession, LevelRequest};

fn session_with_levels(count: usize) -> GameSession {
    GameSession {
        level_count: count,
        ..Default::default()
    }
}

#[test]
fn test_advance_moves_to_next_level() {
    let mut session = session_with_levels(3);

    assert_eq!(session.advance_level(), LevelRequest::Advance);
    assert_eq!(session.current_level, 1);
    assert!(!session.is_finished());
}

#[test]
fn test_advance_past_last_level_completes() {
    let mut session = session_with_levels(2);
    session.current_level = 1;

    assert_eq!(session.advance_level(), LevelRequest::Complete);
    assert!(session.is_finished());

    // Index never runs further past the end
    assert_eq!(session.advance_level(), LevelRequest::Complete);
    assert_eq!(session.current_level, 2);
}

#[test]
fn test_score_accumulates_and_resets() {
    let mut session = session_with_levels(1);
    session.add_score(1);
    session.add_score(1);
    assert_eq!(session.score, 2);

    session.reset_score();
    assert_eq!(session.score, 0);
}

#[test]
fn test_run_seconds_measures_from_start() {
    let session = GameSession {
        started_at: Some(Duration::from_millis(1_500)),
        ..Default::default()
    };

    let seconds = session.run_seconds(Duration::from_millis(4_000));
    assert!((seconds - 2.5).abs() < 1e-6);
}

#[test]
fn test_run_seconds_without_start_is_zero() {
    let session = GameSession::default();
    assert_eq!(session.run_seconds(Duration::from_secs(9)), 0.0);
}

#[test]
fn test_level_label() {
    let mut session = session_with_levels(3);
    assert_eq!(session.level_label(), "Level 1 / 3");

    session.current_level = 3;
    assert_eq!(session.level_label(), "Level 3 / 3");

    assert_eq!(GameSession::default().level_label(), "No levels");
}

// ----------------------------------------------------------------------------
// Camera
// ----------------------------------------------------------------------------

#[test]
fn test_follow_blend_matches_rate_at_sixty_hz() {
    let blend = follow_blend(1.0 / 60.0);
    assert!((blend - 0.05).abs() < 1e-5);
}

#[test]
fn test_follow_blend_is_frame_rate_independent() {
    // Two half-length frames close the same distance as one full frame
    let half = follow_blend(1.0 / 120.0);
    let remaining_after_two = (1.0 - half) * (1.0 - half);
    let remaining_after_one = 1.0 - follow_blend(1.0 / 60.0);
    assert!((remaining_after_two - remaining_after_one).abs() < 1e-5);
}

#[test]
fn test_follow_blend_zero_delta_holds_still() {
    assert_eq!(follow_blend(0.0), 0.0);
}
