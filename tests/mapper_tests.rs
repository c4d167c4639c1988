//! Tilt mapper tests - thresholds, response curves and rate limiting

use tilt_tetris::core::{GameConfig, InputMapper, RateLimiter};
use tilt_tetris::types::{TiltAction, TiltSample};

fn mapper() -> InputMapper {
    InputMapper::new(&GameConfig::default())
}

#[test]
fn test_level_sample_does_nothing() {
    let mut m = mapper();
    let intent = m.map(TiltSample::level(), 0);
    assert!(intent.actions.is_empty());
    assert_eq!(intent.fall_interval_ms, 1000);
}

#[test]
fn test_shift_magnitude_grows_with_tilt() {
    let mut m = mapper();
    assert_eq!(m.map_shift(2.0, 0), Some(1));
    assert_eq!(m.map_shift(-4.0, 100), Some(-4));
    assert_eq!(m.map_shift(6.5, 200), Some(10));
    // Past the threshold but rounding to zero: no proposal.
    assert_eq!(m.map_shift(1.6, 300), None);
}

#[test]
fn test_moves_are_rate_limited() {
    let mut m = mapper();
    assert_eq!(m.map_shift(3.0, 1000), Some(2));
    assert_eq!(m.map_shift(3.0, 1010), None);
    assert_eq!(m.map_shift(3.0, 1019), None);
    assert_eq!(m.map_shift(3.0, 1020), Some(2));
}

#[test]
fn test_rotations_are_rate_limited() {
    let mut m = mapper();
    let tilt_away = TiltSample::new(0.0, -4.0, 0.0);

    let rotations = (0..100u64)
        .map(|i| m.map(tilt_away, i * 10))
        .filter(|intent| intent.actions.contains(&TiltAction::Rotate))
        .count();
    // 0 ms and 500 ms inside a 1 s window.
    assert_eq!(rotations, 2);
}

#[test]
fn test_rotate_threshold_is_strict() {
    let mut m = mapper();
    assert!(!m.map_rotate(-3.0, 0));
    assert!(m.map_rotate(-3.01, 0));
}

#[test]
fn test_zero_rounded_shift_keeps_move_slot() {
    let mut m = mapper();
    assert_eq!(m.map_shift(1.8, 0), None);
    assert_eq!(m.move_limiter().last_ms(), None);
    assert_eq!(m.map_shift(3.0, 1), Some(2));
}

#[test]
fn test_fall_interval_curve() {
    let m = mapper();
    assert_eq!(m.fall_interval_ms(0.0), 1000);
    assert_eq!(m.fall_interval_ms(5.0), 1000);
    assert_eq!(m.fall_interval_ms(6.0), 400);
    assert_eq!(m.fall_interval_ms(9.5), 100);
    // Backward tilt never slows the fall below the base rate.
    assert_eq!(m.fall_interval_ms(-8.0), 1000);
    assert_eq!(m.fall_interval_ms(f32::NAN), 1000);
}

#[test]
fn test_combined_sample_rotates_before_shifting() {
    let mut m = mapper();
    let intent = m.map(TiltSample::new(-2.5, -3.5, 0.0), 0);
    assert_eq!(
        intent.actions.as_slice(),
        &[TiltAction::Rotate, TiltAction::Shift(-1)]
    );
}

#[test]
fn test_rate_limiter_first_action_passes() {
    let mut limiter = RateLimiter::new(500);
    assert!(limiter.ready(0));
    assert!(limiter.try_fire(0));
    assert!(!limiter.ready(499));
    assert!(limiter.try_fire(500));
    assert_eq!(limiter.last_ms(), Some(500));
}
