#![cfg(feature = "filter-exponential")]

use sensor_smooth::{Channel, Config, Exponential, Filter, Rejection, SmoothingEngine};

type Engine = SmoothingEngine<f32, Exponential<f32>>;

fn engine(measures: usize) -> Engine {
    let mut engine = Engine::default();
    engine.begin(measures).expect("Valid channel count");
    engine
}

#[test]
fn test_range_rejects_and_freezes_output() {
    let mut engine = engine(1);
    engine.set_minimum(0, 10.0).unwrap();
    engine.set_maximum(0, 20.0).unwrap();

    assert!(engine.set_value(0, 15.0).unwrap());
    assert_eq!(engine.value(0).unwrap(), 15.0);

    for raw in [9.99, -100.0, 20.01, 1e6] {
        assert!(!engine.set_value(0, raw).unwrap(), "raw={}", raw);
        assert!(engine.is_invalid(0).unwrap());
        assert_eq!(engine.value(0).unwrap(), 15.0);
    }

    // Limits themselves are inside the valid range
    assert!(engine.set_value(0, 10.0).unwrap());
    assert!(engine.set_value(0, 20.0).unwrap());
    assert!(engine.is_valid(0).unwrap());
}

#[test]
fn test_rejection_before_first_acceptance_keeps_initial_output() {
    let mut engine = engine(1);
    engine.set_minimum(0, 50.0).unwrap();

    assert!(!engine.set_value(0, 10.0).unwrap());
    assert_eq!(engine.value(0).unwrap(), 0.0);

    // The rejected sample did not seed the recurrence
    assert!(engine.set_value(0, 60.0).unwrap());
    assert_eq!(engine.value(0).unwrap(), 60.0);
}

#[test]
fn test_delta_rejection_does_not_touch_filter() {
    let mut gated = engine(1);
    gated.filter_mut(0).unwrap().set_factor(0.5);
    gated.set_max_delta(0, 5.0).unwrap();

    let mut reference = Exponential::new(0.5);

    assert!(gated.set_value(0, 100.0).unwrap());
    reference.update(100.0_f32);

    // Spike exceeds the delta and is dropped
    assert!(!gated.set_value(0, 150.0).unwrap());
    assert_eq!(gated.value(0).unwrap(), 100.0);

    assert!(gated.set_value(0, 104.0).unwrap());
    assert_eq!(gated.value(0).unwrap(), reference.update(104.0));
}

#[test]
fn test_delta_measured_from_last_accepted_input() {
    let mut engine = engine(1);
    engine.set_max_delta(0, 10.0).unwrap();

    assert!(engine.set_value(0, 50.0).unwrap());
    assert!(!engine.set_value(0, 70.0).unwrap());
    // Still compared against 50.0, not the rejected 70.0
    assert!(!engine.set_value(0, 61.0).unwrap());
    assert!(engine.set_value(0, 60.0).unwrap());
    assert_eq!(engine.input(0).unwrap(), 60.0);
}

#[test]
fn test_delta_inactive_until_first_acceptance() {
    let mut engine = engine(1);
    engine.set_max_delta(0, 1.0).unwrap();

    assert!(engine.set_value(0, 1000.0).unwrap());
    assert!(!engine.set_value(0, 0.0).unwrap());
}

#[test]
fn test_negative_delta_is_normalized() {
    let mut engine = engine(1);
    engine.set_max_delta(0, -3.0).unwrap();
    assert_eq!(engine.max_delta(0).unwrap(), Some(3.0));

    engine.set_value(0, 10.0).unwrap();
    assert!(engine.set_value(0, 13.0).unwrap());
    assert!(!engine.set_value(0, 9.0).unwrap());
}

#[test]
fn test_inverted_limits_are_swapped() {
    let mut engine = engine(1);
    engine.set_maximum(0, 10.0).unwrap();
    engine.set_minimum(0, 30.0).unwrap();

    assert_eq!(engine.minimum(0).unwrap(), Some(10.0));
    assert_eq!(engine.maximum(0).unwrap(), Some(30.0));
    assert!(engine.set_value(0, 20.0).unwrap());
}

#[test]
fn test_reset_limit_matches_never_set() {
    let samples = [5.0, 50.0, -20.0, 33.0, 7.5];

    let mut configured = engine(1);
    configured.set_minimum(0, 10.0).unwrap();
    configured.set_maximum(0, 40.0).unwrap();
    configured.set_max_delta(0, 2.0).unwrap();
    configured.reset_minimum(0).unwrap();
    configured.reset_maximum(0).unwrap();
    configured.reset_max_delta(0).unwrap();

    let mut plain = engine(1);

    for raw in samples {
        assert_eq!(
            configured.set_value(0, raw).unwrap(),
            plain.set_value(0, raw).unwrap()
        );
        assert_eq!(configured.value(0).unwrap(), plain.value(0).unwrap());
    }
    assert_eq!(configured.minimum(0).unwrap(), None);
    assert_eq!(configured.maximum(0).unwrap(), None);
    assert_eq!(configured.max_delta(0).unwrap(), None);
}

#[test]
fn test_broadcast_limits_reach_every_channel() {
    let mut engine = engine(3);
    engine.set_minimum_all(0.0);
    engine.set_maximum_all(100.0);
    engine.set_max_delta_all(25.0);

    for idx in 0..3 {
        assert_eq!(engine.minimum(idx).unwrap(), Some(0.0));
        assert_eq!(engine.maximum(idx).unwrap(), Some(100.0));
        assert_eq!(engine.max_delta(idx).unwrap(), Some(25.0));
        assert!(!engine.set_value(idx, 101.0).unwrap());
    }

    engine.reset_minimum_all();
    engine.reset_maximum_all();
    engine.reset_max_delta_all();

    for idx in 0..3 {
        assert!(engine.set_value(idx, 101.0).unwrap());
        assert!(engine.set_value(idx, -500.0).unwrap());
    }
}

#[test]
fn test_channels_are_independent() {
    let mut engine = engine(2);
    engine.set_maximum(1, 10.0).unwrap();

    assert!(engine.set_value(0, 42.0).unwrap());
    assert!(!engine.set_value(1, 42.0).unwrap());

    assert_eq!(engine.value(0).unwrap(), 42.0);
    assert_eq!(engine.value(1).unwrap(), 0.0);
    assert_eq!(engine.maximum(0).unwrap(), None);
}

#[test]
fn test_input_tracks_last_accepted_sample() {
    let mut engine = engine(1);
    engine.set_maximum(0, 100.0).unwrap();

    assert_eq!(engine.input(0).unwrap(), 0.0);
    engine.set_value(0, 80.0).unwrap();
    engine.set_value(0, 120.0).unwrap();
    assert_eq!(engine.input(0).unwrap(), 80.0);
}

#[test]
fn test_invalid_sentinel_reported_until_first_acceptance() {
    let config = Config::default().with_minimum(0.0).with_invalid(f32::NAN);
    let mut engine = Engine::new(config);
    engine.begin(2).unwrap();

    assert!(engine.value(0).unwrap().is_nan());
    assert!(engine.input(0).unwrap().is_nan());

    assert!(!engine.set_value(0, -1.0).unwrap());
    assert!(engine.value(0).unwrap().is_nan());

    assert!(engine.set_value(0, 3.0).unwrap());
    assert_eq!(engine.value(0).unwrap(), 3.0);
    assert!(engine.value(1).unwrap().is_nan());
}

#[test]
fn test_channel_reports_rejection_reason() {
    let mut channel = Channel::new(Exponential::<i32>::default(), None);
    channel.set_minimum(-10);
    channel.set_maximum(10);
    channel.set_max_delta(4);

    assert_eq!(channel.check(-11), Some(Rejection::BelowMinimum));
    assert_eq!(channel.check(11), Some(Rejection::AboveMaximum));
    assert_eq!(channel.check(8), None);

    assert!(channel.set_value(0));
    assert!(channel.is_running());
    assert_eq!(channel.check(8), Some(Rejection::DeltaExceeded));
    assert_eq!(channel.check(-4), None);
}

#[test]
fn test_reset_restarts_channel_but_keeps_limits() {
    let mut engine = engine(1);
    engine.set_maximum(0, 50.0).unwrap();
    engine.set_value(0, 40.0).unwrap();
    engine.set_value(0, 20.0).unwrap();

    engine.reset(0).unwrap();

    assert_eq!(engine.value(0).unwrap(), 0.0);
    assert!(engine.is_valid(0).unwrap());
    assert_eq!(engine.maximum(0).unwrap(), Some(50.0));
    assert!(!engine.channel(0).unwrap().is_running());

    // Seeds again from the next accepted sample
    assert!(engine.set_value(0, 30.0).unwrap());
    assert_eq!(engine.value(0).unwrap(), 30.0);
}

#[test]
fn test_signed_delta_across_zero() {
    let mut engine: SmoothingEngine<i16, Exponential<i16>> = SmoothingEngine::default();
    engine.begin(1).unwrap();
    engine.set_max_delta(0, 100).unwrap();

    assert!(engine.set_value(0, 20_000).unwrap());
    assert!(!engine.set_value(0, -20_000).unwrap());
    assert_eq!(engine.value(0).unwrap(), 20_000);
    assert_eq!(engine.input(0).unwrap(), 20_000);

    engine.reset(0).unwrap();
    assert!(engine.set_value(0, -50).unwrap());
    assert!(engine.set_value(0, 50).unwrap());
    assert!(!engine.set_value(0, -51).unwrap());
}

#[test]
fn test_delta_between_signed_extremes() {
    let mut engine: SmoothingEngine<i32, Exponential<i32>> = SmoothingEngine::default();
    engine.begin(1).unwrap();
    engine.set_max_delta(0, i32::MIN).unwrap();

    // Magnitude of i32::MIN saturates
    assert_eq!(engine.max_delta(0).unwrap(), Some(i32::MAX));

    assert!(engine.set_value(0, i32::MAX).unwrap());
    assert!(!engine.set_value(0, i32::MIN).unwrap());
    assert!(engine.set_value(0, 0).unwrap());
}
