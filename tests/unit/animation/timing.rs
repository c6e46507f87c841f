use super::*;

fn linear(duration_ms: f64) -> TimingConfig {
    TimingConfig::new(duration_ms, TimingProps { ease: Ease::Linear })
}

#[test]
fn linear_tween_interpolates_and_completes_once() {
    let mut tw = Tween::start(0.0, 100.0, linear(100.0));
    assert_eq!(tw.value(), 0.0);

    assert_eq!(tw.advance(25.0), TweenStep::Running);
    assert!((tw.value() - 25.0).abs() < 1e-9);

    assert_eq!(tw.advance(75.0), TweenStep::Completed);
    assert_eq!(tw.value(), 100.0);
    assert!(tw.is_finished());

    assert_eq!(tw.advance(16.0), TweenStep::Idle);
    assert_eq!(tw.value(), 100.0);
}

#[test]
fn zero_duration_jumps_immediately() {
    let mut tw = Tween::start(10.0, 42.0, linear(300.0).instant());
    assert!(tw.is_finished());
    assert_eq!(tw.value(), 42.0);
    assert_eq!(tw.advance(16.0), TweenStep::Idle);
}

#[test]
fn negative_duration_is_treated_as_instant() {
    assert!(linear(-5.0).is_instant());
    assert!(linear(f64::NAN).is_instant());
    assert!(!linear(1.0).is_instant());
}

#[test]
fn non_finite_dt_does_not_advance() {
    let mut tw = Tween::start(0.0, 10.0, linear(100.0));
    assert_eq!(tw.advance(f64::NAN), TweenStep::Running);
    assert_eq!(tw.advance(-50.0), TweenStep::Running);
    assert_eq!(tw.value(), 0.0);
}

#[test]
fn settled_tween_reports_its_value() {
    let tw = Tween::settled(7.5);
    assert!(tw.is_finished());
    assert_eq!(tw.value(), 7.5);
    assert_eq!(tw.target(), 7.5);
    assert_eq!(tw.config().duration_ms, 0.0);
}

#[test]
fn eased_tween_uses_curve() {
    let mut tw = Tween::start(0.0, 100.0, TimingConfig::new(100.0, TimingProps::default()));
    tw.advance(25.0);
    // in-out quad at t=0.25 -> 0.125
    assert!((tw.value() - 12.5).abs() < 1e-9);
}
