use super::*;
use crate::animation::ease::Ease;
use crate::animation::timing::TimingProps;
use crate::reveal::options::AnimateOnMount;

fn area() -> DrawingArea {
    DrawingArea::new(100.0, 50.0)
}

fn linear_opts(mount: bool) -> RevealOptions {
    RevealOptions {
        animate_on_mount: mount.then_some(AnimateOnMount::Foreground),
        animation_duration_ms: 300.0,
        animation_props: TimingProps { ease: Ease::Linear },
        mount_animation_duration_ms: Some(1000.0),
        ..RevealOptions::default()
    }
}

#[test]
fn first_evaluation_settles_without_completing_mount() {
    let mut c = RevealController::new(&linear_opts(true));
    let f = c.step(ActivitySignal::idle(), area(), 16.0);
    assert_eq!(f.width, 20.0);
    assert_eq!(f.target.timing.duration_ms, 1000.0);
    assert!(f.target.uses_mount_config);
    assert_eq!(f.state, RevealState::default());
}

#[test]
fn mount_reveal_runs_with_mount_timing_then_flips_flag() {
    let mut c = RevealController::new(&linear_opts(true));
    c.step(ActivitySignal::idle(), area(), 0.0);
    c.commit_mount();

    let f = c.step(ActivitySignal::idle(), area(), 16.0);
    assert_eq!(f.target.width, 120.0);
    assert_eq!(f.width, 20.0);

    let f = c.step(ActivitySignal::idle(), area(), 500.0);
    assert!((f.width - 70.0).abs() < 1e-9);
    assert!(!f.state.has_completed_mount_animation);

    let f = c.step(ActivitySignal::idle(), area(), 500.0);
    assert_eq!(f.width, 120.0);
    assert!(f.state.has_completed_mount_animation);
    assert!(!f.target.uses_mount_config);
    assert_eq!(f.target.timing.duration_ms, 300.0);
}

#[test]
fn settled_tween_is_not_restarted_when_only_config_changes() {
    let mut c = RevealController::new(&linear_opts(true));
    c.step(ActivitySignal::idle(), area(), 0.0);
    c.commit_mount();
    c.step(ActivitySignal::idle(), area(), 0.0);
    c.step(ActivitySignal::idle(), area(), 1000.0);
    assert!(c.state().has_completed_mount_animation);

    let f = c.step(ActivitySignal::idle(), area(), 16.0);
    assert_eq!(f.width, 120.0);
}

#[test]
fn active_scrub_interrupts_mount_and_marks_it_complete() {
    let mut c = RevealController::new(&linear_opts(true));
    c.step(ActivitySignal::idle(), area(), 0.0);
    c.commit_mount();
    c.step(ActivitySignal::idle(), area(), 0.0);
    c.step(ActivitySignal::idle(), area(), 100.0);

    let f = c.step(ActivitySignal::scrubbing(42.0), area(), 16.0);
    assert_eq!(f.target.timing.duration_ms, 0.0);
    assert_eq!(f.width, 42.0);
    assert!(f.state.has_completed_mount_animation);

    // Releasing returns to the resting width with the standard config.
    let f = c.step(ActivitySignal::idle(), area(), 16.0);
    assert_eq!(f.target.width, 120.0);
    assert_eq!(f.target.timing.duration_ms, 300.0);
    assert_eq!(f.width, 42.0);
    let f = c.step(ActivitySignal::idle(), area(), 150.0);
    assert!((f.width - 81.0).abs() < 1e-9);
}

#[test]
fn scrub_tracks_every_frame_instantly() {
    let mut c = RevealController::new(&linear_opts(false));
    c.step(ActivitySignal::idle(), area(), 0.0);
    for x in [5.0, 17.5, 80.0, 33.0] {
        let f = c.step(ActivitySignal::scrubbing(x), area(), 16.0);
        assert_eq!(f.width, x);
    }
}

#[test]
fn negative_offset_floors_resting_width() {
    let opts = RevealOptions {
        width_offset: -150.0,
        ..linear_opts(false)
    };
    let c = RevealController::new(&opts);
    assert_eq!(c.target(ActivitySignal::idle(), area()).width, 0.0);
}

#[test]
fn nan_scrub_position_floors_to_zero() {
    let c = RevealController::new(&linear_opts(false));
    let t = c.target(ActivitySignal::scrubbing(f64::NAN), area());
    assert_eq!(t.width, 0.0);
}

#[test]
fn commit_and_complete_are_idempotent() {
    let mut c = RevealController::new(&linear_opts(true));
    for _ in 0..3 {
        c.commit_mount();
        c.complete_mount_animation();
    }
    assert_eq!(
        c.state(),
        RevealState {
            has_mounted: true,
            has_completed_mount_animation: true,
        }
    );
}

#[test]
fn path_width_change_redirects_from_current_value() {
    let mut c = RevealController::new(&linear_opts(false));
    c.step(ActivitySignal::idle(), area(), 0.0);
    let wider = area().with_path_width(400.0);
    let f = c.step(ActivitySignal::idle(), wider, 16.0);
    assert_eq!(f.target.width, 420.0);
    assert_eq!(f.width, 120.0);
    let f = c.step(ActivitySignal::idle(), wider, 150.0);
    assert!((f.width - 270.0).abs() < 1e-9);
}

#[test]
fn reconfigure_keeps_session_state() {
    let mut c = RevealController::new(&linear_opts(true));
    c.step(ActivitySignal::idle(), area(), 0.0);
    c.commit_mount();
    c.reconfigure(&RevealOptions {
        width_offset: 0.0,
        ..linear_opts(true)
    });
    assert!(c.state().has_mounted);
    assert_eq!(c.target(ActivitySignal::idle(), area()).width, 100.0);
}
