use super::*;
use glam::Vec3;

fn poses() -> (CameraPose, CameraPose) {
    (
        CameraPose::new(Vec3::new(0.0, 1.3, 3.8), Vec3::ZERO),
        CameraPose::new(Vec3::new(-0.595, 0.3, 2.35), Vec3::new(-0.85, 0.05, 0.85)),
    )
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn test_progress_clamps_before_and_after() {
    let (a, b) = poses();
    let t = ViewTransition::new(a, b, 1000.0, 800.0);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(1000.0), 0.0);
    assert!((t.progress(1400.0) - 0.5).abs() < 1e-6);
    assert_eq!(t.progress(1800.0), 1.0);
    assert_eq!(t.progress(99_999.0), 1.0);
}

#[test]
fn test_zero_duration_is_complete() {
    let (a, b) = poses();
    let t = ViewTransition::new(a, b, 1000.0, 0.0);
    assert_eq!(t.progress(1000.0), 1.0);
    assert_eq!(t.sample(1000.0), (b, true));
}

#[test]
fn test_negative_duration_is_complete() {
    let (a, b) = poses();
    let t = ViewTransition::new(a, b, 1000.0, -5.0);
    assert_eq!(t.sample(0.0), (b, true));
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_sample_at_start_is_start_pose() {
    let (a, b) = poses();
    let (pose, done) = ViewTransition::new(a, b, 500.0, 800.0).sample(500.0);
    assert!(!done);
    assert!(pose.abs_diff_eq(&a, 1e-6));
}

#[test]
fn test_sample_at_end_is_exact_end_pose() {
    let (a, b) = poses();
    let (pose, done) = ViewTransition::new(a, b, 500.0, 800.0).sample(1300.0);
    assert!(done);
    assert_eq!(pose, b);
}

#[test]
fn test_sample_after_end_does_not_overshoot() {
    let (a, b) = poses();
    let t = ViewTransition::new(a, b, 500.0, 800.0);
    for now in [1300.0, 1301.0, 2000.0, 1.0e9] {
        assert_eq!(t.sample(now), (b, true));
    }
}

#[test]
fn test_sample_is_eased() {
    let (a, b) = poses();
    let t = ViewTransition::new(a, b, 0.0, 800.0);
    let (pose, _) = t.sample(400.0);
    let expected = a.lerp(&b, 0.875);
    assert!(pose.abs_diff_eq(&expected, 1e-5));
}

#[test]
fn test_sample_stays_between_endpoints() {
    let (a, b) = poses();
    let t = ViewTransition::new(a, b, 0.0, 600.0);
    let lo = a.position.min(b.position);
    let hi = a.position.max(b.position);
    for i in 0..=60 {
        let (pose, _) = t.sample(i as f64 * 10.0);
        assert!(pose.position.cmpge(lo - 1e-6).all());
        assert!(pose.position.cmple(hi + 1e-6).all());
    }
}
