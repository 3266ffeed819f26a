use glam::{Vec2, Vec3};
use super::*;

fn create_test_camera() -> Camera {
    let pose = CameraPose::new(Vec3::new(0.0, 1.3, 3.8), Vec3::ZERO);
    Camera::new(CameraConfig::default(), pose, 1280.0, 720.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new() {
    let camera = create_test_camera();
    assert_eq!(camera.viewport(), Vec2::new(1280.0, 720.0));
    assert!((camera.aspect() - 16.0 / 9.0).abs() < 1e-6);
    assert_eq!(camera.config().fov_y_degrees, 65.0);
}

#[test]
fn test_empty_viewport_uses_unit_aspect() {
    let mut camera = create_test_camera();
    camera.set_viewport(0.0, 0.0);
    assert_eq!(camera.aspect(), 1.0);
    assert!(camera.projection_matrix().is_finite());
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_matrix_looks_at_target() {
    let camera = create_test_camera();
    let in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(in_view.x.abs() < 1e-5);
    assert!(in_view.y.abs() < 1e-5);
    assert!(in_view.z < 0.0);
}

#[test]
fn test_set_pose_updates_view() {
    let mut camera = create_test_camera();
    let before = *camera.view_matrix();
    camera.set_pose(CameraPose::new(Vec3::new(2.0, 0.0, 3.4), Vec3::ZERO));
    assert_ne!(*camera.view_matrix(), before);
    assert_eq!(camera.pose().position, Vec3::new(2.0, 0.0, 3.4));
}

#[test]
fn test_view_projection_matrix() {
    let camera = create_test_camera();
    let vp = camera.view_projection_matrix();
    assert_eq!(vp, *camera.projection_matrix() * *camera.view_matrix());
}

#[test]
fn test_straight_down_view_is_finite() {
    let mut camera = create_test_camera();
    camera.set_pose(CameraPose::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO));
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn test_coincident_pose_is_finite() {
    let mut camera = create_test_camera();
    camera.set_pose(CameraPose::new(Vec3::ONE, Vec3::ONE));
    assert!(camera.view_matrix().is_finite());
}

// ============================================================================
// project_to_viewport
// ============================================================================

#[test]
fn test_target_projects_to_center() {
    let camera = create_test_camera();
    let screen = camera.project_to_viewport(Vec3::ZERO).unwrap();
    assert!(screen.abs_diff_eq(Vec2::new(640.0, 360.0), 1e-2));
}

#[test]
fn test_point_above_target_projects_above_center() {
    let camera = create_test_camera();
    let screen = camera.project_to_viewport(Vec3::new(0.0, 0.5, 0.0)).unwrap();
    assert!(screen.y < 360.0);
}

#[test]
fn test_point_behind_camera_is_hidden() {
    let camera = create_test_camera();
    assert!(camera.project_to_viewport(Vec3::new(0.0, 1.3, 10.0)).is_none());
}

#[test]
fn test_point_outside_view_is_hidden() {
    let camera = create_test_camera();
    assert!(camera.project_to_viewport(Vec3::new(100.0, 0.0, 0.0)).is_none());
}
