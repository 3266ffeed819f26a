use super::*;
use glam::{Vec3, Vec4};
use crate::config::{ChoreographyConfig, OrbitLimits};
use crate::error::Error;
use crate::scene::{Geometry, LightKind, SceneNode};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn showroom_scene() -> SceneGraph {
    let mut scene = SceneGraph::new();
    let room = scene.add_node(None, SceneNode::group("Showroom")).unwrap();
    scene
        .add_node(
            Some(room),
            SceneNode::mesh("Rug_Persian", Geometry::quad_xz(2.0, 2.0), Material::new("wool", Vec4::ONE)),
        )
        .unwrap();
    scene
        .add_node(Some(room), SceneNode::light("Spot", LightKind::Spot, 3.0))
        .unwrap();
    scene
}

fn empty_room() -> SceneGraph {
    let mut scene = SceneGraph::new();
    scene
        .add_node(None, SceneNode::mesh("Floor", Geometry::quad_xz(4.0, 4.0), Material::new("oak", Vec4::ONE)))
        .unwrap();
    scene
}

fn showroom_loader(_reference: &str) -> Result<SceneGraph> {
    Ok(showroom_scene())
}

fn empty_room_loader(_reference: &str) -> Result<SceneGraph> {
    Ok(empty_room())
}

fn failing_loader(reference: &str) -> Result<SceneGraph> {
    Err(Error::AssetLoad(format!("404 {}", reference)))
}

/// Counts how often the cache actually hits the loader
struct CountingLoader {
    calls: usize,
}

impl SceneLoader for CountingLoader {
    fn load_scene(&mut self, _reference: &str) -> Result<SceneGraph> {
        self.calls += 1;
        Ok(showroom_scene())
    }
}

fn loaded_viewer() -> ShowroomViewer {
    let mut viewer = ShowroomViewer::new(ViewerConfig::default(), WIDTH, HEIGHT).unwrap();
    viewer.load_model("carpet.glb", &mut showroom_loader).unwrap();
    viewer
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_rejects_invalid_config() {
    let mut config = ViewerConfig::default();
    config.camera.near = 0.0;
    assert!(matches!(ShowroomViewer::new(config, WIDTH, HEIGHT), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_new_rejects_viewport_without_area() {
    for (width, height) in [(0.0, HEIGHT), (WIDTH, -1.0), (f32::NAN, HEIGHT), (f32::INFINITY, HEIGHT)] {
        let result = ShowroomViewer::new(ViewerConfig::default(), width, height);
        assert!(matches!(result, Err(Error::InitializationFailed(_))));
    }
}

#[test]
fn test_new_starts_at_default_pose() {
    let viewer = ShowroomViewer::new(ViewerConfig::default(), WIDTH, HEIGHT).unwrap();
    assert_eq!(viewer.pose(), ChoreographyConfig::default().wide_default);
    assert!(viewer.annotations().is_empty());
    assert!(viewer.bounding_box().is_none());
}

// ============================================================================
// Model loading
// ============================================================================

#[test]
fn test_load_model_adapts_and_lays_out() {
    let viewer = loaded_viewer();
    let bbox = viewer.bounding_box().unwrap();
    assert!(bbox.min.abs_diff_eq(Vec3::new(-1.3, 0.0, -1.3), 1e-5));
    assert!(bbox.max.abs_diff_eq(Vec3::new(1.3, 0.0, 1.3), 1e-5));

    let annotations = viewer.annotations();
    assert_eq!(annotations.len(), 5);
    assert!(annotations[0].position.abs_diff_eq(Vec3::new(-1.15, 0.05, 1.15), 1e-5));
    assert_eq!(viewer.model_reference(), Some("carpet.glb"));
}

#[test]
fn test_load_model_leaves_cached_scene_untouched() {
    let viewer = loaded_viewer();
    let scene = viewer.scene().unwrap();
    let spot = scene.find_by_name("Spot").unwrap();
    assert!(!scene.node(spot).unwrap().visible());
    assert_eq!(viewer.scene_cache().refcount("carpet.glb"), Some(1));
}

#[test]
fn test_load_model_without_carpet() {
    let mut viewer = ShowroomViewer::new(ViewerConfig::default(), WIDTH, HEIGHT).unwrap();
    let outcome = viewer.load_model("room.glb", &mut empty_room_loader).unwrap();
    assert!(outcome.bounding_box.is_none());
    assert!(viewer.annotations().is_empty());
    assert!(viewer.carpet_material().is_none());
    assert!(viewer.select_annotation(1, 0.0).is_err());
}

#[test]
fn test_failed_load_keeps_previous_model() {
    let mut viewer = loaded_viewer();
    let err = viewer.load_model("missing.glb", &mut failing_loader).unwrap_err();
    assert!(matches!(err, Error::AssetLoad(_)));
    assert_eq!(viewer.model_reference(), Some("carpet.glb"));
    assert_eq!(viewer.annotations().len(), 5);
    assert!(!viewer.scene_cache().is_resident("missing.glb"));
}

#[test]
fn test_reload_shares_cached_scene() {
    let mut viewer = ShowroomViewer::new(ViewerConfig::default(), WIDTH, HEIGHT).unwrap();
    let mut loader = CountingLoader { calls: 0 };
    viewer.load_model("carpet.glb", &mut loader).unwrap();
    viewer.load_model("carpet.glb", &mut loader).unwrap();
    assert_eq!(loader.calls, 1);
    assert_eq!(viewer.scene_cache().refcount("carpet.glb"), Some(1));
}

#[test]
fn test_switching_models_releases_previous() {
    let mut viewer = loaded_viewer();
    viewer.load_model("room.glb", &mut empty_room_loader).unwrap();
    assert!(!viewer.scene_cache().is_resident("carpet.glb"));
    assert!(viewer.scene_cache().is_resident("room.glb"));
}

#[test]
fn test_preload_then_load_uses_cache() {
    let mut viewer = ShowroomViewer::new(ViewerConfig::default(), WIDTH, HEIGHT).unwrap();
    let mut loader = CountingLoader { calls: 0 };
    viewer.preload_model("carpet.glb", &mut loader).unwrap();
    assert_eq!(viewer.scene_cache().refcount("carpet.glb"), Some(0));
    viewer.load_model("carpet.glb", &mut loader).unwrap();
    assert_eq!(loader.calls, 1);
    assert_eq!(viewer.scene_cache().refcount("carpet.glb"), Some(1));
}

#[test]
fn test_unload_model() {
    let mut viewer = loaded_viewer();
    viewer.select_annotation(2, 0.0).unwrap();
    viewer.unload_model().unwrap();
    assert!(viewer.annotations().is_empty());
    assert!(viewer.scene().is_none());
    assert_eq!(viewer.active_annotation(), None);
    assert!(viewer.scene_cache().is_empty());
    // unloading twice is a no-op
    viewer.unload_model().unwrap();
}

#[test]
fn test_new_load_clears_selection() {
    let mut viewer = loaded_viewer();
    viewer.select_annotation(4, 0.0).unwrap();
    viewer.load_model("carpet.glb", &mut showroom_loader).unwrap();
    assert_eq!(viewer.active_annotation(), None);
}

// ============================================================================
// Selection and frames
// ============================================================================

#[test]
fn test_select_and_toggle_through_frames() {
    let mut viewer = loaded_viewer();
    let focus = viewer.choreographer().focus_pose(&viewer.annotations()[0]);

    viewer.select_annotation(1, 0.0).unwrap();
    let first = viewer.frame(0.0);
    assert!(first.animating);
    assert_eq!(first.active_annotation, Some(1));

    let arrived = viewer.frame(800.0);
    assert!(!arrived.animating);
    assert_eq!(arrived.pose, focus);

    viewer.select_annotation(1, 1000.0).unwrap();
    assert_eq!(viewer.active_annotation(), None);
    let back = viewer.frame(1600.0);
    assert_eq!(back.pose, ChoreographyConfig::default().wide_default);
}

#[test]
fn test_close_matches_toggle() {
    let mut toggled = loaded_viewer();
    let mut closed = loaded_viewer();
    for viewer in [&mut toggled, &mut closed] {
        viewer.select_annotation(3, 0.0).unwrap();
        viewer.frame(250.0);
    }
    toggled.select_annotation(3, 300.0).unwrap();
    closed.close_annotation(300.0);

    for step in 0..=10 {
        let now = 300.0 + step as f64 * 70.0;
        assert_eq!(toggled.frame(now).pose, closed.frame(now).pose);
    }
}

#[test]
fn test_unknown_annotation_is_error() {
    let mut viewer = loaded_viewer();
    assert!(matches!(viewer.select_annotation(9, 0.0), Err(Error::InvalidResource(_))));
    assert!(!viewer.is_animating());
}

#[test]
fn test_narrow_viewport_return_pose() {
    let mut viewer = loaded_viewer();
    viewer.set_viewport(390.0, 844.0);
    viewer.select_annotation(2, 0.0).unwrap();
    viewer.frame(800.0);
    viewer.close_annotation(900.0);
    let out = viewer.frame(1500.0);
    assert_eq!(out.pose, ChoreographyConfig::default().narrow_default);
    assert!((viewer.camera().aspect() - 390.0 / 844.0).abs() < 1e-6);
}

#[test]
fn test_frame_projects_markers() {
    let mut viewer = loaded_viewer();
    let out = viewer.frame(0.0);
    assert_eq!(out.markers.len(), 5);
    assert!(out.markers.iter().all(|(_, screen)| screen.is_some()));
    assert_eq!(out.view, *viewer.camera().view_matrix());
}

// ============================================================================
// Orbit
// ============================================================================

#[test]
fn test_orbit_ignored_while_animating() {
    let mut viewer = loaded_viewer();
    viewer.select_annotation(1, 0.0).unwrap();
    assert!(!viewer.orbit(OrbitInput::Dolly(0.5)));
    viewer.frame(800.0);
    let before = viewer.pose();
    assert!(viewer.orbit(OrbitInput::Rotate { azimuth: 0.3, polar: 0.0 }));
    assert_ne!(viewer.pose(), before);
}

#[test]
fn test_auto_rotate_when_idle() {
    let mut config = ViewerConfig::default();
    config.orbit = OrbitLimits { auto_rotate_speed: 0.5, ..OrbitLimits::default() };
    let mut viewer = ShowroomViewer::new(config, WIDTH, HEIGHT).unwrap();
    let start = viewer.frame(0.0).pose;
    let later = viewer.frame(1000.0).pose;
    assert_ne!(start, later);
    assert!((start.distance() - later.distance()).abs() < 1e-4);
}

// ============================================================================
// Textures
// ============================================================================

#[test]
fn test_texture_swap_latest_wins() {
    let mut viewer = loaded_viewer();
    let first = viewer.request_texture(Some(TextureSource::Url("a.jpg".to_string()))).unwrap();
    let second = viewer.request_texture(Some(TextureSource::Url("b.jpg".to_string()))).unwrap();

    assert!(viewer.complete_texture(second, Ok(Texture::solid("b", [0, 0, 255, 255]))));
    assert!(!viewer.complete_texture(first, Ok(Texture::solid("a", [255, 0, 0, 255]))));

    let map = viewer.carpet_material().unwrap().color_map().unwrap();
    assert_eq!(map.name(), "b");
    assert!(!map.flip_y());
}

#[test]
fn test_texture_restore_original() {
    let mut viewer = loaded_viewer();
    let request = viewer.request_texture(Some(TextureSource::Url("a.jpg".to_string()))).unwrap();
    viewer.complete_texture(request, Ok(Texture::solid("a", [255, 0, 0, 255])));
    assert!(viewer.request_texture(None).is_none());
    assert!(viewer.carpet_material().unwrap().color_map().is_none());
}

#[test]
fn test_texture_without_model() {
    let mut viewer = ShowroomViewer::new(ViewerConfig::default(), WIDTH, HEIGHT).unwrap();
    assert!(viewer.request_texture(Some(TextureSource::Url("a.jpg".to_string()))).is_none());
}
