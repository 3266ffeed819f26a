use super::*;
use glam::Vec4;
use crate::resource::Material;
use crate::scene::{Geometry, LightKind, SceneNode};

fn mesh(name: &str) -> SceneNode {
    SceneNode::mesh(name, Geometry::quad_xz(1.0, 1.0), Material::new("m", Vec4::ONE))
}

// ============================================================================
// TargetMatcher
// ============================================================================

#[test]
fn test_matcher_is_case_insensitive_substring() {
    let matcher = TargetMatcher::new(["carpet", "rug"]);
    assert!(matcher.matches("Carpet_01"));
    assert!(matcher.matches("LivingRoom_RUG"));
    assert!(matcher.matches("persian-rugged"));
    assert!(!matcher.matches("Bed_Frame"));
}

#[test]
fn test_matcher_normalizes_keywords() {
    let matcher = TargetMatcher::new(["  CARPET ", ""]);
    assert_eq!(matcher.keywords(), &["carpet".to_string()]);
}

#[test]
fn test_matcher_ignores_non_mesh_nodes() {
    let matcher = TargetMatcher::new(["carpet"]);
    assert!(!matcher.matches_node(&SceneNode::group("carpet_group")));
    assert!(!matcher.matches_node(&SceneNode::light("carpet_light", LightKind::Spot, 1.0)));
    assert!(matcher.matches_node(&mesh("carpet_mesh")));
}

// ============================================================================
// classify
// ============================================================================

#[test]
fn test_classify_labels_lights_and_targets() {
    let mut scene = SceneGraph::new();
    let room = scene.add_node(None, SceneNode::group("room")).unwrap();
    let bed = scene.add_node(Some(room), mesh("Bed")).unwrap();
    let rug = scene.add_node(Some(room), mesh("Rug_Lotus")).unwrap();
    let lamp = scene.add_node(Some(room), SceneNode::light("Lamp", LightKind::Point, 2.0)).unwrap();

    let result = classify(&scene, &TargetMatcher::new(["carpet", "rug"]));

    assert_eq!(result, vec![
        NodeClassification { key: rug, role: NodeRole::Target },
        NodeClassification { key: lamp, role: NodeRole::Light },
    ]);
    assert!(result.iter().all(|c| c.key != bed));
}

#[test]
fn test_classify_does_not_mutate() {
    let mut scene = SceneGraph::new();
    let lamp = scene.add_node(None, SceneNode::light("Lamp", LightKind::Point, 2.0)).unwrap();
    let _ = classify(&scene, &TargetMatcher::new(["rug"]));
    assert!(scene.node(lamp).unwrap().visible());
    assert_eq!(scene.node(lamp).unwrap().light_intensity(), Some(2.0));
}

#[test]
fn test_classify_empty_scene() {
    let scene = SceneGraph::new();
    assert!(classify(&scene, &TargetMatcher::new(["rug"])).is_empty());
}
