//! Unit tests for config.rs

use super::*;
use glam::Vec3;

#[test]
fn test_default_config_is_valid() {
    let config = ViewerConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_defaults_match_showroom_framing() {
    let config = ViewerConfig::default();
    assert_eq!(config.adapter.target_keywords, vec!["carpet", "rug"]);
    assert_eq!(config.adapter.target_scale, Vec3::new(1.3, 1.0, 1.3));
    assert_eq!(config.layout.inset, 0.15);
    assert_eq!(config.choreography.focus_duration_ms, 800.0);
    assert_eq!(config.choreography.return_duration_ms, 600.0);
    assert_eq!(config.choreography.wide_default.position, Vec3::new(0.0, 1.3, 3.8));
    assert_eq!(config.choreography.narrow_default.position, Vec3::new(2.0, 0.0, 3.4));
    assert_eq!(config.orbit.max_distance, 20.0);
    assert_eq!(config.camera.fov_y_degrees, 65.0);
}

#[test]
fn test_empty_keywords_rejected() {
    let mut config = ViewerConfig::default();
    config.adapter.target_keywords = vec!["  ".to_string()];
    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_non_positive_scale_rejected() {
    let mut config = ViewerConfig::default();
    config.adapter.target_scale = Vec3::new(1.3, 0.0, 1.3);
    assert!(config.validate().is_err());
}

#[test]
fn test_negative_inset_rejected() {
    let mut config = ViewerConfig::default();
    config.layout.inset = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn test_oversized_inset_accepted() {
    // Markers may cross on tiny carpets; that is allowed.
    let mut config = ViewerConfig::default();
    config.layout.inset = 10.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_duration_accepted() {
    let mut config = ViewerConfig::default();
    config.choreography.focus_duration_ms = 0.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_inverted_orbit_limits_rejected() {
    let mut config = ViewerConfig::default();
    config.orbit.min_distance = 30.0;
    assert!(config.validate().is_err());

    let mut config = ViewerConfig::default();
    config.orbit.min_polar = 2.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_bad_clip_planes_rejected() {
    let mut config = ViewerConfig::default();
    config.camera.near = 2000.0;
    assert!(config.validate().is_err());
}
