//! Viewer configuration
//!
//! Plain structs with defaults matching the showroom's authored assets and
//! camera framing. `ViewerConfig::validate` rejects values the components
//! cannot work with; everything else is taken as given.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::camera::CameraPose;

/// ModelAdapter settings
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// Case-insensitive substrings identifying the carpet mesh by name
    pub target_keywords: Vec<String>,
    /// Non-uniform local scale applied to the carpet mesh
    pub target_scale: Vec3,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            target_keywords: vec!["carpet".to_string(), "rug".to_string()],
            target_scale: Vec3::new(1.3, 1.0, 1.3),
        }
    }
}

/// AnnotationLayout settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Constant inward distance of markers from the carpet edges
    pub inset: f32,
    /// Marker height above the top of the carpet bounds
    pub surface_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { inset: 0.15, surface_offset: 0.05 }
    }
}

/// ViewChoreographer settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoreographyConfig {
    /// Duration of the move toward an annotation
    pub focus_duration_ms: f64,
    /// Duration of the move back to the default pose
    pub return_duration_ms: f64,
    /// Horizontal scale applied to the annotation x when framing it
    pub focus_lateral_factor: f32,
    /// Camera height used when framing an annotation
    pub focus_height: f32,
    /// Distance the camera backs off along +z from the annotation
    pub focus_standoff: f32,
    /// Viewports narrower than this (in CSS px) use the narrow default pose
    pub narrow_viewport_width: f32,
    /// Default pose for narrow viewports
    pub narrow_default: CameraPose,
    /// Default pose for wide viewports
    pub wide_default: CameraPose,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            focus_duration_ms: 800.0,
            return_duration_ms: 600.0,
            focus_lateral_factor: 0.7,
            focus_height: 0.3,
            focus_standoff: 1.5,
            narrow_viewport_width: 640.0,
            narrow_default: CameraPose::new(Vec3::new(2.0, 0.0, 3.4), Vec3::ZERO),
            wide_default: CameraPose::new(Vec3::new(0.0, 1.3, 3.8), Vec3::ZERO),
        }
    }
}

/// Limits for user-driven orbiting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle from +Y, radians
    pub min_polar: f32,
    pub max_polar: f32,
    /// Whether panning moves the target
    pub enable_pan: bool,
    /// Auto-rotate speed in radians per second (0 disables)
    pub auto_rotate_speed: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            max_distance: 20.0,
            min_polar: 0.0,
            max_polar: std::f32::consts::FRAC_PI_2,
            enable_pan: false,
            auto_rotate_speed: 0.0,
        }
    }
}

/// Perspective camera settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { fov_y_degrees: 65.0, near: 0.1, far: 1000.0 }
    }
}

/// Full viewer configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerConfig {
    pub adapter: AdapterConfig,
    pub layout: LayoutConfig,
    pub choreography: ChoreographyConfig,
    pub orbit: OrbitLimits,
    pub camera: CameraConfig,
}

impl ViewerConfig {
    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let adapter = &self.adapter;
        if adapter.target_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(invalid("adapter.target_keywords must contain a non-empty keyword"));
        }
        if !adapter.target_scale.is_finite() || adapter.target_scale.cmple(Vec3::ZERO).any() {
            return Err(invalid("adapter.target_scale must be finite and positive"));
        }

        let layout = &self.layout;
        if !layout.inset.is_finite() || layout.inset < 0.0 {
            return Err(invalid("layout.inset must be a finite value >= 0"));
        }
        if !layout.surface_offset.is_finite() {
            return Err(invalid("layout.surface_offset must be finite"));
        }

        let choreo = &self.choreography;
        if !choreo.focus_duration_ms.is_finite() || !choreo.return_duration_ms.is_finite() {
            return Err(invalid("choreography durations must be finite"));
        }
        if !(choreo.narrow_viewport_width > 0.0) {
            return Err(invalid("choreography.narrow_viewport_width must be > 0"));
        }

        let orbit = &self.orbit;
        if !(orbit.min_distance > 0.0) || orbit.min_distance > orbit.max_distance {
            return Err(invalid("orbit distance limits must satisfy 0 < min <= max"));
        }
        if orbit.min_polar < 0.0 || orbit.min_polar > orbit.max_polar || orbit.max_polar > std::f32::consts::PI {
            return Err(invalid("orbit polar limits must satisfy 0 <= min <= max <= PI"));
        }

        let camera = &self.camera;
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(invalid("camera.fov_y_degrees must be in (0, 180)"));
        }
        if !(camera.near > 0.0) || camera.near >= camera.far {
            return Err(invalid("camera clip planes must satisfy 0 < near < far"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    crate::viewer_error!("showroom::ViewerConfig", "{}", msg);
    Error::InvalidConfig(msg.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
