/// Camera: perspective camera driven by a `CameraPose`.
///
/// View and projection matrices are recomputed whenever the pose or the
/// viewport changes, so the getters are plain reads.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use crate::config::CameraConfig;
use super::camera_pose::CameraPose;

/// Perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    pose: CameraPose,
    viewport: Vec2,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera for a viewport of `width` x `height` pixels.
    pub fn new(config: CameraConfig, pose: CameraPose, width: f32, height: f32) -> Self {
        let viewport = Vec2::new(width, height);
        Self {
            config,
            pose,
            viewport,
            view_matrix: look_at(&pose),
            projection_matrix: perspective(&config, aspect_of(viewport)),
        }
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Width over height, 1.0 for an empty viewport.
    pub fn aspect(&self) -> f32 {
        aspect_of(self.viewport)
    }

    /// View matrix (world to camera).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Right-handed perspective projection, depth in [0, 1].
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== SETTERS =====

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
        self.view_matrix = look_at(&pose);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.projection_matrix = perspective(&self.config, aspect_of(self.viewport));
    }

    // ===== PROJECTION =====

    /// Project a world point to viewport pixels (origin top-left).
    ///
    /// Returns `None` for points behind the camera or outside the clip
    /// volume, which is how marker overlays decide to hide a label.
    pub fn project_to_viewport(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.viewport.x,
            (0.5 - ndc.y * 0.5) * self.viewport.y,
        ))
    }
}

fn aspect_of(viewport: Vec2) -> f32 {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}

fn perspective(config: &CameraConfig, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(config.fov_y_degrees.to_radians(), aspect, config.near, config.far)
}

fn look_at(pose: &CameraPose) -> Mat4 {
    let forward = pose.target - pose.position;
    if forward.length_squared() <= f32::EPSILON {
        return Mat4::from_translation(-pose.position);
    }
    // Looking straight up or down: Y cannot serve as the up vector
    let up = if forward.normalize().cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::NEG_Z
    } else {
        Vec3::Y
    };
    Mat4::look_at_rh(pose.position, pose.target, up)
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
