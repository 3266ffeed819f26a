/// Camera pose and easing helpers.

use glam::Vec3;

/// Where the camera is and what it looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Interpolate position and target independently
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }

    /// Distance from position to target
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn abs_diff_eq(&self, other: &CameraPose, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.target.abs_diff_eq(other.target, max_abs_diff)
    }
}

/// Cubic ease-out: fast start, slow finish. `t` is clamped to [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
#[path = "camera_pose_tests.rs"]
mod tests;
