/// OrbitController: user-driven orbit, dolly and pan around the target.
///
/// Works in spherical coordinates relative to the pose target: the polar
/// angle is measured from +Y, the azimuth around Y starting at +Z. Every
/// result is clamped to the configured limits.

use glam::{Vec2, Vec3};
use crate::config::OrbitLimits;
use super::camera_pose::CameraPose;

/// Keeps the polar angle off the poles, where the view is degenerate
const POLE_EPSILON: f32 = 1e-6;

/// One unit of user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitInput {
    /// Angular deltas in radians
    Rotate { azimuth: f32, polar: f32 },
    /// Distance multiplier; > 1 moves away, < 1 moves closer
    Dolly(f32),
    /// Screen-space shift, in units of the current distance
    Pan(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    polar: f32,
    azimuth: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self { radius: 0.0, polar: 0.0, azimuth: 0.0 };
        }
        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }
}

/// Applies orbit input within `OrbitLimits`
#[derive(Debug, Clone)]
pub struct OrbitController {
    limits: OrbitLimits,
}

impl OrbitController {
    pub fn new(limits: OrbitLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &OrbitLimits {
        &self.limits
    }

    /// Pose after one input event
    pub fn apply(&self, pose: &CameraPose, input: OrbitInput) -> CameraPose {
        match input {
            OrbitInput::Rotate { azimuth, polar } => self.rotate(pose, azimuth, polar),
            OrbitInput::Dolly(scale) => self.dolly(pose, scale),
            OrbitInput::Pan(delta) => self.pan(pose, delta),
        }
    }

    pub fn rotate(&self, pose: &CameraPose, delta_azimuth: f32, delta_polar: f32) -> CameraPose {
        let mut spherical = Spherical::from_offset(pose.position - pose.target);
        spherical.azimuth += delta_azimuth;
        spherical.polar += delta_polar;
        self.place(pose.target, spherical)
    }

    pub fn dolly(&self, pose: &CameraPose, scale: f32) -> CameraPose {
        if !(scale > 0.0) || !scale.is_finite() {
            return *pose;
        }
        let mut spherical = Spherical::from_offset(pose.position - pose.target);
        spherical.radius *= scale;
        self.place(pose.target, spherical)
    }

    /// Shift position and target together. No-op while panning is disabled.
    pub fn pan(&self, pose: &CameraPose, delta: Vec2) -> CameraPose {
        if !self.limits.enable_pan {
            return *pose;
        }
        let forward = pose.target - pose.position;
        let distance = forward.length();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let shift = (right * delta.x + up * delta.y) * distance;
        CameraPose::new(pose.position + shift, pose.target + shift)
    }

    /// Advance the idle auto-rotation by `dt_seconds`
    pub fn auto_rotate(&self, pose: &CameraPose, dt_seconds: f32) -> CameraPose {
        if self.limits.auto_rotate_speed == 0.0 || !(dt_seconds > 0.0) {
            return *pose;
        }
        self.rotate(pose, self.limits.auto_rotate_speed * dt_seconds, 0.0)
    }

    /// Bring a pose inside the distance and polar limits
    pub fn clamp(&self, pose: &CameraPose) -> CameraPose {
        self.place(pose.target, Spherical::from_offset(pose.position - pose.target))
    }

    fn place(&self, target: Vec3, mut spherical: Spherical) -> CameraPose {
        let limits = &self.limits;
        let min_polar = limits.min_polar.max(POLE_EPSILON);
        let max_polar = limits.max_polar.min(std::f32::consts::PI - POLE_EPSILON).max(min_polar);
        spherical.polar = spherical.polar.clamp(min_polar, max_polar);
        spherical.radius = spherical.radius.clamp(limits.min_distance, limits.max_distance);
        CameraPose::new(target + spherical.to_offset(), target)
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(OrbitLimits::default())
    }
}

#[cfg(test)]
#[path = "orbit_tests.rs"]
mod tests;
