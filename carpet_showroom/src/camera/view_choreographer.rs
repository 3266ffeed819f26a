/// ViewChoreographer: eased camera moves between the default framing and
/// annotation close-ups.
///
/// States:
/// - `Idle`: the pose only changes through user orbit input
/// - `Animating`: one transition runs; user pose updates are ignored
///
/// Starting a transition while another runs replaces it, starting from the
/// pose interpolated at the interruption instant. Selecting the annotation
/// that is already active behaves exactly like `return_to_default`.

use glam::Vec3;
use crate::annotation::Annotation;
use crate::config::ChoreographyConfig;
use super::camera_pose::CameraPose;
use super::transition::ViewTransition;

/// Choreographer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoreographerState {
    Idle,
    Animating,
}

/// Viewport class selecting the default pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Narrow,
    Wide,
}

impl DeviceClass {
    /// Narrow when `width` is strictly below `threshold`
    pub fn from_viewport_width(width: f32, threshold: f32) -> Self {
        if width < threshold {
            DeviceClass::Narrow
        } else {
            DeviceClass::Wide
        }
    }
}

/// Drives the camera pose over time
#[derive(Debug, Clone)]
pub struct ViewChoreographer {
    config: ChoreographyConfig,
    device_class: DeviceClass,
    pose: CameraPose,
    transition: Option<ViewTransition>,
    active_annotation: Option<u32>,
}

impl ViewChoreographer {
    /// Start idle at the default pose for `viewport_width`
    pub fn new(config: ChoreographyConfig, viewport_width: f32) -> Self {
        let device_class = DeviceClass::from_viewport_width(viewport_width, config.narrow_viewport_width);
        let pose = default_pose_for(&config, device_class);
        Self {
            config,
            device_class,
            pose,
            transition: None,
            active_annotation: None,
        }
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    /// Pose as of the last tick or direct update
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn state(&self) -> ChoreographerState {
        if self.transition.is_some() {
            ChoreographerState::Animating
        } else {
            ChoreographerState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<&ViewTransition> {
        self.transition.as_ref()
    }

    /// Id of the focused annotation, if any
    pub fn active_annotation(&self) -> Option<u32> {
        self.active_annotation
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// Default pose for the current device class
    pub fn default_pose(&self) -> CameraPose {
        default_pose_for(&self.config, self.device_class)
    }

    /// Close-up framing of an annotation
    pub fn focus_pose(&self, annotation: &Annotation) -> CameraPose {
        let p = annotation.position;
        CameraPose::new(
            Vec3::new(
                p.x * self.config.focus_lateral_factor,
                self.config.focus_height,
                p.z + self.config.focus_standoff,
            ),
            p,
        )
    }

    // ===== VIEWPORT =====

    /// Reclassify the viewport. Takes effect at the next return to default.
    pub fn set_viewport_width(&mut self, width: f32) {
        let class = DeviceClass::from_viewport_width(width, self.config.narrow_viewport_width);
        if class != self.device_class {
            crate::viewer_debug!("showroom::ViewChoreographer", "Device class {:?} -> {:?}", self.device_class, class);
            self.device_class = class;
        }
    }

    // ===== TRANSITIONS =====

    /// Start an eased move from `current` to `target`.
    ///
    /// If a transition is running, `current` is ignored and the move starts
    /// from the pose interpolated at `now_ms` instead. A duration <= 0 jumps
    /// to `target` immediately and leaves the choreographer idle.
    pub fn begin_transition(&mut self, current: CameraPose, target: CameraPose, duration_ms: f64, now_ms: f64) {
        self.pose = current;
        if let Some(running) = self.transition.take() {
            let (interrupted, _) = running.sample(now_ms);
            self.pose = interrupted;
            crate::viewer_trace!("showroom::ViewChoreographer", "Transition interrupted at {:?}", interrupted.position);
        }

        if !(duration_ms > 0.0) || !duration_ms.is_finite() {
            self.pose = target;
            return;
        }

        crate::viewer_debug!(
            "showroom::ViewChoreographer",
            "Transition {:?} -> {:?} over {} ms",
            self.pose.position, target.position, duration_ms
        );
        self.transition = Some(ViewTransition::new(self.pose, target, now_ms, duration_ms));
    }

    /// Advance to `now_ms`. Returns the pose and whether no transition is
    /// running any more.
    pub fn tick(&mut self, now_ms: f64) -> (CameraPose, bool) {
        let Some(transition) = self.transition else {
            return (self.pose, true);
        };
        let (pose, done) = transition.sample(now_ms);
        self.pose = pose;
        if done {
            self.transition = None;
            crate::viewer_trace!("showroom::ViewChoreographer", "Transition complete");
        }
        (pose, done)
    }

    /// Drop the running transition, holding the last ticked pose
    pub fn cancel(&mut self) {
        self.transition = None;
    }

    // ===== SELECTION =====

    /// Focus `annotation`, or return to default if it is already active
    pub fn select_annotation(&mut self, annotation: &Annotation, now_ms: f64) {
        if self.active_annotation == Some(annotation.id) {
            self.return_to_default(now_ms);
            return;
        }
        crate::viewer_info!("showroom::ViewChoreographer", "Focusing annotation {} ({})", annotation.id, annotation.title);
        self.active_annotation = Some(annotation.id);
        let target = self.focus_pose(annotation);
        self.begin_transition(self.pose, target, self.config.focus_duration_ms, now_ms);
    }

    /// Clear the selection and move back to the default pose
    pub fn return_to_default(&mut self, now_ms: f64) {
        self.active_annotation = None;
        let target = self.default_pose();
        self.begin_transition(self.pose, target, self.config.return_duration_ms, now_ms);
    }

    /// Explicit close: identical to selecting the active annotation again
    pub fn cancel_to_default(&mut self, now_ms: f64) {
        self.return_to_default(now_ms);
    }

    /// Forget the selection without moving (used when annotations are
    /// regenerated)
    pub fn clear_selection(&mut self) {
        self.active_annotation = None;
    }

    // ===== USER INPUT =====

    /// Accept a pose from user orbit input. Ignored while animating.
    pub fn apply_user_pose(&mut self, pose: CameraPose) -> bool {
        if self.transition.is_some() {
            return false;
        }
        self.pose = pose;
        true
    }
}

fn default_pose_for(config: &ChoreographyConfig, class: DeviceClass) -> CameraPose {
    match class {
        DeviceClass::Narrow => config.narrow_default,
        DeviceClass::Wide => config.wide_default,
    }
}

#[cfg(test)]
#[path = "view_choreographer_tests.rs"]
mod tests;
