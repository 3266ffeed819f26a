/// A single eased move between two camera poses.

use super::camera_pose::{CameraPose, ease_out_cubic};

/// Fixed-duration eased transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransition {
    start: CameraPose,
    end: CameraPose,
    start_time_ms: f64,
    duration_ms: f64,
}

impl ViewTransition {
    pub fn new(start: CameraPose, end: CameraPose, start_time_ms: f64, duration_ms: f64) -> Self {
        Self { start, end, start_time_ms, duration_ms }
    }

    pub fn start(&self) -> &CameraPose {
        &self.start
    }

    pub fn end(&self) -> &CameraPose {
        &self.end
    }

    pub fn start_time_ms(&self) -> f64 {
        self.start_time_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Linear progress in [0, 1]. Non-positive or non-finite durations are
    /// already complete.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if !(self.duration_ms > 0.0) || !self.duration_ms.is_finite() {
            return 1.0;
        }
        ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Pose at `now_ms` and whether the transition has finished.
    ///
    /// A finished transition returns the end pose exactly.
    pub fn sample(&self, now_ms: f64) -> (CameraPose, bool) {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return (self.end, true);
        }
        (self.start.lerp(&self.end, ease_out_cubic(progress)), false)
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
