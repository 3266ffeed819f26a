//! Camera module: poses, eased transitions, orbit input and the
//! perspective camera.
//!
//! `ViewChoreographer` owns the authoritative pose while a transition runs;
//! `OrbitController` proposes poses from user input when it is idle.

mod camera;
mod camera_pose;
mod orbit;
mod transition;
mod view_choreographer;

pub use camera::Camera;
pub use camera_pose::{CameraPose, ease_out_cubic};
pub use orbit::{OrbitController, OrbitInput};
pub use transition::ViewTransition;
pub use view_choreographer::{ViewChoreographer, ChoreographerState, DeviceClass};
