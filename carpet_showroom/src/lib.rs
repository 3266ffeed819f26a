/*!
# Carpet Showroom

Viewer core for an interactive carpet showroom: adapts a loaded 3D model,
lays out annotation markers on the carpet, and choreographs eased camera
moves between a default framing and annotation close-ups.

The crate has no GPU or windowing code. Asset decoding, pointer input and
rendering are external collaborators that feed plain data in and read poses,
bounding boxes and materials back out.

## Architecture

- **ModelAdapter**: finds the carpet mesh, disables embedded lights, rescales
  the mesh, computes its world-space AABB and manages texture swaps
- **AnnotationLayout**: derives five labeled markers from the carpet AABB
- **ViewChoreographer**: eased camera transitions with toggle selection
- **OrbitController**: user-driven orbit/zoom/pan when no transition runs
- **AssetCache**: reference-counted cache of loaded scenes and textures
- **ShowroomViewer**: wires all of the above in dependency order

Frame-driven, single-threaded: every mutation happens on the caller's render
loop. Asynchronous loads are expressed as request tickets that the caller
completes later, in any order.
*/

// Internal modules
mod error;
mod engine;
mod config;
mod viewer;
pub mod log;
pub mod scene;
pub mod resource;
pub mod model;
pub mod annotation;
pub mod camera;

// Main showroom namespace module
pub mod showroom {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{
        ViewerConfig, AdapterConfig, LayoutConfig, ChoreographyConfig,
        OrbitLimits, CameraConfig,
    };

    // Composition root
    pub use crate::viewer::{ShowroomViewer, FrameOutput};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Scene graph sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Model adaptation sub-module
    pub mod model {
        pub use crate::model::*;
    }

    // Annotation sub-module
    pub mod annotation {
        pub use crate::annotation::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
