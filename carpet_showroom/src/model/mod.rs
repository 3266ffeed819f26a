//! Model adaptation module
//!
//! Locates the carpet mesh in a loaded scene, prepares it for display and
//! manages asynchronous texture swaps on its material.

mod classify;
mod model_adapter;

pub use classify::{classify, TargetMatcher, NodeRole, NodeClassification};
pub use model_adapter::{ModelAdapter, AdaptOutcome, TextureRequest};
