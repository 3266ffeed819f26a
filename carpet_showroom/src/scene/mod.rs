//! Scene graph module
//!
//! Provides the node hierarchy that decoded assets are delivered as, plus
//! axis-aligned bounding boxes in local and world space.

mod aabb;
mod node;
mod scene_graph;

pub use aabb::AABB;
pub use node::{
    NodeKey, SceneNode, NodeKind, MeshNode, LightNode, LightKind,
    Geometry, Transform,
};
pub use scene_graph::SceneGraph;
