/// Scene graph node types.
///
/// Nodes are owned by `SceneGraph` and addressed by `NodeKey`. A node is a
/// group, a mesh (geometry + material) or a light. Local transform changes
/// mark the node's cached world matrix stale until the graph refreshes it.

use glam::{Vec3, Quat, Mat4};
use slotmap::new_key_type;
use crate::resource::material::Material;
use super::aabb::AABB;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a node within a SceneGraph.
    ///
    /// Keys remain valid even after other nodes are removed.
    pub struct NodeKey;
}

// ===== TRANSFORM =====

/// Local TRS transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Local matrix (scale, then rotation, then translation)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ===== GEOMETRY =====

/// Vertex positions of a mesh in local space
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    positions: Vec<Vec3>,
}

impl Geometry {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Flat quad on the XZ plane, centered on the origin (a rug, a floor)
    pub fn quad_xz(width: f32, depth: f32) -> Self {
        let (hw, hd) = (width * 0.5, depth * 0.5);
        Self::new(vec![
            Vec3::new(-hw, 0.0, -hd),
            Vec3::new(hw, 0.0, -hd),
            Vec3::new(hw, 0.0, hd),
            Vec3::new(-hw, 0.0, hd),
        ])
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Local-space bounds. `None` for empty or non-finite geometry.
    pub fn local_bounds(&self) -> Option<AABB> {
        AABB::from_points(&self.positions)
    }
}

// ===== NODE KINDS =====

/// Light flavors found in authored assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point,
    Spot,
}

/// Light payload
#[derive(Debug, Clone)]
pub struct LightNode {
    pub kind: LightKind,
    pub intensity: f32,
}

/// Mesh payload
#[derive(Debug, Clone)]
pub struct MeshNode {
    pub geometry: Geometry,
    pub material: Material,
}

/// What a node is
#[derive(Debug, Clone)]
pub enum NodeKind {
    Group,
    Mesh(MeshNode),
    Light(LightNode),
}

// ===== SCENE NODE =====

/// A positioned node in the scene graph
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    kind: NodeKind,
    transform: Transform,
    visible: bool,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub(crate) world_matrix: Mat4,
    pub(crate) world_dirty: bool,
}

impl SceneNode {
    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::IDENTITY,
            visible: true,
            parent: None,
            children: Vec::new(),
            world_matrix: Mat4::IDENTITY,
            world_dirty: true,
        }
    }

    /// Empty grouping node
    pub fn group(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Group)
    }

    /// Mesh node
    pub fn mesh(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self::with_kind(name, NodeKind::Mesh(MeshNode { geometry, material }))
    }

    /// Light node
    pub fn light(name: impl Into<String>, kind: LightKind, intensity: f32) -> Self {
        Self::with_kind(name, NodeKind::Light(LightNode { kind, intensity }))
    }

    /// Builder-style local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh(_))
    }

    pub fn is_light(&self) -> bool {
        matches!(self.kind, NodeKind::Light(_))
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Geometry of a mesh node
    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(&mesh.geometry),
            _ => None,
        }
    }

    /// Material of a mesh node
    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(&mesh.material),
            _ => None,
        }
    }

    pub fn material_mut(&mut self) -> Option<&mut Material> {
        match &mut self.kind {
            NodeKind::Mesh(mesh) => Some(&mut mesh.material),
            _ => None,
        }
    }

    /// Emitted intensity of a light node
    pub fn light_intensity(&self) -> Option<f32> {
        match &self.kind {
            NodeKind::Light(light) => Some(light.intensity),
            _ => None,
        }
    }

    /// World matrix as of the last `SceneGraph::update_world_transforms`.
    ///
    /// May be stale; use `SceneGraph::world_matrix` for a resolved value.
    pub fn cached_world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    // ===== SETTERS =====

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Set a light's intensity. Returns false for non-light nodes.
    pub fn set_light_intensity(&mut self, intensity: f32) -> bool {
        match &mut self.kind {
            NodeKind::Light(light) => {
                light.intensity = intensity;
                true
            }
            _ => false,
        }
    }

    /// Replace the whole material of a mesh node. Returns false for non-mesh nodes.
    pub fn set_material(&mut self, material: Material) -> bool {
        match &mut self.kind {
            NodeKind::Mesh(mesh) => {
                mesh.material = material;
                true
            }
            _ => false,
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.world_dirty = true;
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.transform.translation = translation;
        self.world_dirty = true;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
        self.world_dirty = true;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
        self.world_dirty = true;
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
