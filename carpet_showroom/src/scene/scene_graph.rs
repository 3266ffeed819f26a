/// SceneGraph: hierarchical collection of nodes composing a 3D asset.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Parent/child
/// links are stored on the nodes; `roots` keeps insertion order so traversal
/// is deterministic.

use glam::Mat4;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use super::node::{NodeKey, SceneNode};

/// A loaded scene graph
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, SceneNode>,
    roots: Vec<NodeKey>,
}

impl SceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, optionally under a parent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNode` if `parent` is not in this graph.
    pub fn add_node(&mut self, parent: Option<NodeKey>, mut node: SceneNode) -> Result<NodeKey> {
        if let Some(parent_key) = parent {
            if !self.nodes.contains_key(parent_key) {
                return Err(Error::InvalidNode(format!(
                    "parent {:?} does not exist (adding '{}')", parent_key, node.name()
                )));
            }
        }

        node.parent = parent;
        node.children.clear();
        node.world_dirty = true;
        let key = self.nodes.insert(node);

        match parent {
            Some(parent_key) => self.nodes[parent_key].children.push(key),
            None => self.roots.push(key),
        }
        Ok(key)
    }

    /// Remove a node and its whole subtree. Returns false if the key is invalid.
    pub fn remove_node(&mut self, key: NodeKey) -> bool {
        let Some(node) = self.nodes.get(key) else {
            return false;
        };

        match node.parent {
            Some(parent_key) => {
                if let Some(parent) = self.nodes.get_mut(parent_key) {
                    parent.children.retain(|&c| c != key);
                }
            }
            None => self.roots.retain(|&r| r != key),
        }

        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(removed) = self.nodes.remove(current) {
                stack.extend(removed.children);
            }
        }
        true
    }

    /// Get a node by key
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Get a mutable node by key
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys in depth-first pre-order from the roots. Each node appears once.
    pub fn traversal_order(&self) -> Vec<NodeKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeKey> = self.roots.iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else { continue };
            order.push(key);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Visit every node exactly once, depth-first pre-order.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(NodeKey, &SceneNode),
    {
        for key in self.traversal_order() {
            visit(key, &self.nodes[key]);
        }
    }

    /// First node (traversal order) with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.traversal_order()
            .into_iter()
            .find(|&key| self.nodes[key].name() == name)
    }

    /// Fully resolved world matrix, computed from the live local transforms.
    ///
    /// Never reads the per-node cache, so it is correct even when the cache
    /// is stale.
    pub fn world_matrix(&self, key: NodeKey) -> Option<Mat4> {
        let mut node = self.nodes.get(key)?;
        let mut matrix = node.transform().matrix();
        while let Some(parent_key) = node.parent {
            node = self.nodes.get(parent_key)?;
            matrix = node.transform().matrix() * matrix;
        }
        Some(matrix)
    }

    /// True if the node's cached world matrix no longer reflects its
    /// transform or any ancestor's.
    pub fn is_world_stale(&self, key: NodeKey) -> bool {
        let mut current = self.nodes.get(key);
        while let Some(node) = current {
            if node.world_dirty {
                return true;
            }
            current = node.parent.and_then(|p| self.nodes.get(p));
        }
        false
    }

    /// Recompute every cached world matrix top-down and clear stale flags.
    pub fn update_world_transforms(&mut self) {
        let mut stack: Vec<(NodeKey, Mat4)> =
            self.roots.iter().map(|&k| (k, Mat4::IDENTITY)).collect();

        while let Some((key, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else { continue };
            let world = parent_world * node.transform().matrix();
            node.world_matrix = world;
            node.world_dirty = false;
            for &child in &node.children {
                stack.push((child, world));
            }
        }
    }
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
