/// Node classification (phase one of model adaptation).
///
/// A pure pass over the scene graph that labels the nodes the adapter will
/// touch. Nothing is mutated here; `ModelAdapter::apply` consumes the list.

use crate::scene::{NodeKey, SceneGraph, SceneNode};

/// Case-insensitive substring matcher over node names
#[derive(Debug, Clone)]
pub struct TargetMatcher {
    keywords: Vec<String>,
}

impl TargetMatcher {
    /// Build a matcher. Keywords are lowercased; blank ones are dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if `name` contains any keyword, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords.iter().any(|k| name.contains(k.as_str()))
    }

    /// True for mesh nodes whose name matches
    pub fn matches_node(&self, node: &SceneNode) -> bool {
        node.is_mesh() && self.matches(node.name())
    }
}

/// What the adapter will do with a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Embedded light to switch off
    Light,
    /// Candidate carpet mesh
    Target,
}

/// A node paired with its role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeClassification {
    pub key: NodeKey,
    pub role: NodeRole,
}

/// Label every light and every matching mesh, in traversal order.
pub fn classify(scene: &SceneGraph, matcher: &TargetMatcher) -> Vec<NodeClassification> {
    let mut out = Vec::new();
    scene.traverse(|key, node| {
        if node.is_light() {
            out.push(NodeClassification { key, role: NodeRole::Light });
        } else if matcher.matches_node(node) {
            out.push(NodeClassification { key, role: NodeRole::Target });
        }
    });
    out
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
