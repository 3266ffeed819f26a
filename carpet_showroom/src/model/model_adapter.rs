/// ModelAdapter: prepares a loaded showroom model for display.
///
/// Adaptation runs in two phases: `classify` labels embedded lights and
/// carpet candidates without touching the graph, then `apply` switches the
/// lights off, rescales the winning carpet mesh, captures its pristine
/// material and computes its world-space bounds.
///
/// Texture swaps are asynchronous. `apply_texture` hands out a
/// `TextureRequest` tagged with a generation number; the caller completes it
/// with the decoded image whenever the load resolves. Only the request from
/// the latest generation is applied, so a slow stale load can never
/// overwrite a newer choice.

use std::sync::Arc;
use crate::config::AdapterConfig;
use crate::error::Result;
use crate::resource::{Material, MaterialChanges, Texture, TextureSource};
use crate::scene::{AABB, NodeKey, SceneGraph};
use crate::{viewer_debug, viewer_info, viewer_warn};
use super::classify::{classify, NodeClassification, NodeRole, TargetMatcher};

const SOURCE: &str = "showroom::ModelAdapter";

/// Result of adapting one scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptOutcome {
    /// World-space carpet bounds; `None` when no carpet or empty geometry
    pub bounding_box: Option<AABB>,
    /// Carpet mesh node; its material is the swap target
    pub target: Option<NodeKey>,
    /// Number of embedded lights switched off
    pub lights_disabled: usize,
}

/// Pending asynchronous texture load
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRequest {
    generation: u64,
    source: TextureSource,
}

impl TextureRequest {
    /// Source the loader should fetch and decode
    pub fn source(&self) -> &TextureSource {
        &self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Finds and prepares the carpet mesh, and owns its texture-swap state
pub struct ModelAdapter {
    matcher: TargetMatcher,
    target_scale: glam::Vec3,
    target: Option<NodeKey>,
    original_material: Option<Material>,
    generation: u64,
}

impl ModelAdapter {
    pub fn new(config: &AdapterConfig) -> Self {
        Self {
            matcher: TargetMatcher::new(&config.target_keywords),
            target_scale: config.target_scale,
            target: None,
            original_material: None,
            generation: 0,
        }
    }

    pub fn matcher(&self) -> &TargetMatcher {
        &self.matcher
    }

    /// Carpet mesh found by the last `apply`
    pub fn target(&self) -> Option<NodeKey> {
        self.target
    }

    /// Material captured before any swap, if any
    pub fn original_material(&self) -> Option<&Material> {
        self.original_material.as_ref()
    }

    /// Current texture-swap generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Forget per-load state before adapting a different asset.
    ///
    /// Bumps the generation so loads requested for the old asset are dropped.
    pub fn reset(&mut self) {
        self.target = None;
        self.original_material = None;
        self.generation += 1;
    }

    /// Classify then apply in one call.
    pub fn adapt(&mut self, scene: &mut SceneGraph) -> AdaptOutcome {
        let classes = classify(scene, &self.matcher);
        self.apply(scene, &classes)
    }

    /// Mutate only the classified nodes.
    ///
    /// Lights are switched off unconditionally. Among targets the last one
    /// in traversal order wins.
    pub fn apply(&mut self, scene: &mut SceneGraph, classes: &[NodeClassification]) -> AdaptOutcome {
        let mut lights_disabled = 0;
        for class in classes.iter().filter(|c| c.role == NodeRole::Light) {
            if let Some(node) = scene.node_mut(class.key) {
                node.set_visible(false);
                node.set_light_intensity(0.0);
                lights_disabled += 1;
            }
        }
        if lights_disabled > 0 {
            viewer_debug!(SOURCE, "Disabled {} embedded light(s)", lights_disabled);
        }

        let targets: Vec<NodeKey> = classes
            .iter()
            .filter(|c| c.role == NodeRole::Target && scene.contains(c.key))
            .map(|c| c.key)
            .collect();

        let Some(&target) = targets.last() else {
            viewer_warn!(SOURCE, "No mesh matching {:?}; annotations disabled", self.matcher.keywords());
            self.target = None;
            return AdaptOutcome { bounding_box: None, target: None, lights_disabled };
        };
        if targets.len() > 1 {
            viewer_warn!(SOURCE, "{} meshes match {:?}; using the last one visited",
                targets.len(), self.matcher.keywords());
        }

        let bounding_box = self.prepare_target(scene, target);
        self.target = Some(target);
        AdaptOutcome { bounding_box, target: Some(target), lights_disabled }
    }

    /// Rescale, capture the original material, and compute world bounds.
    fn prepare_target(&mut self, scene: &mut SceneGraph, key: NodeKey) -> Option<AABB> {
        let node = scene.node_mut(key)?;
        node.set_scale(self.target_scale);

        if self.original_material.is_none() {
            self.original_material = node.material().cloned();
        }

        scene.update_world_transforms();

        let node = scene.node(key)?;
        let name = node.name().to_string();
        let Some(local) = node.geometry().and_then(|g| g.local_bounds()) else {
            viewer_warn!(SOURCE, "Carpet mesh '{}' has no usable geometry; bounds unavailable", name);
            return None;
        };

        let Some(world) = local.transformed(node.cached_world_matrix()) else {
            viewer_warn!(SOURCE, "Carpet mesh '{}' has a non-finite world transform; bounds unavailable", name);
            return None;
        };
        viewer_info!(SOURCE, "Carpet mesh '{}' bounds min {:?} max {:?}", name, world.min, world.max);
        viewer_debug!(SOURCE, "Carpet size {:.3} x {:.3}, center {:?}",
            world.size().x, world.size().z, world.center());
        Some(world)
    }

    /// Request a texture swap, or restore the original material with `None`.
    ///
    /// Every call starts a new generation, so any load still in flight is
    /// superseded. Returns the request to hand to the texture loader, or
    /// `None` when nothing has to be loaded (restore, or no carpet).
    pub fn apply_texture(&mut self, scene: &mut SceneGraph, source: Option<TextureSource>) -> Option<TextureRequest> {
        self.generation += 1;

        let target = self.target?;
        match source {
            Some(source) => {
                viewer_debug!(SOURCE, "Texture load #{} requested: {}", self.generation, source.reference());
                Some(TextureRequest { generation: self.generation, source })
            }
            None => {
                self.restore_original(scene, target);
                None
            }
        }
    }

    fn restore_original(&mut self, scene: &mut SceneGraph, target: NodeKey) {
        let (Some(original), Some(node)) = (self.original_material.as_ref(), scene.node_mut(target)) else {
            return;
        };
        let mut fresh = original.clone();
        fresh.mark_dirty(MaterialChanges::REPLACED | MaterialChanges::COLOR_MAP);
        node.set_material(fresh);
        viewer_info!(SOURCE, "Restored original carpet material '{}'", original.name());
    }

    /// Deliver the outcome of a texture load.
    ///
    /// Returns `true` if the texture was applied. Stale generations, load
    /// failures and a vanished carpet leave the material untouched.
    pub fn complete_texture(
        &mut self,
        scene: &mut SceneGraph,
        request: TextureRequest,
        loaded: Result<Texture>,
    ) -> bool {
        if request.generation != self.generation {
            viewer_debug!(SOURCE, "Discarding stale texture load #{} ({}); current is #{}",
                request.generation, request.source.reference(), self.generation);
            return false;
        }

        let mut texture = match loaded {
            Ok(texture) => texture,
            Err(err) => {
                viewer_warn!(SOURCE, "Texture '{}' failed to load: {}", request.source.reference(), err);
                return false;
            }
        };

        let material = match self.target {
            Some(key) => scene.node_mut(key).and_then(|node| node.material_mut()),
            None => None,
        };
        let Some(material) = material else {
            return false;
        };

        texture.configure_as_gltf_color_map();
        material.set_color_map(Some(Arc::new(texture)));
        viewer_info!(SOURCE, "Applied texture '{}' to carpet", request.source.reference());
        true
    }
}

#[cfg(test)]
#[path = "model_adapter_tests.rs"]
mod tests;
