/// Resource-level material type.
///
/// A Material is a pure data description of a mesh surface: a base color
/// and an optional color map. `Clone` is a deep copy of the material state;
/// textures are immutable and shared.
///
/// Every mutation records what changed in a `MaterialChanges` set so the
/// renderer knows the material must be re-uploaded.

use std::sync::Arc;
use bitflags::bitflags;
use glam::Vec4;
use crate::resource::texture::Texture;

// ===== CHANGE FLAGS =====

bitflags! {
    /// Pending changes since the renderer last consumed the material
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MaterialChanges: u32 {
        /// Color map assigned or cleared
        const COLOR_MAP  = 1 << 0;
        /// Base color changed
        const BASE_COLOR = 1 << 1;
        /// Whole material replaced (restore from saved original)
        const REPLACED   = 1 << 2;
    }
}

// ===== MATERIAL =====

/// Material resource: visual description of a surface
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    base_color: Vec4,
    color_map: Option<Arc<Texture>>,
    changes: MaterialChanges,
    version: u64,
}

impl Material {
    /// Create a material with a base color and no color map
    pub fn new(name: impl Into<String>, base_color: Vec4) -> Self {
        Self {
            name: name.into(),
            base_color,
            color_map: None,
            changes: MaterialChanges::empty(),
            version: 0,
        }
    }

    /// Builder-style color map assignment (does not mark dirty)
    pub fn with_color_map(mut self, texture: Arc<Texture>) -> Self {
        self.color_map = Some(texture);
        self
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_color(&self) -> Vec4 {
        self.base_color
    }

    /// Current color map, if any
    pub fn color_map(&self) -> Option<&Arc<Texture>> {
        self.color_map.as_ref()
    }

    /// Monotonic counter bumped on every dirty mark
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Pending changes not yet consumed by the renderer
    pub fn changes(&self) -> MaterialChanges {
        self.changes
    }

    /// Whether the renderer must re-upload this material
    pub fn needs_update(&self) -> bool {
        !self.changes.is_empty()
    }

    // ===== MUTATION =====

    /// Assign (or clear) the color map
    pub fn set_color_map(&mut self, texture: Option<Arc<Texture>>) {
        self.color_map = texture;
        self.mark_dirty(MaterialChanges::COLOR_MAP);
    }

    pub fn set_base_color(&mut self, color: Vec4) {
        self.base_color = color;
        self.mark_dirty(MaterialChanges::BASE_COLOR);
    }

    /// Flag pending changes for re-upload
    pub fn mark_dirty(&mut self, changes: MaterialChanges) {
        self.changes |= changes;
        self.version += 1;
    }

    /// Consume and clear pending changes (called by the renderer after upload)
    pub fn take_changes(&mut self) -> MaterialChanges {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
