/// AnnotationLayout: labeled markers derived from the carpet bounds.
///
/// Five markers sit just above the carpet: the two near corners, the middle
/// of the near edge, and the two far corners, each pulled inward by a
/// constant inset. "Near" is +z (toward the default camera).
///
/// The layout is a pure function of the box and the config; calling it
/// twice with the same inputs yields identical output.

use glam::Vec3;
use crate::config::LayoutConfig;
use crate::scene::AABB;

/// A labeled point of interest on the carpet
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// 1-based, stable across regenerations
    pub id: u32,
    pub position: Vec3,
    pub title: String,
    pub description: String,
}

/// Label text for one marker slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationLabel {
    pub title: &'static str,
    pub description: &'static str,
}

/// Labels in marker order (ids 1..=5)
pub const DEFAULT_LABELS: [AnnotationLabel; 5] = [
    AnnotationLabel { title: "Hand-Knotted", description: "400+ knots per sq inch" },
    AnnotationLabel { title: "Silk Blend", description: "Wool & silk mix" },
    AnnotationLabel { title: "Natural Dyes", description: "Eco-friendly colors" },
    AnnotationLabel { title: "Traditional", description: "Persian motifs" },
    AnnotationLabel { title: "Pile Depth", description: "3D texture" },
];

/// Computes annotation markers from a bounding box
#[derive(Debug, Clone)]
pub struct AnnotationLayout {
    config: LayoutConfig,
    labels: [AnnotationLabel; 5],
}

impl AnnotationLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, labels: DEFAULT_LABELS }
    }

    /// Replace the marker labels
    pub fn with_labels(mut self, labels: [AnnotationLabel; 5]) -> Self {
        self.labels = labels;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Exactly five annotations for a box, none without one.
    ///
    /// Insets larger than half the box width or depth make markers cross;
    /// that is accepted, not corrected.
    pub fn layout(&self, bounds: Option<&AABB>) -> Vec<Annotation> {
        let Some(bounds) = bounds else {
            return Vec::new();
        };

        let (min, max) = (bounds.min, bounds.max);
        let inset = self.config.inset;
        let y = max.y + self.config.surface_offset;
        let center_x = (min.x + max.x) / 2.0;

        let near_z = max.z - inset;
        let far_z = min.z + inset;
        let left_x = min.x + inset;
        let right_x = max.x - inset;

        let positions = [
            Vec3::new(left_x, y, near_z),
            Vec3::new(right_x, y, near_z),
            Vec3::new(center_x, y, near_z),
            Vec3::new(left_x, y, far_z),
            Vec3::new(right_x, y, far_z),
        ];

        positions
            .iter()
            .zip(self.labels.iter())
            .enumerate()
            .map(|(i, (&position, label))| Annotation {
                id: i as u32 + 1,
                position,
                title: label.title.to_string(),
                description: label.description.to_string(),
            })
            .collect()
    }

    /// Raw corners (far-left, far-right, near-left, near-right) and center,
    /// at the marker height, for a debug overlay.
    pub fn debug_markers(&self, bounds: &AABB) -> [Vec3; 5] {
        let (min, max) = (bounds.min, bounds.max);
        let y = max.y + self.config.surface_offset;
        [
            Vec3::new(min.x, y, min.z),
            Vec3::new(max.x, y, min.z),
            Vec3::new(min.x, y, max.z),
            Vec3::new(max.x, y, max.z),
            Vec3::new((min.x + max.x) / 2.0, y, (min.z + max.z) / 2.0),
        ]
    }
}

impl Default for AnnotationLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Look up an annotation by id
pub fn find_annotation(annotations: &[Annotation], id: u32) -> Option<&Annotation> {
    annotations.iter().find(|a| a.id == id)
}

#[cfg(test)]
#[path = "annotation_layout_tests.rs"]
mod tests;
