/// Axis-aligned bounding boxes.
///
/// Built from mesh positions in local space, then moved to world space with
/// the node's resolved world matrix. A box is only ever constructed with
/// `min <= max` on every axis; empty or non-finite input yields `None`.

use glam::{Vec3, Mat4};

// ===== AABB =====

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Build a box from two corners.
    ///
    /// Returns `None` if any component is non-finite or `min > max` on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Option<AABB> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return None;
        }
        Some(AABB { min, max })
    }

    /// Smallest box enclosing all points. `None` for an empty slice or
    /// when any point is non-finite.
    pub fn from_points(points: &[Vec3]) -> Option<AABB> {
        let (first, rest) = points.split_first()?;
        if !first.is_finite() {
            return None;
        }

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            if !p.is_finite() {
                return None;
            }
            min = min.min(*p);
            max = max.max(*p);
        }

        Some(AABB { min, max })
    }

    /// The 8 corners, x varying fastest.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Transform this box by an affine matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for a tight result without transforming all 8 corners. `None` when the
    /// matrix produces non-finite corners (zero-size or infinite scale).
    pub fn transformed(&self, matrix: &Mat4) -> Option<AABB> {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB::new(new_min, new_max)
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extents along each axis (width, height, depth)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x
        && p.y >= self.min.y && p.y <= self.max.y
        && p.z >= self.min.z && p.z <= self.max.z
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Same box shifted by `offset`
    pub fn translated(&self, offset: Vec3) -> AABB {
        AABB { min: self.min + offset, max: self.max + offset }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
