//! Shape geometry and cached axis-aligned bounding boxes.
//!
//! Geometry is a closed tagged variant; adding a kind is a compile-time
//! checked change because every consumer matches exhaustively.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use simtree_common::Aabb;

/// Read-only tag identifying a geometry variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Empty,
    Box,
    Cylinder,
    Sphere,
    Mesh,
}

/// The closed set of geometric primitives a collision can carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Placeholder geometry with a degenerate bounding box.
    Empty,
    /// Axis-aligned box centered at the local origin.
    Box { size: DVec3 },
    /// Cylinder with its axis along local Z.
    Cylinder { radius: f64, length: f64 },
    Sphere { radius: f64 },
    /// Triangle mesh, represented here by its precomputed local-space
    /// bounding box and a per-axis scale factor.
    Mesh { scale: DVec3, mesh_aabb: Aabb },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Empty => ShapeKind::Empty,
            Geometry::Box { .. } => ShapeKind::Box,
            Geometry::Cylinder { .. } => ShapeKind::Cylinder,
            Geometry::Sphere { .. } => ShapeKind::Sphere,
            Geometry::Mesh { .. } => ShapeKind::Mesh,
        }
    }

    /// Bounding box of this geometry in its local frame.
    pub fn aabb(&self) -> Aabb {
        match *self {
            Geometry::Empty => Aabb::ZERO,
            Geometry::Box { size } => Aabb::from_half_extents(size * 0.5),
            Geometry::Cylinder { radius, length } => {
                Aabb::from_half_extents(DVec3::new(radius, radius, length * 0.5))
            }
            Geometry::Sphere { radius } => Aabb::from_half_extents(DVec3::splat(radius)),
            Geometry::Mesh { scale, mesh_aabb } => mesh_aabb.scaled(scale),
        }
    }
}

/// A geometry value plus its cached bounding box.
///
/// Every parameter setter marks the cache dirty; [`Shape::bounding_box`]
/// recomputes lazily, so `!dirty` always implies the cache matches the
/// current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    bbox: Aabb,
    dirty: bool,
}

impl Shape {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            bbox: Aabb::ZERO,
            dirty: true,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Replace the whole geometry value; the previous one is discarded.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.dirty = true;
    }

    /// Set the box size. Ignored unless the geometry is a box.
    pub fn set_size(&mut self, size: DVec3) {
        let kind = self.kind();
        match &mut self.geometry {
            Geometry::Box { size: s } => {
                *s = size;
                self.dirty = true;
            }
            _ => tracing::debug!(kind = ?kind, "set_size ignored"),
        }
    }

    /// Set the radius of a cylinder or sphere. Ignored for other kinds.
    pub fn set_radius(&mut self, radius: f64) {
        let kind = self.kind();
        match &mut self.geometry {
            Geometry::Cylinder { radius: r, .. } | Geometry::Sphere { radius: r } => {
                *r = radius;
                self.dirty = true;
            }
            _ => tracing::debug!(kind = ?kind, "set_radius ignored"),
        }
    }

    /// Set the cylinder length. Ignored for other kinds.
    pub fn set_length(&mut self, length: f64) {
        let kind = self.kind();
        match &mut self.geometry {
            Geometry::Cylinder { length: l, .. } => {
                *l = length;
                self.dirty = true;
            }
            _ => tracing::debug!(kind = ?kind, "set_length ignored"),
        }
    }

    /// Set the mesh scale. Ignored for other kinds.
    pub fn set_scale(&mut self, scale: DVec3) {
        let kind = self.kind();
        match &mut self.geometry {
            Geometry::Mesh { scale: s, .. } => {
                *s = scale;
                self.dirty = true;
            }
            _ => tracing::debug!(kind = ?kind, "set_scale ignored"),
        }
    }

    /// Replace the mesh's precomputed local bounding box. Ignored for
    /// other kinds.
    pub fn set_mesh_aabb(&mut self, aabb: Aabb) {
        let kind = self.kind();
        match &mut self.geometry {
            Geometry::Mesh { mesh_aabb, .. } => {
                *mesh_aabb = aabb;
                self.dirty = true;
            }
            _ => tracing::debug!(kind = ?kind, "set_mesh_aabb ignored"),
        }
    }

    /// The bounding box for the current parameters, recomputing the cache
    /// first if any setter ran since the last call.
    pub fn bounding_box(&mut self) -> Aabb {
        if self.dirty {
            self.bbox = self.geometry.aabb();
            self.dirty = false;
        }
        self.bbox
    }

    /// Whether the cached bounding box is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(Geometry::Empty)
    }
}

impl From<Geometry> for Shape {
    fn from(geometry: Geometry) -> Self {
        Self::new(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_bounding_box_is_centered_half_extents() {
        let mut shape = Shape::new(Geometry::Box {
            size: DVec3::new(2.0, 4.0, 6.0),
        });
        let bb = shape.bounding_box();
        assert_eq!(bb.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bb.max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn sphere_bounding_box() {
        let mut shape = Shape::new(Geometry::Sphere { radius: 1.5 });
        let bb = shape.bounding_box();
        assert_eq!(bb, Aabb::from_half_extents(DVec3::splat(1.5)));
    }

    #[test]
    fn cylinder_bounding_box_axis_along_z() {
        let mut shape = Shape::new(Geometry::Cylinder {
            radius: 2.0,
            length: 10.0,
        });
        let bb = shape.bounding_box();
        assert_eq!(bb.min, DVec3::new(-2.0, -2.0, -5.0));
        assert_eq!(bb.max, DVec3::new(2.0, 2.0, 5.0));
    }

    #[test]
    fn mesh_bounding_box_scales_precomputed_aabb() {
        let mut shape = Shape::new(Geometry::Mesh {
            scale: DVec3::new(2.0, 2.0, 2.0),
            mesh_aabb: Aabb::new(DVec3::new(-1.0, 0.0, -1.0), DVec3::new(1.0, 3.0, 1.0)),
        });
        let bb = shape.bounding_box();
        assert_eq!(bb.min, DVec3::new(-2.0, 0.0, -2.0));
        assert_eq!(bb.max, DVec3::new(2.0, 6.0, 2.0));
    }

    #[test]
    fn empty_bounding_box_is_degenerate() {
        let mut shape = Shape::default();
        assert_eq!(shape.kind(), ShapeKind::Empty);
        assert_eq!(shape.bounding_box(), Aabb::ZERO);
    }

    #[test]
    fn setter_marks_dirty_and_query_clears_it() {
        let mut shape = Shape::new(Geometry::Sphere { radius: 1.0 });
        assert!(shape.is_dirty());
        shape.bounding_box();
        assert!(!shape.is_dirty());

        shape.set_radius(2.0);
        assert!(shape.is_dirty());
        assert_eq!(
            shape.bounding_box(),
            Aabb::from_half_extents(DVec3::splat(2.0))
        );
        assert!(!shape.is_dirty());
    }

    #[test]
    fn consecutive_setters_without_query_yield_latest_parameters() {
        let mut shape = Shape::new(Geometry::Sphere { radius: 1.0 });
        shape.set_radius(1.0);
        shape.set_radius(2.0);
        // No bounding_box() call in between: the final query must see the
        // latest radius, not an intermediate value.
        assert_eq!(
            shape.bounding_box(),
            Aabb::from_half_extents(DVec3::splat(2.0))
        );
    }

    #[test]
    fn mismatched_setter_is_ignored_and_stays_clean() {
        let mut shape = Shape::new(Geometry::Box { size: DVec3::ONE });
        shape.bounding_box();
        shape.set_radius(5.0);
        assert!(!shape.is_dirty());
        assert_eq!(shape.bounding_box(), Aabb::from_half_extents(DVec3::splat(0.5)));
    }

    #[test]
    fn set_geometry_replaces_kind() {
        let mut shape = Shape::new(Geometry::Box { size: DVec3::ONE });
        shape.bounding_box();
        shape.set_geometry(Geometry::Sphere { radius: 3.0 });
        assert_eq!(shape.kind(), ShapeKind::Sphere);
        assert_eq!(
            shape.bounding_box(),
            Aabb::from_half_extents(DVec3::splat(3.0))
        );
    }

    #[test]
    fn cylinder_setters_update_both_parameters() {
        let mut shape = Shape::new(Geometry::Cylinder {
            radius: 1.0,
            length: 1.0,
        });
        shape.set_radius(3.0);
        shape.set_length(8.0);
        let bb = shape.bounding_box();
        assert_eq!(bb.min, DVec3::new(-3.0, -3.0, -4.0));
        assert_eq!(bb.max, DVec3::new(3.0, 3.0, 4.0));
    }
}
