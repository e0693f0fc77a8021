//! Collision entities: leaf nodes of the tree, each carrying at most one
//! shape.

use crate::entity::{Entity, EntityNode};
use crate::shape::Shape;
use simtree_common::EntityId;

/// A collision entity.
///
/// Holds at most one shape. Installing a shape is a whole-value
/// replacement, never a merge: the previous shape (and its cached
/// bounding box) is discarded entirely.
#[derive(Debug, Clone)]
pub struct Collision {
    node: EntityNode,
    shape: Option<Shape>,
}

impl Collision {
    pub fn new(id: EntityId, name: impl Into<String>, parent: EntityId) -> Self {
        Self {
            node: EntityNode::new(id, name, Some(parent)),
            shape: None,
        }
    }

    /// Install `shape`, discarding any previous one. Always succeeds.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = Some(shape);
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Mutable access, e.g. to run parameter setters or query the cached
    /// bounding box.
    pub fn shape_mut(&mut self) -> Option<&mut Shape> {
        self.shape.as_mut()
    }

    pub fn take_shape(&mut self) -> Option<Shape> {
        self.shape.take()
    }
}

impl Entity for Collision {
    fn node(&self) -> &EntityNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut EntityNode {
        &mut self.node
    }
}
