//! Link entities: the rigid bodies of a model, owning its collisions.

use crate::collision::Collision;
use crate::entity::{Children, Entity, EntityNode};
use simtree_common::{EntityId, IdRegistry};

/// A link entity. Carries no state beyond the common node data and its
/// owned collisions.
#[derive(Debug, Clone)]
pub struct Link {
    node: EntityNode,
    collisions: Children<Collision>,
}

impl Link {
    pub fn new(id: EntityId, name: impl Into<String>, parent: EntityId) -> Self {
        Self {
            node: EntityNode::new(id, name, Some(parent)),
            collisions: Children::new(),
        }
    }

    /// Create a collision owned by this link, drawing its id from `ids`.
    pub fn add_collision(&mut self, ids: &mut IdRegistry, name: impl Into<String>) -> &mut Collision {
        let parent = self.node.id();
        self.collisions.spawn(ids, |id| Collision::new(id, name, parent))
    }

    pub fn collision(&self, id: EntityId) -> Option<&Collision> {
        self.collisions.get(id)
    }

    pub fn collision_mut(&mut self, id: EntityId) -> Option<&mut Collision> {
        self.collisions.get_mut(id)
    }

    pub fn collision_by_name(&self, name: &str) -> Option<&Collision> {
        self.collisions.by_name(name)
    }

    pub fn collision_by_name_mut(&mut self, name: &str) -> Option<&mut Collision> {
        self.collisions.by_name_mut(name)
    }

    pub fn collision_by_index(&self, index: usize) -> Option<&Collision> {
        self.collisions.by_index(index)
    }

    /// Remove a collision and everything it owns. Returns whether one was
    /// removed.
    pub fn remove_collision(&mut self, id: EntityId) -> bool {
        self.collisions.remove(id)
    }

    pub fn remove_collision_by_name(&mut self, name: &str) -> bool {
        self.collisions.remove_by_name(name)
    }

    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }

    pub fn collisions(&self) -> impl Iterator<Item = &Collision> {
        self.collisions.iter()
    }

    pub fn collisions_mut(&mut self) -> impl Iterator<Item = &mut Collision> {
        self.collisions.iter_mut()
    }
}

impl Entity for Link {
    fn node(&self) -> &EntityNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut EntityNode {
        &mut self.node
    }
}
