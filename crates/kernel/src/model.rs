//! Model entities: the units the stepper advances, owning links and
//! carrying linear/angular velocity.

use crate::entity::{Children, Entity, EntityNode};
use crate::link::Link;
use glam::DVec3;
use simtree_common::{EntityId, IdRegistry};

/// A model entity.
///
/// The velocities are integrated into the model's pose by the stepper
/// (explicit Euler); nothing in this core ever computes them, that is the
/// external dynamics engine's job.
#[derive(Debug, Clone)]
pub struct Model {
    node: EntityNode,
    linear_velocity: DVec3,
    angular_velocity: DVec3,
    links: Children<Link>,
}

impl Model {
    pub fn new(id: EntityId, name: impl Into<String>, parent: EntityId) -> Self {
        Self {
            node: EntityNode::new(id, name, Some(parent)),
            linear_velocity: DVec3::ZERO,
            angular_velocity: DVec3::ZERO,
            links: Children::new(),
        }
    }

    pub fn linear_velocity(&self) -> DVec3 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: DVec3) {
        self.linear_velocity = velocity;
    }

    pub fn angular_velocity(&self) -> DVec3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, velocity: DVec3) {
        self.angular_velocity = velocity;
    }

    /// Create a link owned by this model, drawing its id from `ids`.
    pub fn add_link(&mut self, ids: &mut IdRegistry, name: impl Into<String>) -> &mut Link {
        let parent = self.node.id();
        self.links.spawn(ids, |id| Link::new(id, name, parent))
    }

    pub fn link(&self, id: EntityId) -> Option<&Link> {
        self.links.get(id)
    }

    pub fn link_mut(&mut self, id: EntityId) -> Option<&mut Link> {
        self.links.get_mut(id)
    }

    pub fn link_by_name(&self, name: &str) -> Option<&Link> {
        self.links.by_name(name)
    }

    pub fn link_by_name_mut(&mut self, name: &str) -> Option<&mut Link> {
        self.links.by_name_mut(name)
    }

    pub fn link_by_index(&self, index: usize) -> Option<&Link> {
        self.links.by_index(index)
    }

    /// Remove a link and everything it owns (collisions, shapes).
    pub fn remove_link(&mut self, id: EntityId) -> bool {
        self.links.remove(id)
    }

    pub fn remove_link_by_name(&mut self, name: &str) -> bool {
        self.links.remove_by_name(name)
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn links_mut(&mut self) -> impl Iterator<Item = &mut Link> {
        self.links.iter_mut()
    }
}

impl Entity for Model {
    fn node(&self) -> &EntityNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut EntityNode {
        &mut self.node
    }
}
