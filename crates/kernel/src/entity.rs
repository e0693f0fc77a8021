//! Generic tree-node machinery shared by every entity kind.
//!
//! # Invariants
//! - A node's id is immutable after creation and never reused.
//! - A node exclusively owns its children; dropping it drops the subtree.
//! - The parent back-reference is non-owning (an id, not a borrow), so
//!   the ownership graph stays a tree.

use simtree_common::{EntityId, IdRegistry, Pose};
use std::collections::BTreeMap;

/// Data common to every node in the ownership tree: identity, name, and
/// pose relative to the parent, plus a non-owning parent back-reference.
#[derive(Debug, Clone)]
pub struct EntityNode {
    id: EntityId,
    name: String,
    pose: Pose,
    parent: Option<EntityId>,
}

impl EntityNode {
    pub fn new(id: EntityId, name: impl Into<String>, parent: Option<EntityId>) -> Self {
        Self {
            id,
            name: name.into(),
            pose: Pose::default(),
            parent,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names are mutable and not required to be unique among siblings.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Id of the owning parent, `None` for a tree root.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }
}

/// Access to the embedded [`EntityNode`], so callers can treat any entity
/// kind uniformly.
pub trait Entity {
    fn node(&self) -> &EntityNode;
    fn node_mut(&mut self) -> &mut EntityNode;

    fn id(&self) -> EntityId {
        self.node().id()
    }

    fn name(&self) -> &str {
        self.node().name()
    }

    fn set_name(&mut self, name: impl Into<String>) {
        self.node_mut().set_name(name);
    }

    fn pose(&self) -> Pose {
        self.node().pose()
    }

    fn set_pose(&mut self, pose: Pose) {
        self.node_mut().set_pose(pose);
    }

    fn parent(&self) -> Option<EntityId> {
        self.node().parent()
    }
}

/// An id-ordered map of owned child entities.
///
/// Iteration runs in id order (`BTreeMap`), so traversal and positional
/// access are deterministic. A positional index is a snapshot over the
/// current contents: any insert or remove may shift it, so callers must
/// not cache an index across mutating calls.
#[derive(Debug, Clone)]
pub struct Children<T> {
    map: BTreeMap<EntityId, T>,
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Children<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id from `ids` and insert the child built by
    /// `make`. Ownership passes to this map; the returned borrow is the
    /// newly inserted child.
    pub fn spawn(&mut self, ids: &mut IdRegistry, make: impl FnOnce(EntityId) -> T) -> &mut T {
        let id = ids.next();
        let child = make(id);
        debug_assert_eq!(child.id(), id);
        tracing::debug!(%id, name = child.name(), "entity added");
        self.map.entry(id).or_insert(child)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.map.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.map.get_mut(&id)
    }

    /// First child with the given name, in id order. Names are not
    /// required to be unique; with duplicates the lowest id wins.
    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.map.values().find(|c| c.name() == name)
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        self.map.values_mut().find(|c| c.name() == name)
    }

    /// Child at position `index` in id order, or `None` if out of range.
    /// See the type-level note on index stability.
    pub fn by_index(&self, index: usize) -> Option<&T> {
        self.map.values().nth(index)
    }

    pub fn by_index_mut(&mut self, index: usize) -> Option<&mut T> {
        self.map.values_mut().nth(index)
    }

    /// Remove the child with the given id together with everything it
    /// owns. Returns whether a child was removed; either the whole
    /// subtree goes or nothing does.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let removed = self.map.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "entity removed");
        }
        removed
    }

    /// Remove the first child with the given name (lowest id), with its
    /// whole subtree.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let found = self.map.values().find(|c| c.name() == name).map(|c| c.id());
        match found {
            Some(id) => self.remove(id),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.map.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.map.values_mut()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
