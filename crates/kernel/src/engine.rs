//! Engine: a container of independent simulation worlds.

use crate::entity::Children;
use crate::world::World;
use simtree_common::{EntityId, IdRegistry};

/// Owns any number of worlds and names them with its own registry.
///
/// Each world still owns the registry for the entities beneath it; the
/// engine registry issues world ids only.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    ids: IdRegistry,
    worlds: Children<World>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world owned by this engine.
    pub fn add_world(&mut self, name: impl Into<String>) -> &mut World {
        self.worlds.spawn(&mut self.ids, |id| World::with_id(id, name))
    }

    pub fn world(&self, id: EntityId) -> Option<&World> {
        self.worlds.get(id)
    }

    pub fn world_mut(&mut self, id: EntityId) -> Option<&mut World> {
        self.worlds.get_mut(id)
    }

    pub fn world_by_name(&self, name: &str) -> Option<&World> {
        self.worlds.by_name(name)
    }

    pub fn world_by_name_mut(&mut self, name: &str) -> Option<&mut World> {
        self.worlds.by_name_mut(name)
    }

    /// Remove a world and everything in it.
    pub fn remove_world(&mut self, id: EntityId) -> bool {
        self.worlds.remove(id)
    }

    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    pub fn worlds(&self) -> impl Iterator<Item = &World> {
        self.worlds.iter()
    }

    pub fn worlds_mut(&mut self) -> impl Iterator<Item = &mut World> {
        self.worlds.iter_mut()
    }
}
