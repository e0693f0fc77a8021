//! The root of the ownership tree: the simulation clock plus the model
//! map and the id registry for everything beneath it.

use crate::entity::{Children, Entity, EntityNode};
use crate::model::Model;
use crate::stepper;
use simtree_common::{EntityId, IdRegistry};

/// Default fixed timestep in seconds.
const DEFAULT_TIME_STEP: f64 = 0.1;

/// A simulation world.
///
/// Owns the [`IdRegistry`] that names every entity beneath it, so
/// independent worlds allocate ids independently and never share state.
/// The whole tree is single-owner: `step` must not run concurrently with
/// any mutation on the same world.
#[derive(Debug, Clone)]
pub struct World {
    node: EntityNode,
    ids: IdRegistry,
    time: f64,
    time_step: f64,
    models: Children<Model>,
}

impl World {
    /// Create a standalone world. Its own id is the first one issued by
    /// its registry.
    pub fn new(name: impl Into<String>) -> Self {
        let mut ids = IdRegistry::new();
        let node = EntityNode::new(ids.next(), name, None);
        Self {
            node,
            ids,
            time: 0.0,
            time_step: DEFAULT_TIME_STEP,
            models: Children::new(),
        }
    }

    /// Create a world whose id was issued by an enclosing container (see
    /// [`Engine`](crate::engine::Engine)). Entities inside the world are
    /// still named by the world's own registry.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            node: EntityNode::new(id, name, None),
            ids: IdRegistry::new(),
            time: 0.0,
            time_step: DEFAULT_TIME_STEP,
            models: Children::new(),
        }
    }

    /// Simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Fixed timestep used by [`World::step`].
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.time_step = time_step;
    }

    /// Create a model owned by this world.
    pub fn add_model(&mut self, name: impl Into<String>) -> &mut Model {
        let parent = self.node.id();
        self.models.spawn(&mut self.ids, |id| Model::new(id, name, parent))
    }

    pub fn model(&self, id: EntityId) -> Option<&Model> {
        self.models.get(id)
    }

    pub fn model_mut(&mut self, id: EntityId) -> Option<&mut Model> {
        self.models.get_mut(id)
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.by_name(name)
    }

    pub fn model_by_name_mut(&mut self, name: &str) -> Option<&mut Model> {
        self.models.by_name_mut(name)
    }

    pub fn model_by_index(&self, index: usize) -> Option<&Model> {
        self.models.by_index(index)
    }

    /// Remove a model and its whole subtree (links, collisions, shapes).
    pub fn remove_model(&mut self, id: EntityId) -> bool {
        self.models.remove(id)
    }

    pub fn remove_model_by_name(&mut self, name: &str) -> bool {
        self.models.remove_by_name(name)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    pub fn models_mut(&mut self) -> impl Iterator<Item = &mut Model> {
        self.models.iter_mut()
    }

    /// The id registry alongside the model map, split-borrowed so callers
    /// can allocate ids for nested adds while holding a child mutably:
    ///
    /// ```
    /// use simtree_kernel::{Entity, World};
    ///
    /// let mut world = World::new("w");
    /// let model_id = world.add_model("m").id();
    /// let (ids, models) = world.parts_mut();
    /// let model = models.get_mut(model_id).unwrap();
    /// model.add_link(ids, "l");
    /// ```
    pub fn parts_mut(&mut self) -> (&mut IdRegistry, &mut Children<Model>) {
        (&mut self.ids, &mut self.models)
    }

    /// Advance by the world's fixed timestep.
    pub fn step(&mut self) {
        let dt = self.time_step;
        stepper::step(self, dt);
    }

    /// Advance by an explicit `dt` (seconds).
    pub fn step_by(&mut self, dt: f64) {
        stepper::step(self, dt);
    }
}

impl Entity for World {
    fn node(&self) -> &EntityNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut EntityNode {
        &mut self.node
    }
}
