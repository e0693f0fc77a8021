//! Time stepping: advances the clock and propagates pose updates through
//! the owned subtree.
//!
//! One step is a pure function of `(state, dt)`: the traversal runs
//! pre-order in id order, no entity reads a sibling subtree, and no
//! wall-clock or random input is consulted. Models integrate their
//! linear/angular velocity into their pose with an explicit Euler step;
//! links and collisions keep their local pose. The per-entity hook exists
//! so a future integration policy can reach them without changing the
//! traversal contract.

use crate::entity::Entity;
use crate::link::Link;
use crate::model::Model;
use crate::world::World;

/// Advance `world` by `dt` seconds.
///
/// `dt == 0.0` is a valid call and leaves every pose unchanged.
pub fn step(world: &mut World, dt: f64) {
    let _span = tracing::debug_span!("step", time = world.time(), dt).entered();
    world.set_time(world.time() + dt);
    for model in world.models_mut() {
        step_model(model, dt);
    }
    tracing::trace!(time = world.time(), models = world.model_count(), "step complete");
}

fn step_model(model: &mut Model, dt: f64) {
    let next = model
        .pose()
        .integrate(model.linear_velocity(), model.angular_velocity(), dt);
    model.set_pose(next);
    for link in model.links_mut() {
        step_link(link, dt);
    }
}

fn step_link(link: &mut Link, dt: f64) {
    update_pose(link, dt);
    for collision in link.collisions_mut() {
        update_pose(collision, dt);
    }
}

/// Pose-update hook for entities with no velocity state of their own.
/// Local poses follow the parent; per-link dynamics live in the external
/// engine.
fn update_pose<E: Entity>(_entity: &mut E, _dt: f64) {}
