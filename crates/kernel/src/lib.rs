//! Simulation kernel: the entity ownership tree and its stepping loop.
//!
//! The hierarchy is World → Model → Link → Collision → Shape. Dynamics,
//! collision response, and constraint solving are delegated to an
//! external engine; this crate only keeps the tree, the identities, the
//! clock, and the shape bounding boxes.
//!
//! # Invariants
//! - Ids come from a per-context registry and are never recycled.
//! - A node exclusively owns its subtree; removal cascades all-or-nothing.
//! - Lookups are total: absence is `None`/`false`, never a panic.
//! - Stepping is deterministic: a pure function of `(state, dt)`.

pub mod collision;
pub mod engine;
pub mod entity;
pub mod link;
pub mod model;
pub mod shape;
pub mod stepper;
pub mod world;

pub use collision::Collision;
pub use engine::Engine;
pub use entity::{Children, Entity, EntityNode};
pub use link::Link;
pub use model::Model;
pub use shape::{Geometry, Shape, ShapeKind};
pub use world::World;
