//! Shared types for the simtree simulation core: entity identity and the
//! small math values (poses, bounding boxes) the tree is built from.

pub mod id;
pub mod types;

pub use id::{EntityId, IdRegistry};
pub use types::{Aabb, Pose};
