use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an entity in a simulation tree.
///
/// Ids are issued by an [`IdRegistry`] and name one entity for its whole
/// lifetime; they are never reused, so a stale id and a never-issued id
/// are indistinguishable and both resolve to "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Reserved sentinel meaning "no entity". Never issued by a registry.
    ///
    /// Lookups in this crate report absence through `Option`; the sentinel
    /// exists for adapter layers that need a representable wire value.
    pub const NONE: EntityId = EntityId(u64::MAX);

    /// Whether this id is the reserved "no entity" sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Issues identifiers for one simulation context.
///
/// Each context (a `World`, or an engine naming its worlds) owns its own
/// registry; there is no process-wide counter, so independent contexts
/// allocate independently and tests are repeatable.
///
/// Ids are strictly increasing and never recycled: removing an entity
/// permanently retires its id. Single-writer; callers that share a
/// registry across threads must synchronize externally.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    next: u64,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current counter value, then advance it.
    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// How many ids this registry has issued so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
