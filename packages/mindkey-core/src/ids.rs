use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the mind-map forest.
///
/// Serialized transparently so persisted JSON carries plain integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Unique identifier for a stored template.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub u64);

/// Unique identifier for a saved idea.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(pub u64);

/// Unique identifier for a note.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

/// Monotonic id source shared by every id-allocating collection.
///
/// Ids loaded from storage or brought in by a template are fed back through
/// [`IdAllocator::observe`] so a fresh allocation can never collide with an
/// existing id within the process lifetime. A wall-clock source (the obvious
/// alternative) collides when two allocations land in the same clock tick.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating above `last` (e.g. the highest id seen so far).
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Record an externally sourced id so it is never re-issued.
    pub fn observe(&mut self, existing: u64) {
        self.last = self.last.max(existing);
    }

    /// Highest id issued or observed so far.
    pub fn last(&self) -> u64 {
        self.last
    }
}
