//! Identity-keyed bookkeeping for graph traversals.
//!
//! Nodes are keyed by [`ObjectId`], never by content. Visited nodes live in
//! an arena (`Vec`) indexed through a hash map, and the arena holds a handle
//! to every source node so an identity cannot be reused while the tracker
//! is alive.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::value::{Object, ObjectId};

struct Slot<C> {
    #[allow(dead_code)]
    source: Object,
    companion: C,
}

/// Maps visited source objects to a companion value (for example the
/// clone produced for them).
pub struct Tracker<C> {
    slots: Vec<Slot<C>>,
    index: HashMap<ObjectId, usize>,
}

impl<C> Tracker<C> {
    pub fn new() -> Self {
        Tracker {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the companion recorded for `source`, if it was visited.
    pub fn track(&self, source: &Object) -> Option<&C> {
        let slot = *self.index.get(&source.id())?;
        trace!(id = ?source.id(), "tracker hit");
        Some(&self.slots[slot].companion)
    }

    /// Records `companion` for `source`. A second record for the same
    /// source replaces the first.
    pub fn record(&mut self, source: &Object, companion: C) {
        match self.index.get(&source.id()) {
            Some(&slot) => self.slots[slot].companion = companion,
            None => {
                self.index.insert(source.id(), self.slots.len());
                self.slots.push(Slot {
                    source: source.clone(),
                    companion,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<C> Default for Tracker<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered pairs of objects currently assumed equal while a comparison
/// is in progress below them.
#[derive(Default)]
pub struct PairTracker {
    pairs: HashSet<(ObjectId, ObjectId)>,
}

impl PairTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `(a, b)` is already provisionally equal.
    pub fn contains(&self, a: &Object, b: &Object) -> bool {
        let hit = self.pairs.contains(&(a.id(), b.id()));
        if hit {
            trace!(left = ?a.id(), right = ?b.id(), "comparison cycle");
        }
        hit
    }

    /// Marks `(a, b)` as provisionally equal.
    pub fn insert(&mut self, a: &Object, b: &Object) {
        self.pairs.insert((a.id(), b.id()));
    }

    /// Drops the provisional mark once the pair has been decided.
    pub fn remove(&mut self, a: &Object, b: &Object) {
        self.pairs.remove(&(a.id(), b.id()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
