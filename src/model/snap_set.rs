// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Set of vertices a vertex is hard-snapped to.
//!
//! `SnapSet` wraps an `Arc<BTreeSet<VertexId>>` so a snapshot can be taken
//! cheaply before propagating a move to every bound vertex (the propagation
//! mutates the arena the set lives in). Mutations produce a new set
//! (copy-on-write via `Arc::make_mut`). The `BTreeSet` gives deterministic
//! iteration order, so propagation and unsnapping visit vertices in the same
//! order on every run.

use super::VertexId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Vertices bound to one vertex by hard snaps
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapSet {
    inner: Arc<BTreeSet<VertexId>>,
}

impl SnapSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, id: &VertexId) -> bool {
        self.inner.contains(id)
    }

    /// Iterate over bound vertices in ID order
    pub fn iter(&self) -> impl Iterator<Item = &VertexId> {
        self.inner.iter()
    }

    /// The bound vertex with the lowest ID
    pub fn first(&self) -> Option<VertexId> {
        self.inner.first().copied()
    }

    /// Bind a vertex. Returns false if it was already bound.
    pub fn insert(&mut self, id: VertexId) -> bool {
        if self.inner.contains(&id) {
            return false;
        }
        Arc::make_mut(&mut self.inner).insert(id)
    }

    /// Unbind a vertex. Returns false if it was not bound.
    pub fn remove(&mut self, id: &VertexId) -> bool {
        if !self.inner.contains(id) {
            return false;
        }
        Arc::make_mut(&mut self.inner).remove(id)
    }
}
