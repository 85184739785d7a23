// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for shapes and vertices.
//!
//! Each `EntityId` is a monotonically increasing `u64` generated from a global
//! atomic counter. Vertices and shapes refer to each other only through these
//! handles (snap links, shadow neighbours, owning shape), never by ownership.
//! IDs are never reused within a process, so a handle to a removed entity
//! can always be told apart from a live one.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an entity (vertex or shape)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Create a new unique entity ID
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a vertex (real or shadow) in the canvas arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(EntityId);

/// Handle to a shape registered with the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ShapeId(EntityId);

impl VertexId {
    pub fn next() -> Self {
        Self(EntityId::next())
    }
}

impl ShapeId {
    pub fn next() -> Self {
        Self(EntityId::next())
    }
}

impl From<EntityId> for VertexId {
    fn from(id: EntityId) -> Self {
        Self(id)
    }
}

impl From<EntityId> for ShapeId {
    fn from(id: EntityId) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
