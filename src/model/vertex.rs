// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex data: a real polygon corner or a shadow edge midpoint.
//!
//! A real vertex knows its index in the owning shape's sequence. A shadow
//! vertex instead knows the two real vertices it sits between and has no
//! index until it is promoted. All cross references are handles into the
//! canvas arena.

use super::{ShapeId, SnapSet, VertexId};
use crate::render::MarkerHandle;
use kurbo::Point;

/// Whether a vertex is committed to the shape's sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Part of the shape's ordered vertex sequence
    Real { index: usize },
    /// Midpoint helper on the edge `prev -> next`
    Shadow { prev: VertexId, next: VertexId },
}

/// A vertex owned by exactly one shape
#[derive(Debug, Clone)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) shape: ShapeId,
    pub(crate) position: Point,
    pub(crate) kind: VertexKind,
    /// Hard-snap bindings, always mirrored on the other side
    pub(crate) snapped_to: SnapSet,
    /// Real vertices of other shapes this one may snap to while dragged
    pub(crate) snap_candidates: Vec<VertexId>,
    /// Shadow on the edge ending at this vertex
    pub(crate) shadow_prev: Option<VertexId>,
    /// Shadow on the edge starting at this vertex
    pub(crate) shadow_next: Option<VertexId>,
    pub(crate) marker: MarkerHandle,
}

impl Vertex {
    pub(crate) fn real(shape: ShapeId, position: Point, marker: MarkerHandle) -> Self {
        Self::with_kind(shape, position, VertexKind::Real { index: 0 }, marker)
    }

    pub(crate) fn shadow(
        shape: ShapeId,
        position: Point,
        prev: VertexId,
        next: VertexId,
        marker: MarkerHandle,
    ) -> Self {
        Self::with_kind(shape, position, VertexKind::Shadow { prev, next }, marker)
    }

    fn with_kind(shape: ShapeId, position: Point, kind: VertexKind, marker: MarkerHandle) -> Self {
        Self {
            id: VertexId::next(),
            shape,
            position,
            kind,
            snapped_to: SnapSet::new(),
            snap_candidates: Vec::new(),
            shadow_prev: None,
            shadow_next: None,
            marker,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The shape this vertex belongs to
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    /// Index in the owning shape's sequence; `None` for shadows
    pub fn index(&self) -> Option<usize> {
        match self.kind {
            VertexKind::Real { index } => Some(index),
            VertexKind::Shadow { .. } => None,
        }
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self.kind, VertexKind::Shadow { .. })
    }

    /// The real vertices a shadow sits between
    pub fn neighbours(&self) -> Option<(VertexId, VertexId)> {
        match self.kind {
            VertexKind::Shadow { prev, next } => Some((prev, next)),
            VertexKind::Real { .. } => None,
        }
    }

    pub fn snapped_to(&self) -> &SnapSet {
        &self.snapped_to
    }

    pub fn snap_candidates(&self) -> &[VertexId] {
        &self.snap_candidates
    }

    pub fn shadow_prev(&self) -> Option<VertexId> {
        self.shadow_prev
    }

    pub fn shadow_next(&self) -> Option<VertexId> {
        self.shadow_next
    }

    pub fn marker(&self) -> MarkerHandle {
        self.marker
    }
}
