// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for structural editing operations.
//!
//! Structural operations (inserting, removing and repositioning points)
//! validate their input before touching any state, so an `Err` always
//! leaves the canvas exactly as it was.

use crate::model::{ShapeId, VertexId};
use std::fmt;
use thiserror::Error;

/// Result alias used by every fallible canvas operation
pub type EditResult<T> = Result<T, EditError>;

/// An entity that an operation referred to by handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Vertex(VertexId),
    Shape(ShapeId),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Vertex(id) => write!(f, "vertex {id}"),
            Entity::Shape(id) => write!(f, "shape {id}"),
        }
    }
}

/// Errors surfaced by the editing core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Position input could not be turned into a point
    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    /// Index outside the shape's vertex sequence
    #[error("index {index} is out of range for a shape with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    /// Handle to a vertex or shape that has already been torn down
    #[error("{0} has already been removed")]
    UseAfterRemove(Entity),

    /// A pre-existing vertex cannot be inserted into this shape
    #[error("vertex {vertex} cannot be inserted into shape {shape}")]
    ForeignVertex { vertex: VertexId, shape: ShapeId },
}

impl EditError {
    pub(crate) fn invalid_position(reason: impl Into<String>) -> Self {
        EditError::InvalidPosition {
            reason: reason.into(),
        }
    }

    pub(crate) fn vertex_removed(id: VertexId) -> Self {
        EditError::UseAfterRemove(Entity::Vertex(id))
    }

    pub(crate) fn shape_removed(id: ShapeId) -> Self {
        EditError::UseAfterRemove(Entity::Shape(id))
    }
}
