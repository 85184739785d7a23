// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape and vertex data model

pub mod entity_id;
pub mod shape;
pub mod snap_set;
pub mod vertex;

pub use entity_id::{EntityId, ShapeId, VertexId};
pub use shape::{Shape, ShapeState};
pub use snap_set::SnapSet;
pub use vertex::{Vertex, VertexKind};
