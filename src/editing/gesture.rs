// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer gestures delivered by the host.
//!
//! The host translates raw mouse/touch input into these gestures and
//! resolves what was under the pointer. A drag is always delivered as
//! `DragStart`, any number of `Drag`, then `DragEnd`, on the same vertex.

use crate::model::{ShapeId, VertexId};
use kurbo::Point;

/// Modifier keys held when a gesture started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Detach the vertex from everything it is snapped to before dragging
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false };

    pub const CTRL: Modifiers = Modifiers { ctrl: true };
}

/// What was under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Empty canvas
    Canvas,
    /// The body of a shape
    Shape(ShapeId),
    /// A vertex marker (real or shadow)
    Vertex(VertexId),
}

/// A gesture tagged with its position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Primary button click
    Click { target: Target, position: Point },
    /// Secondary button click
    RightClick { target: Target, position: Point },
    DragStart {
        vertex: VertexId,
        position: Point,
        modifiers: Modifiers,
    },
    Drag { vertex: VertexId, position: Point },
    DragEnd { vertex: VertexId },
    /// The view's zoom level changed
    ZoomChanged { zoom: f64 },
}
