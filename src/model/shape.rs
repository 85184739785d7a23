// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape data: a closed polygon made of an ordered vertex sequence.

use super::{ShapeId, VertexId};
use crate::render::{PolygonHandle, PolygonStyle};
use crate::theme;
use serde::{Deserialize, Serialize};

/// Visual state of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeState {
    #[default]
    Default,
    /// The shape currently being drawn or edited
    Selected,
    Error,
}

impl ShapeState {
    /// Outline style for this state
    pub fn style(self) -> PolygonStyle {
        let (fill, z_order) = match self {
            ShapeState::Default => (theme::shape::FILL_DEFAULT, theme::z_order::BASE),
            ShapeState::Selected => (theme::shape::FILL_SELECTED, theme::z_order::SELECTED),
            ShapeState::Error => (theme::shape::FILL_ERROR, theme::z_order::BASE),
        };
        PolygonStyle {
            fill,
            stroke_weight: theme::shape::STROKE_WEIGHT,
            z_order,
        }
    }
}

/// A closed polygon; the last vertex connects back to the first
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Real vertices in path order
    pub(crate) vertices: Vec<VertexId>,
    /// One shadow per edge when there are more than two vertices
    pub(crate) shadows: Vec<VertexId>,
    pub(crate) state: ShapeState,
    pub(crate) polygon: PolygonHandle,
}

impl Shape {
    pub(crate) fn new(polygon: PolygonHandle) -> Self {
        Self {
            id: ShapeId::next(),
            vertices: Vec::new(),
            shadows: Vec::new(),
            state: ShapeState::Default,
            polygon,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn shadows(&self) -> &[VertexId] {
        &self.shadows
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn state(&self) -> ShapeState {
        self.state
    }

    pub fn z_order(&self) -> i32 {
        self.state.style().z_order
    }

    pub fn polygon(&self) -> PolygonHandle {
        self.polygon
    }
}
