// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Planar geometry helpers.
//!
//! Positions are plain `kurbo::Point`s. Distances are Euclidean in the
//! position's own coordinate space, with no geodesic correction, which is
//! what snapping compares against the zoom-scaled threshold.

use crate::error::{EditError, EditResult};
use kurbo::Point;

/// A 2D coordinate (x/y, or latitude/longitude)
pub type Position = Point;

/// Raw position input accepted by structural operations
///
/// Either an already-built point or a coordinate list that must contain
/// exactly two finite numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionInput {
    Point(Point),
    Coords(Vec<f64>),
}

impl From<Point> for PositionInput {
    fn from(point: Point) -> Self {
        PositionInput::Point(point)
    }
}

impl From<(f64, f64)> for PositionInput {
    fn from((x, y): (f64, f64)) -> Self {
        PositionInput::Point(Point::new(x, y))
    }
}

impl From<[f64; 2]> for PositionInput {
    fn from([x, y]: [f64; 2]) -> Self {
        PositionInput::Point(Point::new(x, y))
    }
}

impl From<&[f64]> for PositionInput {
    fn from(coords: &[f64]) -> Self {
        PositionInput::Coords(coords.to_vec())
    }
}

impl From<Vec<f64>> for PositionInput {
    fn from(coords: Vec<f64>) -> Self {
        PositionInput::Coords(coords)
    }
}

/// Euclidean distance between two positions
pub fn distance(p1: Position, p2: Position) -> f64 {
    p1.distance(p2)
}

/// Arithmetic midpoint of two positions
pub fn midpoint(p1: Position, p2: Position) -> Position {
    p1.midpoint(p2)
}

/// Turn raw input into a canonical position
pub fn normalize(input: impl Into<PositionInput>) -> EditResult<Position> {
    let point = match input.into() {
        PositionInput::Point(point) => point,
        PositionInput::Coords(coords) => match coords.as_slice() {
            &[x, y] => Point::new(x, y),
            other => {
                return Err(EditError::invalid_position(format!(
                    "expected 2 coordinates, got {}",
                    other.len()
                )));
            }
        },
    };

    if !point.is_finite() {
        return Err(EditError::invalid_position(format!(
            "coordinates must be finite, got ({}, {})",
            point.x, point.y
        )));
    }
    Ok(point)
}
