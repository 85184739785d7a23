// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Boundary to the drawing surface.
//!
//! The canvas never draws anything itself. It places, moves, restyles and
//! removes markers (one per vertex, real or shadow) and polygon outlines
//! through a `RenderSurface` injected at construction. The surface hands
//! back opaque handles that the model stores next to the geometry.
//!
//! `RecordingSurface` keeps the live scene in memory. Hosts without a real
//! renderer (the demo binary, tests) use it to observe what would be drawn.

use kurbo::Point;
use peniko::Color;
use std::collections::HashMap;

/// Handle to a marker placed on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Handle to a polygon outline placed on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolygonHandle(pub u64);

/// How a vertex marker is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub opacity: f32,
    pub z_order: i32,
    pub draggable: bool,
}

/// How a polygon outline is drawn
#[derive(Debug, Clone, Copy)]
pub struct PolygonStyle {
    pub fill: Color,
    pub stroke_weight: f64,
    pub z_order: i32,
}

/// Drawing capabilities the canvas consumes
pub trait RenderSurface {
    /// Place a new marker and return its handle
    fn place_marker(&mut self, position: Point, style: MarkerStyle) -> MarkerHandle;

    fn move_marker(&mut self, marker: MarkerHandle, position: Point);

    fn restyle_marker(&mut self, marker: MarkerHandle, style: MarkerStyle);

    fn remove_marker(&mut self, marker: MarkerHandle);

    /// Place a new closed polygon outline and return its handle
    fn place_polygon(&mut self, path: &[Point], style: &PolygonStyle) -> PolygonHandle;

    /// Replace the outline's path and style
    fn update_polygon(&mut self, polygon: PolygonHandle, path: &[Point], style: &PolygonStyle);

    fn remove_polygon(&mut self, polygon: PolygonHandle);
}

/// A marker as last drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedMarker {
    pub position: Point,
    pub style: MarkerStyle,
}

/// A polygon outline as last drawn
#[derive(Debug, Clone)]
pub struct RecordedPolygon {
    pub path: Vec<Point>,
    pub style: PolygonStyle,
}

/// In-memory surface that tracks every live marker and outline
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_handle: u64,
    markers: HashMap<MarkerHandle, RecordedMarker>,
    polygons: HashMap<PolygonHandle, RecordedPolygon>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&RecordedMarker> {
        self.markers.get(&handle)
    }

    pub fn polygon(&self, handle: PolygonHandle) -> Option<&RecordedPolygon> {
        self.polygons.get(&handle)
    }

    /// Number of markers currently on the surface
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Number of outlines currently on the surface
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    fn allocate(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl RenderSurface for RecordingSurface {
    fn place_marker(&mut self, position: Point, style: MarkerStyle) -> MarkerHandle {
        let handle = MarkerHandle(self.allocate());
        tracing::trace!("[surface] place marker {:?} at {:?}", handle, position);
        self.markers.insert(handle, RecordedMarker { position, style });
        handle
    }

    fn move_marker(&mut self, marker: MarkerHandle, position: Point) {
        tracing::trace!("[surface] move marker {:?} to {:?}", marker, position);
        match self.markers.get_mut(&marker) {
            Some(recorded) => recorded.position = position,
            None => tracing::warn!("[surface] move of unknown marker {:?}", marker),
        }
    }

    fn restyle_marker(&mut self, marker: MarkerHandle, style: MarkerStyle) {
        match self.markers.get_mut(&marker) {
            Some(recorded) => recorded.style = style,
            None => tracing::warn!("[surface] restyle of unknown marker {:?}", marker),
        }
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        tracing::trace!("[surface] remove marker {:?}", marker);
        if self.markers.remove(&marker).is_none() {
            tracing::warn!("[surface] removal of unknown marker {:?}", marker);
        }
    }

    fn place_polygon(&mut self, path: &[Point], style: &PolygonStyle) -> PolygonHandle {
        let handle = PolygonHandle(self.allocate());
        tracing::trace!("[surface] place polygon {:?} with {} points", handle, path.len());
        self.polygons.insert(
            handle,
            RecordedPolygon {
                path: path.to_vec(),
                style: *style,
            },
        );
        handle
    }

    fn update_polygon(&mut self, polygon: PolygonHandle, path: &[Point], style: &PolygonStyle) {
        tracing::trace!("[surface] update polygon {:?} with {} points", polygon, path.len());
        match self.polygons.get_mut(&polygon) {
            Some(recorded) => {
                recorded.path = path.to_vec();
                recorded.style = *style;
            }
            None => tracing::warn!("[surface] update of unknown polygon {:?}", polygon),
        }
    }

    fn remove_polygon(&mut self, polygon: PolygonHandle) {
        tracing::trace!("[surface] remove polygon {:?}", polygon);
        if self.polygons.remove(&polygon).is_none() {
            tracing::warn!("[surface] removal of unknown polygon {:?}", polygon);
        }
    }
}
