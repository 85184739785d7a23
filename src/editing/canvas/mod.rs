// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas - owns every shape and vertex of one editing session
//!
//! The canvas is the single owner of all editing state. Shapes live in an
//! ordered list, vertices (real and shadow) live in one arena keyed by
//! `VertexId`, and every cross reference is a handle into those two
//! collections. Operations on a vertex or a shape are therefore canvas
//! methods taking the handle first; the impl blocks are split by concern:
//!
//! - `shape_ops`: point insertion/removal, index renumbering, shadows
//! - `vertex_ops`: the prepare/move/finish drag lifecycle
//! - `snapping`: candidate lists and the symmetric snap relation
//! - `gestures`: routing host gestures into the above

mod gestures;
mod shape_ops;
mod snapping;
mod vertex_ops;


use crate::config::EditorConfig;
use crate::error::{EditError, EditResult};
use crate::geometry::{self, PositionInput};
use crate::model::{Shape, ShapeId, ShapeState, Vertex, VertexId};
use crate::render::{MarkerStyle, RenderSurface};
use crate::theme;
use kurbo::Point;
use std::collections::HashMap;

/// Structural notifications for whatever UI lists the shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    ShapeAdded(ShapeId),
    ShapeRemoved(ShapeId),
}

/// The editing surface: shapes, selection and zoom-dependent snapping scale
#[derive(Debug)]
pub struct Canvas<S: RenderSurface> {
    surface: S,
    config: EditorConfig,
    shapes: Vec<Shape>,
    vertices: HashMap<VertexId, Vertex>,
    /// The shape being drawn or edited, if any
    selected: Option<ShapeId>,
    zoom: f64,
    /// `2^(zoom - base_zoom)`
    distance_scale: f64,
    events: Vec<CanvasEvent>,
}

impl<S: RenderSurface> Canvas<S> {
    /// Create an empty canvas drawing onto `surface`
    pub fn new(surface: S, config: EditorConfig) -> Self {
        let zoom = config.start_zoom();
        let mut canvas = Self {
            surface,
            config,
            shapes: Vec::new(),
            vertices: HashMap::new(),
            selected: None,
            zoom,
            distance_scale: 1.0,
            events: Vec::new(),
        };
        canvas.calculate_distance_scale();
        canvas
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// All shapes, in creation order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Ordered vertex positions of a shape
    pub fn shape_coords(&self, id: ShapeId) -> EditResult<Vec<Point>> {
        let shape = self.shape_ref(id)?;
        Ok(self.path_of(shape))
    }

    // ===== SHAPE COLLECTION =====

    /// Create a shape, seeded with `path` if given, and register it
    ///
    /// Every position is validated before anything is created.
    pub fn add_shape<I, P>(&mut self, path: I) -> EditResult<ShapeId>
    where
        I: IntoIterator<Item = P>,
        P: Into<PositionInput>,
    {
        let points = path
            .into_iter()
            .map(geometry::normalize)
            .collect::<EditResult<Vec<_>>>()?;

        let polygon = self
            .surface
            .place_polygon(&[], &ShapeState::Default.style());
        let shape = Shape::new(polygon);
        let id = shape.id;
        self.shapes.push(shape);

        for point in points {
            self.insert_point(id, point, None, None)?;
        }

        tracing::debug!("Added shape {} with {} points", id, self.shape_len(id));
        self.events.push(CanvasEvent::ShapeAdded(id));
        Ok(id)
    }

    /// Tear down a shape and deregister it
    ///
    /// Every vertex is unsnapped from everything first, so no vertex of
    /// another shape is left bound to a removed one.
    pub fn remove_shape(&mut self, id: ShapeId) -> EditResult<()> {
        self.shape_ref(id)?;

        while let Some(&first) = self.shape_ref(id)?.vertices.first() {
            self.detach_point(id, first)?;
        }
        self.discard_shadows(id);

        let Some(position) = self.shapes.iter().position(|shape| shape.id == id) else {
            return Err(EditError::shape_removed(id));
        };
        let shape = self.shapes.remove(position);
        self.surface.remove_polygon(shape.polygon);

        if self.selected == Some(id) {
            self.selected = None;
        }

        tracing::debug!("Removed shape {}", id);
        self.events.push(CanvasEvent::ShapeRemoved(id));
        Ok(())
    }

    /// Make `id` the selected shape and reset every other shape to default
    ///
    /// `None` deselects everything, which ends drawing mode.
    pub fn select_shape(&mut self, id: Option<ShapeId>) -> EditResult<()> {
        let Some(id) = id else {
            self.deselect_all();
            return Ok(());
        };
        self.shape_ref(id)?;
        self.apply_selection(Some(id));
        Ok(())
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Drawing mode is on while a shape is selected
    pub fn is_drawing(&self) -> bool {
        self.selected.is_some()
    }

    pub fn stop_drawing(&mut self) {
        self.deselect_all();
    }

    /// Apply a visual state without touching the selection
    pub fn set_shape_state(&mut self, id: ShapeId, state: ShapeState) -> EditResult<()> {
        self.shape_ref(id)?;
        self.apply_state(id, state);
        Ok(())
    }

    /// Remove every shape
    pub fn clear(&mut self) {
        while let Some(id) = self.shapes.first().map(|shape| shape.id) {
            if let Err(err) = self.remove_shape(id) {
                tracing::error!("Failed to remove shape {} while clearing: {}", id, err);
                break;
            }
        }
    }

    /// Drain queued shape added/removed notifications
    pub fn take_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== ZOOM =====

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Record a new zoom level and rescale snapping to match
    ///
    /// A non-finite zoom is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            tracing::warn!("Ignoring non-finite zoom {}", zoom);
            return;
        }
        self.zoom = zoom;
        self.calculate_distance_scale();
    }

    /// How much distances shrink relative to the base zoom
    pub fn distance_scale(&self) -> f64 {
        self.distance_scale
    }

    /// Convert a distance at the base zoom into the current zoom
    pub fn real_distance(&self, distance: f64) -> f64 {
        distance / self.distance_scale
    }

    /// Snap threshold effective at the current zoom
    pub fn snap_distance(&self) -> f64 {
        self.real_distance(self.config.snap_threshold)
    }

    fn calculate_distance_scale(&mut self) {
        self.distance_scale = 2f64.powf(self.zoom - self.config.base_zoom);
        tracing::debug!(
            "Zoom {} -> distance scale {}",
            self.zoom,
            self.distance_scale
        );
    }

    // ===== LOOKUP HELPERS =====

    pub(crate) fn shape_ref(&self, id: ShapeId) -> EditResult<&Shape> {
        self.shape(id).ok_or(EditError::shape_removed(id))
    }

    pub(crate) fn shape_mut(&mut self, id: ShapeId) -> EditResult<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|shape| shape.id == id)
            .ok_or(EditError::shape_removed(id))
    }

    pub(crate) fn vertex_ref(&self, id: VertexId) -> EditResult<&Vertex> {
        self.vertices.get(&id).ok_or(EditError::vertex_removed(id))
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> EditResult<&mut Vertex> {
        self.vertices
            .get_mut(&id)
            .ok_or(EditError::vertex_removed(id))
    }

    fn shape_len(&self, id: ShapeId) -> usize {
        self.shape(id).map_or(0, Shape::len)
    }

    fn path_of(&self, shape: &Shape) -> Vec<Point> {
        shape
            .vertices
            .iter()
            .filter_map(|id| self.vertices.get(id))
            .map(|vertex| vertex.position)
            .collect()
    }

    // ===== RENDERING HELPERS =====

    fn deselect_all(&mut self) {
        self.apply_selection(None);
    }

    /// Record the selection and restyle every shape to match
    fn apply_selection(&mut self, selected: Option<ShapeId>) {
        self.selected = selected;
        let ids: Vec<ShapeId> = self.shapes.iter().map(|shape| shape.id).collect();
        for id in ids {
            let state = if Some(id) == selected {
                ShapeState::Selected
            } else {
                ShapeState::Default
            };
            self.apply_state(id, state);
        }
    }

    /// Marker style for a vertex of a shape in `state`
    fn marker_style(&self, state: ShapeState, shadow: bool) -> MarkerStyle {
        MarkerStyle {
            opacity: if shadow {
                theme::marker::SHADOW_OPACITY
            } else {
                theme::marker::VERTEX_OPACITY
            },
            z_order: state.style().z_order,
            draggable: self.config.draggable,
        }
    }

    /// Push the shape's current path and style to its outline
    fn sync_outline(&mut self, id: ShapeId) {
        let Some(shape) = self.shape(id) else {
            return;
        };
        let path = self.path_of(shape);
        let polygon = shape.polygon;
        let style = shape.state.style();
        self.surface.update_polygon(polygon, &path, &style);
    }

    /// Set a shape's state and restyle its outline and markers
    fn apply_state(&mut self, id: ShapeId, state: ShapeState) {
        let Some(shape) = self.shapes.iter_mut().find(|shape| shape.id == id) else {
            return;
        };
        shape.state = state;
        let markers: Vec<VertexId> = shape
            .vertices
            .iter()
            .chain(shape.shadows.iter())
            .copied()
            .collect();

        for vertex_id in markers {
            let Some((marker, shadow)) = self
                .vertices
                .get(&vertex_id)
                .map(|vertex| (vertex.marker, vertex.is_shadow()))
            else {
                continue;
            };
            let style = self.marker_style(state, shadow);
            self.surface.restyle_marker(marker, style);
        }
        self.sync_outline(id);
    }
}
