// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Structural shape editing for Canvas - point insertion and removal,
//! index renumbering, and shadow regeneration

use super::Canvas;
use crate::error::{EditError, EditResult};
use crate::geometry::{self, PositionInput};
use crate::model::{ShapeId, Vertex, VertexId, VertexKind};
use crate::render::RenderSurface;
use kurbo::Point;

impl<S: RenderSurface> Canvas<S> {
    /// Insert a point into a shape
    ///
    /// `index` defaults to appending. When `vertex` is given, that existing
    /// vertex of the same shape (typically a shadow being promoted) becomes
    /// the new point instead of a freshly created one.
    pub fn add_point(
        &mut self,
        shape: ShapeId,
        position: impl Into<PositionInput>,
        index: Option<usize>,
        vertex: Option<VertexId>,
    ) -> EditResult<VertexId> {
        let position = geometry::normalize(position)?;
        self.insert_point(shape, position, index, vertex)
    }

    /// Remove the point at `index`
    ///
    /// Removing the last point removes the shape itself from the canvas.
    pub fn remove_point(&mut self, shape: ShapeId, index: usize) -> EditResult<()> {
        let target = self.vertex_at(shape, index)?;
        self.detach_point(shape, target)?;

        if self.shape_ref(shape)?.is_empty() {
            return self.remove_shape(shape);
        }

        self.update_indexes(shape)?;
        self.normalize_shadows(shape)?;
        self.sync_outline(shape);
        Ok(())
    }

    /// Reposition the point at `index` directly, without drag semantics
    pub fn set_point(
        &mut self,
        shape: ShapeId,
        index: usize,
        position: impl Into<PositionInput>,
    ) -> EditResult<()> {
        let position = geometry::normalize(position)?;
        let target = self.vertex_at(shape, index)?;
        self.reposition(target, position)
    }

    /// Reassign every real vertex's index to its place in the sequence
    pub fn update_indexes(&mut self, shape: ShapeId) -> EditResult<()> {
        let ids = self.shape_ref(shape)?.vertices.clone();
        for (index, id) in ids.into_iter().enumerate() {
            self.vertex_mut(id)?.kind = VertexKind::Real { index };
        }
        Ok(())
    }

    /// Rebuild the shadow vertices from the current sequence
    ///
    /// Shadows that were promoted to real vertices are kept; the rest are
    /// discarded. A shape with fewer than three vertices gets no shadows.
    pub fn normalize_shadows(&mut self, shape: ShapeId) -> EditResult<()> {
        self.discard_shadows(shape);

        let (vertices, state) = {
            let shape = self.shape_ref(shape)?;
            (shape.vertices.clone(), shape.state)
        };
        let len = vertices.len();
        if len <= 2 {
            return Ok(());
        }

        let style = self.marker_style(state, true);
        let mut shadows = Vec::with_capacity(len);
        for (i, &prev) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % len];
            let position = self.shadow_position(prev, next)?;
            let marker = self.surface.place_marker(position, style);
            let shadow = Vertex::shadow(shape, position, prev, next, marker);
            let id = shadow.id;
            self.vertices.insert(id, shadow);

            self.vertex_mut(prev)?.shadow_next = Some(id);
            self.vertex_mut(next)?.shadow_prev = Some(id);
            shadows.push(id);
        }

        self.shape_mut(shape)?.shadows = shadows;
        Ok(())
    }

    // ===== INTERNAL =====

    /// Insert an already-normalized position
    pub(crate) fn insert_point(
        &mut self,
        shape: ShapeId,
        position: Point,
        index: Option<usize>,
        existing: Option<VertexId>,
    ) -> EditResult<VertexId> {
        let (len, state) = {
            let target = self.shape_ref(shape)?;
            (target.len(), target.state)
        };
        let index = index.unwrap_or(len);
        if index > len {
            return Err(EditError::IndexOutOfRange { index, len });
        }

        let id = match existing {
            Some(id) => {
                let vertex = self.vertex_ref(id)?;
                if vertex.shape != shape || !vertex.is_shadow() {
                    return Err(EditError::ForeignVertex { vertex: id, shape });
                }

                let style = self.marker_style(state, false);
                let vertex = self.vertex_mut(id)?;
                vertex.position = position;
                vertex.kind = VertexKind::Real { index };
                let marker = vertex.marker;
                self.surface.move_marker(marker, position);
                self.surface.restyle_marker(marker, style);
                id
            }
            None => {
                let style = self.marker_style(state, false);
                let marker = self.surface.place_marker(position, style);
                let vertex = Vertex::real(shape, position, marker);
                let id = vertex.id;
                self.vertices.insert(id, vertex);
                id
            }
        };

        self.shape_mut(shape)?.vertices.insert(index, id);
        self.update_indexes(shape)?;
        self.normalize_shadows(shape)?;
        self.sync_outline(shape);

        tracing::debug!("Inserted vertex {} into shape {} at {}", id, shape, index);
        Ok(id)
    }

    /// Unsnap a real vertex, drop its marker and take it out of the shape
    ///
    /// Leaves shadows and indexes stale; callers restore them.
    pub(super) fn detach_point(&mut self, shape: ShapeId, id: VertexId) -> EditResult<()> {
        self.unsnap_all(id)?;

        let vertex = self
            .vertices
            .remove(&id)
            .ok_or(EditError::vertex_removed(id))?;
        self.surface.remove_marker(vertex.marker);
        self.shape_mut(shape)?.vertices.retain(|&v| v != id);

        tracing::debug!("Removed vertex {} from shape {}", id, shape);
        Ok(())
    }

    /// Drop every shadow still in shadow form and clear the links to them
    pub(super) fn discard_shadows(&mut self, shape: ShapeId) {
        let Ok(target) = self.shape_mut(shape) else {
            return;
        };
        let shadows = std::mem::take(&mut target.shadows);
        let vertices = target.vertices.clone();

        for id in shadows {
            let still_shadow = self.vertices.get(&id).is_some_and(Vertex::is_shadow);
            if !still_shadow {
                continue;
            }
            if let Some(shadow) = self.vertices.remove(&id) {
                self.surface.remove_marker(shadow.marker);
            }
        }

        for id in vertices {
            if let Some(vertex) = self.vertices.get_mut(&id) {
                vertex.shadow_prev = None;
                vertex.shadow_next = None;
            }
        }
    }

    /// Real vertex at `index`, validating the range
    pub(super) fn vertex_at(&self, shape: ShapeId, index: usize) -> EditResult<VertexId> {
        let target = self.shape_ref(shape)?;
        target
            .vertices
            .get(index)
            .copied()
            .ok_or(EditError::IndexOutOfRange {
                index,
                len: target.len(),
            })
    }

    /// Midpoint of the edge `prev -> next`
    pub(super) fn shadow_position(&self, prev: VertexId, next: VertexId) -> EditResult<Point> {
        Ok(geometry::midpoint(
            self.vertex_ref(prev)?.position,
            self.vertex_ref(next)?.position,
        ))
    }
}
