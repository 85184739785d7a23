// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex drag lifecycle for Canvas - prepare, move, finish, remove
//!
//! Propagation to snapped vertices goes exactly one hop: a vertex passes
//! `propagate = false` to everything it is bound to, so two bound vertices
//! never recurse into each other. A vertex bound to a vertex that is itself
//! bound to a third does not drag the third along.

use super::Canvas;
use crate::error::EditResult;
use crate::model::{VertexId, VertexKind};
use crate::render::RenderSurface;
use kurbo::Point;

impl<S: RenderSurface> Canvas<S> {
    /// Get a vertex ready to be dragged
    ///
    /// A shadow is promoted to a real vertex, inserted between the two
    /// vertices it sat between. Bound vertices are prepared too when
    /// `propagate` is set. Snap candidates are recomputed last.
    pub fn prepare_move(
        &mut self,
        id: VertexId,
        position: Point,
        propagate: bool,
    ) -> EditResult<()> {
        let vertex = self.vertex_ref(id)?;
        if let VertexKind::Shadow { prev, .. } = vertex.kind {
            let shape = vertex.shape;
            // `prev` is always real; inserting right after it also covers
            // the closing edge, where the promoted vertex is appended.
            let index = self
                .vertex_ref(prev)?
                .index()
                .map_or(0, |index| index + 1);

            tracing::debug!("Promoting shadow {} to a vertex at {}", id, index);
            self.insert_point(shape, position, Some(index), Some(id))?;
        }

        if propagate {
            let bound = self.vertex_ref(id)?.snapped_to.clone();
            for &other in bound.iter() {
                self.prepare_move(other, position, false)?;
            }
        }

        self.update_snap_candidates(id)
    }

    /// Move a vertex during a drag
    ///
    /// Bound vertices follow when `propagate` is set. Soft snapping may then
    /// pull the vertex onto a nearby candidate, and the shadows on both of
    /// its edges are re-centred.
    pub fn move_vertex(&mut self, id: VertexId, position: Point, propagate: bool) -> EditResult<()> {
        if self.vertex_ref(id)?.is_shadow() {
            // Host skipped the drag start; promote now so the move has a
            // point to act on.
            self.prepare_move(id, position, propagate)?;
        }

        if propagate {
            let bound = self.vertex_ref(id)?.snapped_to.clone();
            for &other in bound.iter() {
                self.move_vertex(other, position, false)?;
            }
        }

        tracing::trace!("Moving vertex {} to {:?}", id, position);
        self.reposition(id, position)?;
        self.check_snapping(id, false)
    }

    /// End a drag: hard-snap this vertex (and bound ones) to close targets
    pub fn finish_move(&mut self, id: VertexId, propagate: bool) -> EditResult<()> {
        if propagate {
            let bound = self.vertex_ref(id)?.snapped_to.clone();
            for &other in bound.iter() {
                self.finish_move(other, false)?;
            }
        }

        self.check_snapping(id, true)
    }

    /// Remove a real vertex from its shape
    ///
    /// Shadows are regenerated by their shape and cannot be removed on their
    /// own; asking to remove one does nothing.
    pub fn remove_vertex(&mut self, id: VertexId) -> EditResult<()> {
        let vertex = self.vertex_ref(id)?;
        match vertex.kind {
            VertexKind::Real { index } => {
                let shape = vertex.shape;
                self.remove_point(shape, index)
            }
            VertexKind::Shadow { .. } => {
                tracing::debug!("Ignoring removal of shadow {}", id);
                Ok(())
            }
        }
    }

    // ===== INTERNAL =====

    /// Place a real vertex at `position` and update everything derived
    /// from it: marker, outline, and the shadows on both adjacent edges
    pub(crate) fn reposition(&mut self, id: VertexId, position: Point) -> EditResult<()> {
        let vertex = self.vertex_mut(id)?;
        vertex.position = position;
        let (shape, marker) = (vertex.shape, vertex.marker);
        let adjacent = [vertex.shadow_prev, vertex.shadow_next];

        self.surface.move_marker(marker, position);
        self.sync_outline(shape);

        for shadow in adjacent.into_iter().flatten() {
            self.recenter_shadow(shadow)?;
        }
        Ok(())
    }

    /// Move a shadow back to the midpoint of its edge
    fn recenter_shadow(&mut self, shadow: VertexId) -> EditResult<()> {
        let Some((prev, next)) = self.vertex_ref(shadow)?.neighbours() else {
            return Ok(());
        };
        let position = self.shadow_position(prev, next)?;

        let vertex = self.vertex_mut(shadow)?;
        vertex.position = position;
        let marker = vertex.marker;
        self.surface.move_marker(marker, position);
        Ok(())
    }
}
