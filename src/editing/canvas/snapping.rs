// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Cross-shape vertex snapping for Canvas
//!
//! A soft snap only aligns positions while dragging. A hard snap also binds
//! the two vertices, recording each in the other's `snapped_to` set in the
//! same call, so the relation stays symmetric. Vertices are never bound
//! within one shape: candidates only ever come from other shapes.

use super::Canvas;
use crate::error::EditResult;
use crate::geometry;
use crate::model::{ShapeId, VertexId};
use crate::render::RenderSurface;

impl<S: RenderSurface> Canvas<S> {
    /// Recompute which vertices `id` may snap to
    ///
    /// Every real vertex of every other shape qualifies, except those of
    /// shapes `id` is already bound to.
    pub fn update_snap_candidates(&mut self, id: VertexId) -> EditResult<()> {
        let mut skipped = vec![self.vertex_ref(id)?.shape];
        skipped.extend(self.bound_shapes(id)?);

        let candidates: Vec<VertexId> = self
            .shapes
            .iter()
            .filter(|shape| !skipped.contains(&shape.id))
            .flat_map(|shape| shape.vertices.iter().copied())
            .collect();

        self.vertex_mut(id)?.snap_candidates = candidates;
        Ok(())
    }

    /// Snap `id` onto the nearest candidate closer than the current snap
    /// distance
    ///
    /// With `hard` set the pair is also bound. A vertex binds to at most one
    /// vertex per shape: candidates from a shape `id` is already bound to,
    /// or already bound to `id`'s shape themselves, are skipped, as are
    /// candidates removed since the list was built.
    pub fn check_snapping(&mut self, id: VertexId, hard: bool) -> EditResult<()> {
        let vertex = self.vertex_ref(id)?;
        let position = vertex.position;
        let bound_shapes = self.bound_shapes(id)?;
        let threshold = self.snap_distance();

        let nearest = vertex
            .snap_candidates
            .iter()
            .filter_map(|target| self.vertices.get(target))
            .filter(|target| {
                !target.is_shadow()
                    && target.shape != vertex.shape
                    && !bound_shapes.contains(&target.shape)
                    && !target
                        .snapped_to
                        .iter()
                        .filter_map(|other| self.vertices.get(other))
                        .any(|other| other.shape == vertex.shape)
            })
            .map(|target| (target.id, geometry::distance(position, target.position)))
            .filter(|&(_, distance)| distance < threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((target, distance)) = nearest {
            tracing::trace!("Vertex {} is {} from {}", id, distance, target);
            self.snap_to(id, target, hard)?;
        }
        Ok(())
    }

    /// Remove the binding between `id` and `target`
    ///
    /// The other side is unbound as well when `propagate` is set.
    pub fn unsnap(&mut self, id: VertexId, target: VertexId, propagate: bool) -> EditResult<()> {
        if self.vertex_mut(id)?.snapped_to.remove(&target) {
            tracing::debug!("Unsnapped vertex {} from {}", id, target);
        }
        self.update_snap_candidates(id)?;

        if propagate && self.vertices.contains_key(&target) {
            self.unsnap(target, id, false)?;
        }
        Ok(())
    }

    /// Remove every binding of `id`
    pub fn unsnap_all(&mut self, id: VertexId) -> EditResult<()> {
        while let Some(target) = self.vertex_ref(id)?.snapped_to.first() {
            self.unsnap(id, target, true)?;
        }
        Ok(())
    }

    /// Bind vertices that already coincide, e.g. after loading shapes
    ///
    /// Each real vertex gets fresh candidates and a hard snap check.
    pub fn init_snapping(&mut self) -> EditResult<()> {
        let ids: Vec<VertexId> = self
            .shapes
            .iter()
            .flat_map(|shape| shape.vertices.iter().copied())
            .collect();

        for id in ids {
            self.update_snap_candidates(id)?;
            self.check_snapping(id, true)?;
        }
        Ok(())
    }

    /// Shapes of every vertex `id` is bound to
    fn bound_shapes(&self, id: VertexId) -> EditResult<Vec<ShapeId>> {
        Ok(self
            .vertex_ref(id)?
            .snapped_to
            .iter()
            .filter_map(|other| self.vertices.get(other))
            .map(|other| other.shape)
            .collect())
    }

    /// Move `id` onto `target`, binding both sides when `hard`
    ///
    /// Binding refreshes both candidate lists so neither side keeps the
    /// other's shape as a candidate.
    pub(crate) fn snap_to(&mut self, id: VertexId, target: VertexId, hard: bool) -> EditResult<()> {
        let target_position = self.vertex_ref(target)?.position;
        let vertex = self.vertex_ref(id)?;
        if vertex.is_shadow() || vertex.shape == self.vertex_ref(target)?.shape {
            return Ok(());
        }

        self.reposition(id, target_position)?;

        if hard {
            self.vertex_mut(id)?.snapped_to.insert(target);
            self.vertex_mut(target)?.snapped_to.insert(id);
            self.update_snap_candidates(id)?;
            self.update_snap_candidates(target)?;
            tracing::debug!("Snapped vertex {} to {}", id, target);
        }
        Ok(())
    }
}
