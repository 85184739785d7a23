// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Gesture routing for Canvas

use super::Canvas;
use crate::editing::gesture::{Gesture, Target};
use crate::error::EditResult;
use crate::render::RenderSurface;
use kurbo::Point;

impl<S: RenderSurface> Canvas<S> {
    /// Apply one host gesture
    ///
    /// - click on empty canvas: start a new shape if not drawing, then add a
    ///   point to the selected shape
    /// - click on a shape or a vertex: select that shape
    /// - right click on a real vertex: remove it
    /// - right click elsewhere: stop drawing
    /// - drag on a vertex: prepare / move / finish (Ctrl at drag start
    ///   unsnaps the vertex first)
    /// - zoom change: rescale snapping
    pub fn handle_gesture(&mut self, gesture: Gesture) -> EditResult<()> {
        match gesture {
            Gesture::Click { target, position } => self.click(target, position),
            Gesture::RightClick { target, .. } => self.right_click(target),
            Gesture::DragStart {
                vertex,
                position,
                modifiers,
            } => {
                if !self.drag_allowed() {
                    return Ok(());
                }
                if modifiers.ctrl {
                    self.unsnap_all(vertex)?;
                }
                self.prepare_move(vertex, position, true)
            }
            Gesture::Drag { vertex, position } => {
                if !self.drag_allowed() {
                    return Ok(());
                }
                self.move_vertex(vertex, position, true)
            }
            Gesture::DragEnd { vertex } => {
                if !self.drag_allowed() {
                    return Ok(());
                }
                self.finish_move(vertex, true)
            }
            Gesture::ZoomChanged { zoom } => {
                self.set_zoom(zoom);
                Ok(())
            }
        }
    }

    fn click(&mut self, target: Target, position: Point) -> EditResult<()> {
        match target {
            Target::Canvas => {
                let shape = match self.selected_shape() {
                    Some(shape) => shape,
                    None => {
                        let shape = self.add_shape(std::iter::empty::<Point>())?;
                        self.select_shape(Some(shape))?;
                        shape
                    }
                };
                self.add_point(shape, position, None, None)?;
                Ok(())
            }
            Target::Shape(shape) => self.select_shape(Some(shape)),
            Target::Vertex(vertex) => {
                let shape = self.vertex_ref(vertex)?.shape;
                self.select_shape(Some(shape))
            }
        }
    }

    fn right_click(&mut self, target: Target) -> EditResult<()> {
        match target {
            Target::Vertex(vertex) => self.remove_vertex(vertex),
            Target::Canvas | Target::Shape(_) => {
                self.stop_drawing();
                Ok(())
            }
        }
    }

    fn drag_allowed(&self) -> bool {
        if !self.config().draggable {
            tracing::warn!("Ignoring drag: vertices are not draggable");
            return false;
        }
        true
    }
}
