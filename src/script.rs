// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Gesture scripts: replay recorded input against a canvas
//!
//! A script is a TOML file with an optional `[config]` table, optional
//! `[[shape]]` entries that are loaded before replay, and a list of
//! `[[gesture]]` entries:
//!
//! ```toml
//! [config]
//! snap_threshold = 0.5
//!
//! [[shape]]
//! path = [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]
//!
//! [[gesture]]
//! kind = "drag_start"
//! target = { shape = 0, shadow = 1 }
//! at = [5.0, 10.0]
//!
//! [[gesture]]
//! kind = "drag"
//! at = [5.0, 14.0]
//!
//! [[gesture]]
//! kind = "drag_end"
//! ```
//!
//! Targets are looked up by position (shape order, vertex or shadow index)
//! at the moment the gesture is replayed. A drag keeps the vertex resolved
//! at `drag_start` until `drag_end`, so it survives the renumbering a
//! shadow promotion causes.

use crate::config::EditorConfig;
use crate::editing::{Canvas, Gesture, Modifiers, Target};
use crate::model::{ShapeId, ShapeState, VertexId};
use crate::render::RenderSurface;
use anyhow::{Context, Result, bail};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed gesture script
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub config: EditorConfig,
    #[serde(default, rename = "shape")]
    pub shapes: Vec<ShapeSpec>,
    #[serde(default, rename = "gesture")]
    pub gestures: Vec<Step>,
}

/// A shape loaded before replay
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeSpec {
    pub path: Vec<[f64; 2]>,
}

/// One scripted gesture
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub kind: StepKind,
    #[serde(default)]
    pub at: Option<[f64; 2]>,
    #[serde(default)]
    pub target: Option<TargetSpec>,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub zoom: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Click,
    RightClick,
    DragStart,
    Drag,
    DragEnd,
    Zoom,
}

/// What a scripted gesture points at
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetSpec {
    /// `target = "canvas"`
    Keyword(CanvasKeyword),
    /// `target = { shape = i }`, optionally with `vertex = j` or `shadow = j`
    Element {
        shape: usize,
        #[serde(default)]
        vertex: Option<usize>,
        #[serde(default)]
        shadow: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasKeyword {
    Canvas,
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let script: Script = toml::from_str(source).context("Failed to parse gesture script")?;
        script.config.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Build a canvas on `surface`, load the shapes and replay every gesture
    pub fn run<S: RenderSurface>(&self, surface: S) -> Result<Canvas<S>> {
        let mut canvas = Canvas::new(surface, self.config.clone());

        for (i, shape) in self.shapes.iter().enumerate() {
            canvas
                .add_shape(shape.path.iter().copied())
                .with_context(|| format!("Failed to load shape {}", i))?;
        }
        if !self.shapes.is_empty() {
            canvas.init_snapping()?;
        }

        let mut replay = Replay::default();
        for (i, step) in self.gestures.iter().enumerate() {
            replay
                .apply(&mut canvas, step)
                .with_context(|| format!("Gesture {} ({:?}) failed", i, step.kind))?;
        }

        for event in canvas.take_events() {
            tracing::debug!("Canvas event: {:?}", event);
        }
        Ok(canvas)
    }
}

/// Replay state carried between steps
#[derive(Debug, Default)]
struct Replay {
    dragging: Option<VertexId>,
}

impl Replay {
    fn apply<S: RenderSurface>(&mut self, canvas: &mut Canvas<S>, step: &Step) -> Result<()> {
        let gesture = match step.kind {
            StepKind::Click => Gesture::Click {
                target: resolve(canvas, step.target.as_ref())?,
                position: required_point(step)?,
            },
            StepKind::RightClick => {
                let target = resolve(canvas, step.target.as_ref())?;
                Gesture::RightClick {
                    target,
                    position: point_or_anchor(canvas, step, target)?,
                }
            }
            StepKind::DragStart => {
                if let Some(vertex) = self.dragging {
                    bail!("drag_start while vertex {} is still being dragged", vertex);
                }
                let target = resolve(canvas, step.target.as_ref())?;
                let Target::Vertex(vertex) = target else {
                    bail!("drag_start needs a vertex or shadow target");
                };
                self.dragging = Some(vertex);
                Gesture::DragStart {
                    vertex,
                    position: point_or_anchor(canvas, step, target)?,
                    modifiers: if step.ctrl {
                        Modifiers::CTRL
                    } else {
                        Modifiers::NONE
                    },
                }
            }
            StepKind::Drag => Gesture::Drag {
                vertex: self.dragged()?,
                position: required_point(step)?,
            },
            StepKind::DragEnd => {
                let vertex = self.dragged()?;
                self.dragging = None;
                Gesture::DragEnd { vertex }
            }
            StepKind::Zoom => {
                let Some(zoom) = step.zoom.filter(|zoom| zoom.is_finite()) else {
                    bail!("zoom needs a finite `zoom` value");
                };
                Gesture::ZoomChanged { zoom }
            }
        };

        tracing::debug!("Replaying {:?}", gesture);
        canvas.handle_gesture(gesture)?;
        Ok(())
    }

    fn dragged(&self) -> Result<VertexId> {
        self.dragging
            .context("drag gesture without a preceding drag_start")
    }
}

fn resolve<S: RenderSurface>(canvas: &Canvas<S>, target: Option<&TargetSpec>) -> Result<Target> {
    let Some(TargetSpec::Element {
        shape,
        vertex,
        shadow,
    }) = target
    else {
        return Ok(Target::Canvas);
    };

    let Some(found) = canvas.shapes().get(*shape) else {
        bail!("no shape at position {}", shape);
    };

    match (vertex, shadow) {
        (None, None) => Ok(Target::Shape(found.id())),
        (Some(index), None) => found
            .vertices()
            .get(*index)
            .map(|&id| Target::Vertex(id))
            .with_context(|| format!("shape {} has no vertex {}", shape, index)),
        (None, Some(index)) => found
            .shadows()
            .get(*index)
            .map(|&id| Target::Vertex(id))
            .with_context(|| format!("shape {} has no shadow {}", shape, index)),
        (Some(_), Some(_)) => bail!("a target names either a vertex or a shadow, not both"),
    }
}

fn required_point(step: &Step) -> Result<Point> {
    step.at
        .map(|[x, y]| Point::new(x, y))
        .with_context(|| format!("{:?} needs an `at` position", step.kind))
}

/// The step's `at`, falling back to the targeted vertex's position
fn point_or_anchor<S: RenderSurface>(
    canvas: &Canvas<S>,
    step: &Step,
    target: Target,
) -> Result<Point> {
    if let Some([x, y]) = step.at {
        return Ok(Point::new(x, y));
    }
    match target {
        Target::Vertex(id) => canvas
            .vertex(id)
            .map(|vertex| vertex.position())
            .context("target vertex no longer exists"),
        Target::Canvas | Target::Shape(_) => Ok(Point::ZERO),
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Serializable snapshot of a canvas after replay
#[derive(Debug, Clone, Serialize)]
pub struct CanvasSummary {
    pub zoom: f64,
    pub distance_scale: f64,
    /// Position of the selected shape in `shapes`
    pub selected: Option<usize>,
    pub shapes: Vec<ShapeSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapeSummary {
    pub id: ShapeId,
    pub state: ShapeState,
    pub coords: Vec<[f64; 2]>,
    pub shadows: usize,
    /// Snap links of each vertex that has any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snaps: Vec<SnapSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapSummary {
    pub vertex: usize,
    pub snapped_to: Vec<VertexRef>,
}

/// A vertex addressed by shape position and vertex index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexRef {
    pub shape: usize,
    pub vertex: usize,
}

impl CanvasSummary {
    pub fn capture<S: RenderSurface>(canvas: &Canvas<S>) -> Self {
        let locate = |id: VertexId| -> Option<VertexRef> {
            let vertex = canvas.vertex(id)?;
            let shape = canvas
                .shapes()
                .iter()
                .position(|shape| shape.id() == vertex.shape())?;
            Some(VertexRef {
                shape,
                vertex: vertex.index()?,
            })
        };

        let shapes = canvas
            .shapes()
            .iter()
            .map(|shape| {
                let snaps = shape
                    .vertices()
                    .iter()
                    .enumerate()
                    .filter_map(|(index, &id)| {
                        let vertex = canvas.vertex(id)?;
                        let snapped_to: Vec<VertexRef> =
                            vertex.snapped_to().iter().filter_map(|&o| locate(o)).collect();
                        (!snapped_to.is_empty()).then_some(SnapSummary {
                            vertex: index,
                            snapped_to,
                        })
                    })
                    .collect();

                ShapeSummary {
                    id: shape.id(),
                    state: shape.state(),
                    coords: canvas
                        .shape_coords(shape.id())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|point| [point.x, point.y])
                        .collect(),
                    shadows: shape.shadows().len(),
                    snaps,
                }
            })
            .collect();

        Self {
            zoom: canvas.zoom(),
            distance_scale: canvas.distance_scale(),
            selected: canvas
                .selected_shape()
                .and_then(|id| canvas.shapes().iter().position(|shape| shape.id() == id)),
            shapes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn run(source: &str) -> Canvas<RecordingSurface> {
        Script::from_toml_str(source)
            .unwrap()
            .run(RecordingSurface::new())
            .unwrap()
    }

    #[test]
    fn empty_script_runs() {
        let canvas = run("");
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn clicks_draw_a_triangle() {
        let canvas = run(r#"
            [[gesture]]
            kind = "click"
            at = [0.0, 0.0]

            [[gesture]]
            kind = "click"
            target = "canvas"
            at = [0.0, 10.0]

            [[gesture]]
            kind = "click"
            at = [10.0, 10.0]

            [[gesture]]
            kind = "right_click"
        "#);

        assert_eq!(canvas.shapes().len(), 1);
        assert!(!canvas.is_drawing());
        let summary = CanvasSummary::capture(&canvas);
        assert_eq!(
            summary.shapes[0].coords,
            vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]
        );
        assert_eq!(summary.shapes[0].shadows, 3);
    }

    #[test]
    fn dragging_a_shadow_keeps_the_same_vertex() {
        let canvas = run(r#"
            [[shape]]
            path = [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]

            [[gesture]]
            kind = "drag_start"
            target = { shape = 0, shadow = 0 }

            [[gesture]]
            kind = "drag"
            at = [-2.0, 5.0]

            [[gesture]]
            kind = "drag"
            at = [-4.0, 5.0]

            [[gesture]]
            kind = "drag_end"
        "#);

        let coords = canvas.shape_coords(canvas.shapes()[0].id()).unwrap();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[1], Point::new(-4.0, 5.0));
    }

    #[test]
    fn loaded_shapes_are_snapped_and_summarized() {
        let canvas = run(r#"
            [[shape]]
            path = [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]

            [[shape]]
            path = [[10.0, 10.0], [20.0, 10.0], [20.0, 0.0]]
        "#);

        let summary = CanvasSummary::capture(&canvas);
        assert_eq!(summary.shapes[0].snaps.len(), 1);
        assert_eq!(summary.shapes[0].snaps[0].vertex, 2);
        assert_eq!(
            summary.shapes[0].snaps[0].snapped_to,
            vec![VertexRef {
                shape: 1,
                vertex: 0
            }]
        );

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["shapes"][1]["state"], "default");
        assert_eq!(json["shapes"][1]["snaps"][0]["snapped_to"][0]["shape"], 0);
    }

    #[test]
    fn zoom_steps_rescale_snapping() {
        let canvas = run(r#"
            [config]
            base_zoom = 10.0

            [[gesture]]
            kind = "zoom"
            zoom = 12.0
        "#);
        assert_eq!(canvas.zoom(), 12.0);
        assert!((canvas.distance_scale() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn drag_without_start_is_an_error() {
        let script = Script::from_toml_str(
            r#"
            [[gesture]]
            kind = "drag"
            at = [1.0, 1.0]
        "#,
        )
        .unwrap();
        let err = script.run(RecordingSurface::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("drag_start"));
    }

    #[test]
    fn missing_targets_are_reported() {
        let script = Script::from_toml_str(
            r#"
            [[gesture]]
            kind = "click"
            target = { shape = 3 }
            at = [1.0, 1.0]
        "#,
        )
        .unwrap();
        let err = script.run(RecordingSurface::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("no shape at position 3"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Script::from_toml_str("[[gesture]]\nkind = \"click\"\nwhere = 1\n").is_err());
        assert!(Script::from_toml_str("[[gesture]]\nkind = \"hover\"\n").is_err());
    }
}
