// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Polysnap: polygon editing with shadow vertices and cross-shape snapping
//!
//! A [`Canvas`] owns closed polygons made of draggable vertices. Every edge
//! carries a shadow vertex at its midpoint that turns into a real vertex
//! when dragged, and vertices of different shapes can be snapped together
//! so that they move as one. Drawing is delegated to a [`RenderSurface`].

pub mod config;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod model;
pub mod render;
pub mod script;
pub mod settings;
pub mod theme;

pub use config::EditorConfig;
pub use editing::{Canvas, CanvasEvent, Gesture, Modifiers, Target};
pub use error::{EditError, EditResult, Entity};
pub use geometry::{Position, PositionInput};
pub use model::{Shape, ShapeId, ShapeState, Vertex, VertexId, VertexKind};
pub use render::{RecordingSurface, RenderSurface};
pub use script::{CanvasSummary, Script};

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Install the global tracing subscriber
///
/// `RUST_LOG` is honoured; crate logging defaults to info. Output goes to
/// stderr so it never mixes with the summary on stdout.
pub fn init_tracing() -> Result<()> {
    let directive = settings::logging::DEFAULT_DIRECTIVE.parse()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Command-line options: `polysnap [--config editor.toml] [script.toml]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Editor options that replace the script's `[config]` table
    pub config: Option<PathBuf>,
    pub script: Option<PathBuf>,
}

impl CliArgs {
    /// Parse arguments, not including the program name
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--config" {
                let Some(path) = args.next() else {
                    bail!("--config needs a path");
                };
                parsed.config = Some(PathBuf::from(path));
            } else if arg.starts_with("--") {
                bail!("unknown option {arg}");
            } else if parsed.script.is_none() {
                parsed.script = Some(PathBuf::from(arg));
            } else {
                bail!("unexpected argument {arg}");
            }
        }
        Ok(parsed)
    }
}

/// Entry point for the `polysnap` binary
pub fn run() -> Result<()> {
    init_tracing()?;

    let args = CliArgs::parse(std::env::args().skip(1))
        .context("Usage: polysnap [--config editor.toml] [path/to/script.toml]")?;

    let mut script = match &args.script {
        Some(path) => {
            tracing::info!("Replaying script: {}", path.display());
            Script::load(path)?
        }
        None => {
            tracing::info!("No script given, starting from an empty canvas");
            Script::default()
        }
    };

    if let Some(path) = &args.config {
        tracing::info!("Loading editor config: {}", path.display());
        script.config = EditorConfig::load(path)?;
    }

    let canvas = script.run(RecordingSurface::new())?;
    tracing::info!(
        "Replay finished with {} shapes and {} markers",
        canvas.shapes().len(),
        canvas.surface().marker_count()
    );

    let summary = CanvasSummary::capture(&canvas);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
