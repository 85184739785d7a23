// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime editor options.
//!
//! Every field falls back to the matching constant in `settings`, so an
//! empty TOML table yields the stock configuration.

use crate::settings;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

/// Options recognized by the canvas
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Reference zoom level for the distance scale
    pub base_zoom: f64,

    /// Zoom level the canvas starts at
    ///
    /// Falls back to `base_zoom` when omitted, giving a distance scale of 1.
    pub initial_zoom: Option<f64>,

    /// Snap distance at the base zoom, in position units
    pub snap_threshold: f64,

    /// Whether vertices can be dragged
    pub draggable: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            base_zoom: settings::zoom::BASE,
            initial_zoom: None,
            snap_threshold: settings::snap::BASE_THRESHOLD,
            draggable: settings::interaction::DRAGGABLE,
        }
    }
}

impl EditorConfig {
    /// Parse options from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EditorConfig =
            toml::from_str(source).context("Failed to parse editor config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&source)
    }

    /// Zoom level the canvas starts at
    pub fn start_zoom(&self) -> f64 {
        self.initial_zoom.unwrap_or(self.base_zoom)
    }

    /// Reject values the snapping math cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.snap_threshold.is_finite() && self.snap_threshold > 0.0,
            "snap_threshold must be a positive number, got {}",
            self.snap_threshold
        );
        ensure!(
            self.base_zoom.is_finite(),
            "base_zoom must be finite, got {}",
            self.base_zoom
        );
        if let Some(zoom) = self.initial_zoom {
            ensure!(zoom.is_finite(), "initial_zoom must be finite, got {zoom}");
        }
        Ok(())
    }
}
