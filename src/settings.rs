// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual defaults that stay stable across theme
//! changes. Visual styling (colors, opacities, stacking) belongs in
//! `theme.rs`. Runtime overrides go through `config::EditorConfig`.

// ============================================================================
// ZOOM SETTINGS
// ============================================================================
/// Reference zoom level at which the base snap threshold applies.
///
/// The distance scale is `2^(zoom - BASE_ZOOM)`, so each zoom step halves
/// or doubles the effective snap distance in position units.
const BASE_ZOOM: f64 = 10.0;

// ============================================================================
// SNAP SETTINGS
// ============================================================================
/// Snap distance in position units at the base zoom.
///
/// 0.012 works well for geographic coordinates at zoom 10.
const BASE_SNAP_THRESHOLD: f64 = 0.012;

// ============================================================================
// INTERACTION SETTINGS
// ============================================================================
/// Whether vertex markers can be dragged
const DRAGGABLE: bool = true;

// ============================================================================
// LOGGING
// ============================================================================
/// Filter directive applied when `RUST_LOG` is not set
const DEFAULT_LOG_DIRECTIVE: &str = "polysnap=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Zoom settings
pub mod zoom {
    /// Reference zoom for the distance scale
    pub const BASE: f64 = super::BASE_ZOOM;
}

/// Cross-shape vertex snapping
pub mod snap {
    /// Snap distance at the base zoom (position units)
    pub const BASE_THRESHOLD: f64 = super::BASE_SNAP_THRESHOLD;
}

/// Pointer interaction
pub mod interaction {
    pub const DRAGGABLE: bool = super::DRAGGABLE;
}

/// Logging defaults
pub mod logging {
    pub const DEFAULT_DIRECTIVE: &str = super::DEFAULT_LOG_DIRECTIVE;
}
