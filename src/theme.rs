// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// SHAPE FILLS -- One per shape state
// ============================================================================
const SHAPE_FILL_DEFAULT: Color = Color::from_rgb8(0x55, 0x55, 0xff);
const SHAPE_FILL_SELECTED: Color = Color::from_rgb8(0xff, 0xff, 0x00);
const SHAPE_FILL_ERROR: Color = Color::from_rgb8(0xff, 0x00, 0x00);

// ============================================================================
// SHAPE OUTLINES
// ============================================================================
const SHAPE_STROKE_WEIGHT: f64 = 3.0;

// ============================================================================
// STACKING -- Selected shapes render above everything else
// ============================================================================
const Z_ORDER_BASE: i32 = 0;
const Z_ORDER_SELECTED: i32 = 1;

// ============================================================================
// VERTEX MARKERS
// ============================================================================
/// Shadow markers are drawn faded until they are dragged into real vertices
const SHADOW_MARKER_OPACITY: f32 = 0.3;
const VERTEX_MARKER_OPACITY: f32 = 1.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Fill colors for shapes
pub mod shape {
    use super::Color;
    pub const FILL_DEFAULT: Color = super::SHAPE_FILL_DEFAULT;
    pub const FILL_SELECTED: Color = super::SHAPE_FILL_SELECTED;
    pub const FILL_ERROR: Color = super::SHAPE_FILL_ERROR;

    /// Width of polygon outlines
    pub const STROKE_WEIGHT: f64 = super::SHAPE_STROKE_WEIGHT;
}

/// Stacking order for shapes and their markers
pub mod z_order {
    pub const BASE: i32 = super::Z_ORDER_BASE;
    pub const SELECTED: i32 = super::Z_ORDER_SELECTED;
}

/// Marker opacities
pub mod marker {
    pub const SHADOW_OPACITY: f32 = super::SHADOW_MARKER_OPACITY;
    pub const VERTEX_OPACITY: f32 = super::VERTEX_MARKER_OPACITY;
}
