// Copyright 2025 the Polysnap Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod canvas;
pub mod gesture;

pub use canvas::{Canvas, CanvasEvent};
pub use gesture::{Gesture, Modifiers, Target};
