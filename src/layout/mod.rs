//! Proportional strip geometry.
//!
//! The solver turns a canvas size and a [`StripStyle`](crate::StripStyle)
//! into concrete rectangles and anchors. Everything scales with the canvas,
//! so the same style renders identically at preview and export resolutions.

/// Layout solver and resolved geometry.
pub mod solver;
