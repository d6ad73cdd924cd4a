//! Stateless geometry helpers used by the layout solver and plan compiler.

/// Rounded rectangles, cover/contain fits, aspect lookup.
pub mod primitives;
