//! Shared primitive types and the crate error taxonomy.

/// Canvas, color, and geometry primitives.
pub mod core;
/// Error and result types.
pub mod error;
