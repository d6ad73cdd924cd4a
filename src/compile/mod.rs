//! Plan compilation.
//!
//! Turns a config and capture set into a backend-agnostic list of paint
//! operations with precomputed transforms. The rasterizer executes the ops
//! in order without re-deriving any geometry.

/// Paint ops and the strip plan compiler.
pub mod plan;
