//! Rasterization.
//!
//! The CPU rasterizer executes compiled plans through `vello_cpu`; the
//! pipeline module wires validation, compilation, and rasterization into the
//! public composition entry points.

/// Rendered-frame type shared across the render boundary.
pub mod backend;
/// CPU rasterizer powered by `vello_cpu`.
pub mod cpu;
/// High-level composition entry points.
pub mod pipeline;
