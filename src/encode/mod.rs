//! Lossless output encoding.

/// PNG encoding for composed strips.
pub mod png;
