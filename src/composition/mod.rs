//! Strip configuration model: palette, themes, style knobs.

/// Config/style types and design constants.
pub mod model;
