//! Stripbooth composes photo-booth strips: two to four captures laid into a
//! fixed 3:10 portrait canvas with a branded header, per-photo logo
//! watermarks, and a footer caption.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Canvas + StripStyle -> StripLayout` (proportional geometry)
//! 2. **Compile**: `StripConfig + CaptureSet -> StripPlan` (ordered paint ops)
//! 3. **Rasterize**: `StripPlan -> FrameRGBA` (CPU, `vello_cpu`)
//! 4. **Encode** (optional): PNG helpers for lossless export
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: layout and compilation are pure; the same
//!   config and captures produce bit-identical pixels.
//! - **No IO in the compositor**: decoding is front-loaded into
//!   [`PreparedImage`] and [`PreparedFont`]; only the decode and encode edges
//!   touch bytes from outside.
//! - **Premultiplied RGBA8** end-to-end: the rasterizer outputs premultiplied
//!   pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compile;
mod composition;
mod encode;
mod foundation;
mod geometry;
mod layout;
mod render;

pub use assets::decode::{decode_font, decode_image, rasterize_svg};
pub use assets::store::{
    CaptureSet, PreparedFont, PreparedImage, TextBrushRgba8, TextLayoutEngine,
};
pub use compile::plan::{
    ImageSlot, PaintOp, RoundedClip, StripPlan, WATERMARK_HEIGHT_FRAC, WATERMARK_WIDTH_FRAC,
    compile_strip,
};
pub use composition::model::{
    DESIGN_CANVAS, HEADER_PLACEHOLDER_TEXT, LogoFitPolicy, PALETTE_BLUE, PALETTE_BLUE_SOFT,
    PALETTE_INK, PALETTE_WHITE, StripBackground, StripConfig, StripStyle, Theme,
};
pub use encode::png::{encode_png, write_png};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8};
pub use foundation::error::{StripError, StripResult};
pub use geometry::primitives::{
    ContainFit, CoverFit, aspect_for_frame_count, contain_fit, cover_fit, rounded_rect_path,
};
pub use layout::solver::{
    CARD_MARGIN_FRAC, FOOTER_FONT_FRAC, FOOTER_RESERVE_FRAC, FRAME_INSET_FRAC, HEADER_CORNER_FRAC,
    HEADER_FONT_FRAC, HEADER_HEIGHT_FRAC, INNER_PAD_FRAC, PHOTO_CORNER_FRAC, StripLayout,
    WATERMARK_OFFSET_FRAC, resolve_strip_layout,
};
pub use render::backend::FrameRGBA;
pub use render::cpu::CpuRasterizer;
pub use render::pipeline::{StripCompositor, compose_strip};
