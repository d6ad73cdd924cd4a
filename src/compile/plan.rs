use crate::{
    assets::store::{CaptureSet, PreparedImage},
    composition::model::{
        HEADER_PLACEHOLDER_TEXT, PALETTE_BLUE_SOFT, PALETTE_INK, PALETTE_WHITE, StripConfig,
        StripStyle,
    },
    foundation::core::{Affine, Canvas, Point, Rect, Rgba8},
    foundation::error::StripResult,
    geometry::primitives::{contain_fit, cover_fit},
    layout::solver::{StripLayout, resolve_strip_layout},
};

/// Watermark box width, as a fraction of the drawable photo width.
pub const WATERMARK_WIDTH_FRAC: f64 = 0.5;
/// Watermark box height, as a fraction of the drawable photo height.
pub const WATERMARK_HEIGHT_FRAC: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Pixel source for an [`PaintOp::Image`] op, resolved by the rasterizer.
pub enum ImageSlot {
    /// The capture at this index in the caller's capture set.
    Capture(usize),
    /// The configured logo image.
    Logo,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Rounded-rectangle clip applied around an image paint.
pub struct RoundedClip {
    /// Clip rectangle in canvas space.
    pub rect: Rect,
    /// Corner radius in canvas units.
    pub radius: f64,
}

#[derive(Clone, Debug, serde::Serialize)]
/// A single paint operation emitted by the compiler.
///
/// Ops carry everything the rasterizer needs precomputed: transforms map
/// source pixel space into canvas space, colors are straight-alpha RGBA.
pub enum PaintOp {
    /// Fill an axis-aligned rectangle with a solid color.
    FillRect {
        /// Rectangle in canvas space.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Fill a rounded rectangle with a solid color.
    FillRoundedRect {
        /// Rectangle in canvas space.
        rect: Rect,
        /// Corner radius in canvas units.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// Paint an image with a precomputed placement transform.
    Image {
        /// Which image the rasterizer resolves this op against.
        slot: ImageSlot,
        /// Maps source pixel space onto the canvas placement.
        transform: Affine,
        /// Optional rounded clip applied around the placement.
        clip: Option<RoundedClip>,
        /// Uniform opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Paint a single-style text run centered on an anchor.
    Text {
        /// Text content.
        content: String,
        /// Center anchor in canvas space.
        anchor: Point,
        /// Font size in canvas units.
        size_px: f64,
        /// Fill color.
        color: Rgba8,
    },
}

#[derive(Clone, Debug, serde::Serialize)]
/// Backend-agnostic paint plan for one strip.
///
/// A plan is an ordered op list over a single canvas-sized surface.
/// Compiling is pure: the same config and captures always produce the same
/// plan, and executing the ops in order reproduces the strip exactly.
pub struct StripPlan {
    /// Output surface size.
    pub canvas: Canvas,
    /// Resolved geometry the ops were derived from.
    pub layout: StripLayout,
    /// Paint operations in back-to-front order.
    pub ops: Vec<PaintOp>,
}

#[tracing::instrument(skip_all, fields(frame_count = config.style.frame_count, captures = captures.len()))]
/// Compile a validated config and capture set into an ordered paint plan.
///
/// Missing captures compile to flat placeholder tiles and a missing logo
/// compiles to placeholder header text with no watermarks; neither is an
/// error. Text ops are always emitted, even when no font handle is
/// configured, so the plan fully describes the strip regardless of what the
/// rasterizer can draw.
pub fn compile_strip(config: &StripConfig, captures: &CaptureSet) -> StripResult<StripPlan> {
    config.validate()?;
    let layout = resolve_strip_layout(config.canvas, &config.style)?;
    let style = &config.style;

    let mut ops = Vec::with_capacity(4 + layout.frames.len() * 2);

    ops.push(PaintOp::FillRect {
        rect: config.canvas.rect(),
        color: style.background.fill(),
    });
    ops.push(PaintOp::FillRoundedRect {
        rect: layout.card,
        radius: style.border_radius,
        color: PALETTE_WHITE,
    });
    ops.push(PaintOp::FillRoundedRect {
        rect: layout.header,
        radius: layout.header_corner_radius,
        color: style.theme.header_fill(),
    });

    match &config.logo {
        Some(logo) => {
            let box_w = layout.header.width() * style.logo_scale;
            let box_h = layout.header.height() * style.logo_scale;
            ops.push(header_logo_op(logo, &layout, style, box_w, box_h));
        }
        None => ops.push(PaintOp::Text {
            content: HEADER_PLACEHOLDER_TEXT.to_string(),
            anchor: layout.header_text_anchor,
            size_px: layout.header_font_px,
            color: style.theme.header_text(),
        }),
    }

    for (index, drawable) in layout.drawables.iter().enumerate() {
        match captures.get(index) {
            Some(photo) => {
                let fit = cover_fit(
                    f64::from(photo.width),
                    f64::from(photo.height),
                    *drawable,
                );
                ops.push(PaintOp::Image {
                    slot: ImageSlot::Capture(index),
                    transform: fit.transform,
                    clip: Some(RoundedClip {
                        rect: *drawable,
                        radius: layout.photo_corner_radius,
                    }),
                    opacity: 1.0,
                });
            }
            // Empty slots get a flat tile, square corners included.
            None => ops.push(PaintOp::FillRect {
                rect: *drawable,
                color: PALETTE_BLUE_SOFT,
            }),
        }
        if let Some(logo) = &config.logo {
            ops.push(watermark_op(logo, &layout, style, *drawable));
        }
    }

    ops.push(PaintOp::Text {
        content: style.footer_text.clone(),
        anchor: layout.footer_anchor,
        size_px: layout.footer_font_px,
        color: PALETTE_INK,
    });

    tracing::debug!(
        ops = ops.len(),
        frame_w = layout.frames[0].width(),
        frame_h = layout.frames[0].height(),
        "compiled strip plan"
    );

    Ok(StripPlan {
        canvas: config.canvas,
        layout,
        ops,
    })
}

fn header_logo_op(
    logo: &PreparedImage,
    layout: &StripLayout,
    style: &StripStyle,
    box_w: f64,
    box_h: f64,
) -> PaintOp {
    let fit = contain_fit(
        f64::from(logo.width),
        f64::from(logo.height),
        box_w,
        box_h,
        style.logo_fit.allows_upscale(),
    );
    let center = layout.header.center();
    let x = center.x - fit.width / 2.0;
    let y = center.y - fit.height / 2.0;
    PaintOp::Image {
        slot: ImageSlot::Logo,
        transform: Affine::translate((x, y)) * Affine::scale(fit.scale),
        clip: None,
        opacity: 1.0,
    }
}

fn watermark_op(
    logo: &PreparedImage,
    layout: &StripLayout,
    style: &StripStyle,
    drawable: Rect,
) -> PaintOp {
    let fit = contain_fit(
        f64::from(logo.width),
        f64::from(logo.height),
        drawable.width() * WATERMARK_WIDTH_FRAC,
        drawable.height() * WATERMARK_HEIGHT_FRAC,
        style.logo_fit.allows_upscale(),
    );
    let x = drawable.center().x - fit.width / 2.0;
    let y = drawable.y0 + layout.watermark_offset;
    PaintOp::Image {
        slot: ImageSlot::Logo,
        transform: Affine::translate((x, y)) * Affine::scale(fit.scale),
        clip: None,
        opacity: style.watermark_opacity as f32,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
