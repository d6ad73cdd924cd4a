use crate::{
    composition::model::StripStyle,
    foundation::core::{Canvas, Point, Rect},
    foundation::error::{StripError, StripResult},
    geometry::primitives::aspect_for_frame_count,
};

/// Card margin on each side, as a fraction of canvas width.
pub const CARD_MARGIN_FRAC: f64 = 0.04;
/// Inner padding inside the card, as a fraction of canvas width.
pub const INNER_PAD_FRAC: f64 = 0.02;
/// Header bar height, as a fraction of canvas height.
pub const HEADER_HEIGHT_FRAC: f64 = 0.12;
/// Footer band reserved below the frame stack, as a fraction of canvas height.
pub const FOOTER_RESERVE_FRAC: f64 = 0.06;
/// Header placeholder font size, as a fraction of canvas width.
pub const HEADER_FONT_FRAC: f64 = 0.028;
/// Footer font size, as a fraction of canvas width.
pub const FOOTER_FONT_FRAC: f64 = 0.018;
/// Header bar corner radius, as a fraction of canvas width.
pub const HEADER_CORNER_FRAC: f64 = 20.0 / 3000.0;
/// Photo corner radius, as a fraction of canvas width.
pub const PHOTO_CORNER_FRAC: f64 = 18.0 / 3000.0;
/// Inset from frame rect to drawable photo rect, as a fraction of canvas width.
pub const FRAME_INSET_FRAC: f64 = 12.0 / 3000.0;
/// Watermark offset below the drawable top edge, as a fraction of canvas width.
pub const WATERMARK_OFFSET_FRAC: f64 = 10.0 / 3000.0;

/// Resolved strip geometry: every rectangle and anchor the plan compiler
/// paints, derived proportionally from the canvas size.
#[derive(Clone, Debug, serde::Serialize)]
pub struct StripLayout {
    /// Canvas the layout was resolved for.
    pub canvas: Canvas,
    /// Card rectangle behind all content.
    pub card: Rect,
    /// Header bar inside the card.
    pub header: Rect,
    /// Band reserved for the frame stack (frames plus gaps fit inside).
    pub frame_area: Rect,
    /// Outer frame rectangles, top to bottom.
    pub frames: Vec<Rect>,
    /// Drawable photo rectangles, one per frame, inset from the frame rects.
    pub drawables: Vec<Rect>,
    /// Center anchor for header placeholder text.
    pub header_text_anchor: Point,
    /// Center anchor for the footer caption.
    pub footer_anchor: Point,
    /// Inner padding actually used, in canvas units.
    pub inner_pad: f64,
    /// Header bar corner radius, in canvas units.
    pub header_corner_radius: f64,
    /// Photo corner radius, in canvas units.
    pub photo_corner_radius: f64,
    /// Watermark offset below the drawable top edge, in canvas units.
    pub watermark_offset: f64,
    /// Header placeholder font size, in canvas units.
    pub header_font_px: f64,
    /// Footer font size, in canvas units.
    pub footer_font_px: f64,
}

/// Resolve the full strip geometry for a canvas and style.
///
/// Pure math: two configs with equal canvas/style fields resolve to the same
/// layout. Frame height is the minimum of the height that fits all frames
/// plus gaps into the reserved band and the height implied by the available
/// width over the per-count aspect ratio, so frames never overflow the band
/// vertically nor the card horizontally.
pub fn resolve_strip_layout(canvas: Canvas, style: &StripStyle) -> StripResult<StripLayout> {
    let aspect = aspect_for_frame_count(style.frame_count)?;
    let w = canvas.width_f64();
    let h = canvas.height_f64();

    let margin = w * CARD_MARGIN_FRAC;
    let card = Rect::new(margin, margin, w - margin, h - margin);

    let inner_pad = w * INNER_PAD_FRAC;
    let header_h = h * HEADER_HEIGHT_FRAC;
    let header = Rect::new(
        card.x0 + inner_pad,
        card.y0 + inner_pad,
        card.x1 - inner_pad,
        card.y0 + inner_pad + header_h,
    );

    let footer_reserve = h * FOOTER_RESERVE_FRAC;
    let available_h = card.height() - header_h - inner_pad * 3.0 - footer_reserve;
    let frame_area_w = card.width() - inner_pad * 2.0;
    let frames_top = card.y0 + inner_pad * 2.0 + header_h;
    let frame_area = Rect::new(
        card.x0 + inner_pad,
        frames_top,
        card.x0 + inner_pad + frame_area_w,
        frames_top + available_h,
    );

    let count = style.frame_count;
    let gaps_total = style.gap * f64::from(count - 1);
    let h_max_by_height = (available_h - gaps_total) / f64::from(count);
    let frame_h = h_max_by_height.min(frame_area_w / aspect);
    if !frame_h.is_finite() || frame_h <= 0.0 {
        return Err(StripError::validation(
            "frame stack does not fit: gap too large for the reserved band",
        ));
    }
    let frame_w = frame_h * aspect;
    let x_base = card.x0 + inner_pad + (frame_area_w - frame_w) / 2.0;

    let inset = w * FRAME_INSET_FRAC;
    let mut frames = Vec::with_capacity(count as usize);
    let mut drawables = Vec::with_capacity(count as usize);
    let mut y = frames_top;
    for _ in 0..count {
        let frame = Rect::new(x_base, y, x_base + frame_w, y + frame_h);
        frames.push(frame);
        drawables.push(Rect::new(
            frame.x0 + inset,
            frame.y0 + inset,
            frame.x1 - inset,
            frame.y1 - inset,
        ));
        y += frame_h + style.gap;
    }

    Ok(StripLayout {
        canvas,
        card,
        header,
        frame_area,
        frames,
        drawables,
        header_text_anchor: header.center(),
        footer_anchor: Point::new(w / 2.0, card.y1 - inner_pad * 2.0),
        inner_pad,
        header_corner_radius: w * HEADER_CORNER_FRAC,
        photo_corner_radius: w * PHOTO_CORNER_FRAC,
        watermark_offset: w * WATERMARK_OFFSET_FRAC,
        header_font_px: w * HEADER_FONT_FRAC,
        footer_font_px: w * FOOTER_FONT_FRAC,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
