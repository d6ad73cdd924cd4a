use kurbo::Shape;

use crate::foundation::{
    core::{Affine, BezPath, Rect},
    error::{StripError, StripResult},
};

/// Per-frame aspect ratio (width / height) for a strip frame count.
///
/// The mapping is fixed by the strip design and never inferred from image
/// content: 2 frames → 3:4, 3 frames → 1:1, 4 frames → 4:3. Any other count
/// fails with [`StripError::InvalidFrameCount`]; callers constrain the count
/// upstream and this lookup is the defensive backstop.
pub fn aspect_for_frame_count(n: u32) -> StripResult<f64> {
    match n {
        2 => Ok(3.0 / 4.0),
        3 => Ok(1.0),
        4 => Ok(4.0 / 3.0),
        other => Err(StripError::InvalidFrameCount(other)),
    }
}

/// Closed rounded-rectangle path with four quarter-circle corners.
///
/// `radius` is clamped to `min(radius, w/2, h/2)` (and to zero from below) so
/// degenerate rectangles never produce overlapping or inverted arcs. The
/// result is fillable and clippable with a single consistent winding.
pub fn rounded_rect_path(rect: Rect, radius: f64) -> BezPath {
    let rr = radius
        .max(0.0)
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0);
    let shape = kurbo::RoundedRect::new(rect.x0, rect.y0, rect.x1, rect.y1, rr);
    let mut path = BezPath::new();
    for el in shape.path_elements(0.1) {
        path.push(el);
    }
    path
}

/// Resolved "cover" placement of an image over a destination rectangle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CoverFit {
    /// Uniform scale applied to the source image.
    pub scale: f64,
    /// Placement rectangle of the scaled image in canvas space.
    ///
    /// Extends past `dst` on the axis where the image overflows; the overflow
    /// is split evenly between both sides and cropped by the frame clip.
    pub placement: Rect,
    /// Affine mapping source pixel space onto the placement.
    pub transform: Affine,
}

/// Scale and center an image so it fully covers `dst`.
///
/// Cover semantics: `scale = max(dst.w / img_w, dst.h / img_h)`, excess
/// cropped symmetrically on the overflowing axis. The source aspect ratio is
/// preserved exactly; only cropping occurs, never stretching. `img_w` and
/// `img_h` must be positive.
pub fn cover_fit(img_w: f64, img_h: f64, dst: Rect) -> CoverFit {
    let scale = (dst.width() / img_w).max(dst.height() / img_h);
    let scaled_w = img_w * scale;
    let scaled_h = img_h * scale;
    let x = dst.x0 + (dst.width() - scaled_w) / 2.0;
    let y = dst.y0 + (dst.height() - scaled_h) / 2.0;
    CoverFit {
        scale,
        placement: Rect::new(x, y, x + scaled_w, y + scaled_h),
        transform: Affine::translate((x, y)) * Affine::scale(scale),
    }
}

/// Resolved "contain" placement of an image inside a fit box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ContainFit {
    /// Uniform scale applied to the source image.
    pub scale: f64,
    /// Scaled width.
    pub width: f64,
    /// Scaled height.
    pub height: f64,
}

/// Scale an image uniformly so it fits inside a `max_w` × `max_h` box.
///
/// Contain semantics: `scale = min(max_w / img_w, max_h / img_h)`, so the
/// tighter dimension limits the fit and at least one scaled dimension equals
/// its bound. With `allow_upscale` false the scale is additionally capped at
/// 1.0 and the image never exceeds its native pixel size.
pub fn contain_fit(
    img_w: f64,
    img_h: f64,
    max_w: f64,
    max_h: f64,
    allow_upscale: bool,
) -> ContainFit {
    let mut scale = (max_w / img_w).min(max_h / img_h);
    if !allow_upscale {
        scale = scale.min(1.0);
    }
    ContainFit {
        scale,
        width: img_w * scale,
        height: img_h * scale,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
