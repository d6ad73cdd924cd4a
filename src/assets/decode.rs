use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::store::{PreparedFont, PreparedImage},
    foundation::error::{StripError, StripResult},
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> StripResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Rasterize SVG bytes into a prepared premultiplied RGBA8 image.
///
/// The raster size defaults to the SVG's intrinsic size; `target_width`
/// overrides the width (height follows the intrinsic aspect ratio) so logos
/// rasterized for large canvases stay sharp instead of being upscaled from a
/// small intrinsic size.
pub fn rasterize_svg(bytes: &[u8], target_width: Option<u32>) -> StripResult<PreparedImage> {
    fn to_px(v: f32) -> StripResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(StripError::validation("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let size = tree.size();
    let base_w = to_px(size.width())?;
    let base_h = to_px(size.height())?;

    let (width, height) = match target_width {
        Some(tw) => {
            let tw = tw.max(1);
            let th = ((f64::from(tw) * f64::from(base_h)) / f64::from(base_w))
                .ceil()
                .max(1.0) as u32;
            (tw, th)
        }
        None => (base_w, base_h),
    };

    // Avoid pathological allocations; callers wanting larger rasters should
    // rasterize in tiles themselves.
    const MAX_DIM: u32 = 16_384;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(StripError::validation(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StripError::validation("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    // tiny-skia pixmaps are already premultiplied RGBA8.
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.data().to_vec()),
    })
}

/// Wrap raw font bytes into a prepared font handle.
///
/// Registration into a scratch Parley collection up front rejects bytes that
/// are not a usable font, so render calls never see a broken handle.
pub fn decode_font(bytes: Vec<u8>) -> StripResult<PreparedFont> {
    let mut font_ctx = parley::FontContext::default();
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    let family_id = families
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| StripError::validation("no font families registered from font bytes"))?;
    let family = font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| StripError::validation("registered font family has no name"))?
        .to_string();

    Ok(PreparedFont {
        bytes: Arc::new(bytes),
        family,
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
