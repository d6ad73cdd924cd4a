use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::{
    foundation::error::{StripError, StripResult},
    render::backend::FrameRGBA,
};

/// Encode a composed strip as PNG bytes.
///
/// A finished strip is fully opaque, so its premultiplied pixels are written
/// directly as straight RGBA8.
pub fn encode_png(frame: &FrameRGBA) -> StripResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(StripError::encode("frame byte length mismatch"));
    }

    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| StripError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Write a composed strip to `path` as a PNG, creating parent directories.
pub fn write_png(path: impl AsRef<Path>, frame: &FrameRGBA) -> StripResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
