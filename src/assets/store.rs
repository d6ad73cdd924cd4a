use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    assets::decode,
    foundation::error::{StripError, StripResult},
};

/// Prepared raster image in premultiplied RGBA8 form.
///
/// This is the only pixel input the compositor accepts: decoding (and any
/// camera or file handling) happens at the edges, so render stages stay
/// deterministic and IO-free.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Build a prepared image from raw straight-alpha RGBA8 bytes.
    ///
    /// This is the in-memory ingestion path (camera frames, test fixtures);
    /// encoded files go through [`crate::decode_image`] instead.
    pub fn from_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> StripResult<Self> {
        if width == 0 || height == 0 {
            return Err(StripError::validation("image dimensions must be > 0"));
        }
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba8.len() != expected {
            return Err(StripError::validation(format!(
                "image byte length {} does not match {width}x{height} RGBA8",
                rgba8.len()
            )));
        }
        decode::premultiply_rgba8_in_place(&mut rgba8);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8),
        })
    }
}

/// Prepared font handle: raw bytes plus the primary family name.
///
/// Fonts are explicit inputs like the logo; nothing is discovered from the
/// system at render time.
#[derive(Clone)]
pub struct PreparedFont {
    /// Raw font file bytes (TTF/OTF).
    pub bytes: Arc<Vec<u8>>,
    /// Primary family name registered from the bytes.
    pub family: String,
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

/// Ordered sequence of 0 to 4 captured photos, index-aligned to frame
/// position.
///
/// The set may hold fewer images than the configured frame count; missing
/// slots render as placeholder tiles. Order is capture/upload order and is
/// never reordered by the compositor.
#[derive(Clone, Debug, Default)]
pub struct CaptureSet {
    images: Vec<PreparedImage>,
}

impl CaptureSet {
    /// Maximum number of captures a strip can hold.
    pub const MAX_CAPTURES: usize = 4;

    /// Empty capture set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an ordered list of images.
    pub fn from_images(images: Vec<PreparedImage>) -> StripResult<Self> {
        if images.len() > Self::MAX_CAPTURES {
            return Err(StripError::validation(format!(
                "capture set holds at most {} images, got {}",
                Self::MAX_CAPTURES,
                images.len()
            )));
        }
        Ok(Self { images })
    }

    /// Append a capture in order.
    pub fn push(&mut self, image: PreparedImage) -> StripResult<()> {
        if self.images.len() >= Self::MAX_CAPTURES {
            return Err(StripError::validation(format!(
                "capture set is full ({} images)",
                Self::MAX_CAPTURES
            )));
        }
        self.images.push(image);
        Ok(())
    }

    /// Number of captures present.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the set holds no captures.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Capture at frame index `i`, if present.
    pub fn get(&self, i: usize) -> Option<&PreparedImage> {
        self.images.get(i)
    }

    /// Iterate captures in frame order.
    pub fn iter(&self) -> impl Iterator<Item = &PreparedImage> {
        self.images.iter()
    }
}

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Stateful helper for building Parley text layouts from prepared fonts.
///
/// Each distinct font handle is registered into the Parley collection once;
/// later layouts reuse the registered family, so a long-lived engine (the
/// reusable compositor's) does not accumulate registrations or font-byte
/// copies across renders.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    // Keyed by the handle's shared byte allocation.
    families: HashMap<usize, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Number of distinct font handles registered so far.
    pub fn registered_fonts(&self) -> usize {
        self.families.len()
    }

    fn family_for(&mut self, font: &PreparedFont) -> StripResult<String> {
        let key = Arc::as_ptr(&font.bytes) as usize;
        if let Some(name) = self.families.get(&key) {
            return Ok(name.clone());
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(font.bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            StripError::validation("no font families registered from font bytes")
        })?;

        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StripError::validation("registered font family has no name"))?
            .to_string();
        self.families.insert(key, name.clone());
        Ok(name)
    }

    /// Shape and lay out plain single-style text using a prepared font.
    ///
    /// With `max_width_px` unset the layout is a single unconstrained line,
    /// which is what the strip's header/footer anchors expect; callers center
    /// the result using the layout's measured width and height.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font: &PreparedFont,
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> StripResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StripError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.family_for(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        } else {
            layout.break_all_lines(None);
        }

        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
