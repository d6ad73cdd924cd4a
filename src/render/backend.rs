/// A rendered strip as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**, tightly packed, row-major. A composed
/// strip is fully covered by the opaque background fill, so premultiplied and
/// straight alpha coincide for every pixel of a finished strip.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}
