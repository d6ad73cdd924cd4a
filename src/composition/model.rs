use crate::{
    assets::store::{PreparedFont, PreparedImage},
    foundation::core::{Canvas, Rgba8},
    foundation::error::{StripError, StripResult},
    geometry::primitives::aspect_for_frame_count,
};

/// Header/body accent blue.
pub const PALETTE_BLUE: Rgba8 = Rgba8::rgb(0xA7, 0xD8, 0xFF);
/// Soft blue used for the tinted background and placeholder tiles.
pub const PALETTE_BLUE_SOFT: Rgba8 = Rgba8::rgb(0xD8, 0xEE, 0xFF);
/// Card and light-theme fill.
pub const PALETTE_WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
/// Near-black ink for text.
pub const PALETTE_INK: Rgba8 = Rgba8::rgb(0x0F, 0x17, 0x2A);

/// Native strip canvas: portrait, 3:10.
pub const DESIGN_CANVAS: Canvas = Canvas {
    width: 3000,
    height: 10000,
};

/// Instructional text shown in the header when no logo is present.
pub const HEADER_PLACEHOLDER_TEXT: &str = "Upload RiesBeads logo to brand header and frames";

/// Header fill/text color pairing.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum Theme {
    /// Blue header bar with white placeholder text.
    #[default]
    Blue,
    /// White header bar with ink placeholder text.
    White,
}

impl Theme {
    /// Header bar fill color.
    pub fn header_fill(self) -> Rgba8 {
        match self {
            Theme::Blue => PALETTE_BLUE,
            Theme::White => PALETTE_WHITE,
        }
    }

    /// Placeholder text color contrasting with the header fill.
    pub fn header_text(self) -> Rgba8 {
        match self {
            Theme::Blue => PALETTE_WHITE,
            Theme::White => PALETTE_INK,
        }
    }
}

/// Full-canvas background color behind the card.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum StripBackground {
    /// Plain white.
    #[default]
    White,
    /// Soft blue tint.
    BlueSoft,
}

impl StripBackground {
    /// Background fill color.
    pub fn fill(self) -> Rgba8 {
        match self {
            StripBackground::White => PALETTE_WHITE,
            StripBackground::BlueSoft => PALETTE_BLUE_SOFT,
        }
    }
}

/// Policy for scaling the logo into its header and watermark fit boxes.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub enum LogoFitPolicy {
    /// Scale freely to the fit box, even past the logo's native pixel size.
    #[default]
    AllowUpscale,
    /// Fit, but never scale beyond the logo's native pixel dimensions.
    ClampToNative,
}

impl LogoFitPolicy {
    /// Whether contain-fit scaling may exceed 1.0.
    pub fn allows_upscale(self) -> bool {
        matches!(self, LogoFitPolicy::AllowUpscale)
    }
}

/// User-tunable strip styling.
///
/// All knobs have design defaults; a partial JSON style file fills the rest.
/// Lengths (`border_radius`, `gap`) are absolute canvas units with defaults
/// chosen for the native 3000 × 10000 canvas.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct StripStyle {
    /// Number of photo frames: 2, 3, or 4.
    #[serde(default = "default_frame_count")]
    pub frame_count: u32,
    /// Header color pairing.
    #[serde(default)]
    pub theme: Theme,
    /// Canvas background behind the card.
    #[serde(default)]
    pub background: StripBackground,
    /// Corner radius of the card, in canvas units.
    #[serde(default = "default_border_radius")]
    pub border_radius: f64,
    /// Vertical gap between stacked frames, in canvas units.
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Caption rendered near the bottom of the card.
    #[serde(default = "default_footer_text")]
    pub footer_text: String,
    /// Fraction of the header box the logo may occupy, in [0.3, 0.9].
    #[serde(default = "default_logo_scale")]
    pub logo_scale: f64,
    /// Opacity of the per-frame watermark, in [0.2, 1.0].
    #[serde(default = "default_watermark_opacity")]
    pub watermark_opacity: f64,
    /// Logo scaling policy for header and watermark boxes.
    #[serde(default)]
    pub logo_fit: LogoFitPolicy,
}

fn default_frame_count() -> u32 {
    4
}

fn default_border_radius() -> f64 {
    28.0
}

fn default_gap() -> f64 {
    24.0
}

fn default_footer_text() -> String {
    "riesbeads.com • Singapore".to_string()
}

fn default_logo_scale() -> f64 {
    0.7
}

fn default_watermark_opacity() -> f64 {
    1.0
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            frame_count: default_frame_count(),
            theme: Theme::default(),
            background: StripBackground::default(),
            border_radius: default_border_radius(),
            gap: default_gap(),
            footer_text: default_footer_text(),
            logo_scale: default_logo_scale(),
            watermark_opacity: default_watermark_opacity(),
            logo_fit: LogoFitPolicy::default(),
        }
    }
}

impl StripStyle {
    /// Validate all style knobs.
    ///
    /// The frame count check goes through the aspect lookup so an invalid
    /// count surfaces as [`StripError::InvalidFrameCount`].
    pub fn validate(&self) -> StripResult<()> {
        aspect_for_frame_count(self.frame_count)?;

        if !self.border_radius.is_finite() || self.border_radius < 0.0 {
            return Err(StripError::validation(
                "border_radius must be finite and >= 0",
            ));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(StripError::validation("gap must be finite and >= 0"));
        }
        if !self.logo_scale.is_finite() || !(0.3..=0.9).contains(&self.logo_scale) {
            return Err(StripError::validation(
                "logo_scale must be within [0.3, 0.9]",
            ));
        }
        if !self.watermark_opacity.is_finite() || !(0.2..=1.0).contains(&self.watermark_opacity) {
            return Err(StripError::validation(
                "watermark_opacity must be within [0.2, 1.0]",
            ));
        }
        Ok(())
    }
}

/// Complete input to one strip render: canvas, style, and optional prepared
/// logo/font handles.
///
/// The config is immutable per render; the surrounding application owns it
/// and passes it in on every call.
#[derive(Clone, Debug)]
pub struct StripConfig {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Styling knobs.
    pub style: StripStyle,
    /// Optional logo drawn in the header and as per-frame watermark.
    pub logo: Option<PreparedImage>,
    /// Optional font for header placeholder and footer text.
    pub font: Option<PreparedFont>,
}

impl StripConfig {
    /// Config with no logo or font.
    pub fn new(canvas: Canvas, style: StripStyle) -> Self {
        Self {
            canvas,
            style,
            logo: None,
            font: None,
        }
    }

    /// Attach a prepared logo.
    pub fn with_logo(mut self, logo: PreparedImage) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Attach a prepared font.
    pub fn with_font(mut self, font: PreparedFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Validate canvas dimensions and style knobs.
    pub fn validate(&self) -> StripResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StripError::validation("canvas width/height must be > 0"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(StripError::validation(
                "canvas dimensions exceed the CPU rasterizer limit (65535)",
            ));
        }
        self.style.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
