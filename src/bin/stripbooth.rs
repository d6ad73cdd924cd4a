use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use stripbooth::{
    CaptureSet, DESIGN_CANVAS, LogoFitPolicy, PreparedImage, StripBackground, StripConfig,
    StripStyle, Theme, compose_strip, decode_font, decode_image, rasterize_svg,
    resolve_strip_layout, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "stripbooth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a photo strip and write it as a PNG.
    Compose(ComposeArgs),
    /// Print the default style as pretty JSON (starting point for --style).
    DumpStyle,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Captured photo, in strip order. Repeat 2 to 4 times.
    #[arg(long = "photo", value_name = "PATH", required = true)]
    photos: Vec<PathBuf>,

    /// Logo image used for the header and the per-photo watermarks.
    /// Raster formats decode as-is; `.svg` files are rasterized.
    #[arg(long, value_name = "PATH")]
    logo: Option<PathBuf>,

    /// Font file for the header placeholder and footer caption.
    /// Without it, text is skipped with a warning.
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Style JSON file. Individual knobs below override its fields.
    #[arg(long, value_name = "PATH")]
    style: Option<PathBuf>,

    /// Number of frames in the strip (2, 3, or 4).
    /// Defaults to the photo count when no style file is given.
    #[arg(long)]
    frames: Option<u32>,

    /// Header theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Canvas background.
    #[arg(long, value_enum)]
    background: Option<BackgroundArg>,

    /// Footer caption text.
    #[arg(long)]
    footer_text: Option<String>,

    /// Card corner radius in canvas units.
    #[arg(long)]
    border_radius: Option<f64>,

    /// Vertical gap between frames in canvas units.
    #[arg(long)]
    gap: Option<f64>,

    /// Fraction of the header box the logo may fill, in [0.3, 0.9].
    #[arg(long)]
    logo_scale: Option<f64>,

    /// Watermark opacity, in [0.2, 1.0].
    #[arg(long)]
    watermark_opacity: Option<f64>,

    /// Whether the logo may scale past its native pixel size.
    #[arg(long, value_enum)]
    logo_fit: Option<LogoFitArg>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Compose even when no logo is given (placeholder header, no
    /// watermarks).
    #[arg(long, default_value_t = false)]
    allow_missing_logo: bool,

    /// Print the resolved layout as JSON to stderr before composing.
    #[arg(long, default_value_t = false)]
    dump_layout: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Blue,
    White,
}

impl From<ThemeArg> for Theme {
    fn from(v: ThemeArg) -> Self {
        match v {
            ThemeArg::Blue => Theme::Blue,
            ThemeArg::White => Theme::White,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackgroundArg {
    White,
    BlueSoft,
}

impl From<BackgroundArg> for StripBackground {
    fn from(v: BackgroundArg) -> Self {
        match v {
            BackgroundArg::White => StripBackground::White,
            BackgroundArg::BlueSoft => StripBackground::BlueSoft,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogoFitArg {
    AllowUpscale,
    ClampToNative,
}

impl From<LogoFitArg> for LogoFitPolicy {
    fn from(v: LogoFitArg) -> Self {
        match v {
            LogoFitArg::AllowUpscale => LogoFitPolicy::AllowUpscale,
            LogoFitArg::ClampToNative => LogoFitPolicy::ClampToNative,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::DumpStyle => cmd_dump_style(),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let photo_count = args.photos.len();
    if !(2..=4).contains(&photo_count) {
        anyhow::bail!("expected 2 to 4 photos, got {photo_count}");
    }

    let mut style = match &args.style {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read style '{}'", path.display()))?;
            serde_json::from_str::<StripStyle>(&text)
                .with_context(|| format!("parse style '{}'", path.display()))?
        }
        None => StripStyle::default(),
    };

    if let Some(frames) = args.frames {
        style.frame_count = frames;
    } else if args.style.is_none() {
        style.frame_count = (photo_count as u32).clamp(2, 4);
    }
    if let Some(theme) = args.theme {
        style.theme = theme.into();
    }
    if let Some(background) = args.background {
        style.background = background.into();
    }
    if let Some(footer_text) = args.footer_text {
        style.footer_text = footer_text;
    }
    if let Some(border_radius) = args.border_radius {
        style.border_radius = border_radius;
    }
    if let Some(gap) = args.gap {
        style.gap = gap;
    }
    if let Some(logo_scale) = args.logo_scale {
        style.logo_scale = logo_scale;
    }
    if let Some(watermark_opacity) = args.watermark_opacity {
        style.watermark_opacity = watermark_opacity;
    }
    if let Some(logo_fit) = args.logo_fit {
        style.logo_fit = logo_fit.into();
    }

    let mut config = StripConfig::new(DESIGN_CANVAS, style);

    match &args.logo {
        Some(path) => config = config.with_logo(load_logo(path)?),
        None => {
            if !args.allow_missing_logo {
                anyhow::bail!(
                    "refusing to compose without a logo; pass --allow-missing-logo to override"
                );
            }
        }
    }

    if let Some(path) = &args.font {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let font = decode_font(bytes).with_context(|| format!("load font '{}'", path.display()))?;
        eprintln!("using font family '{}'", font.family);
        config = config.with_font(font);
    }

    let mut images = Vec::with_capacity(args.photos.len());
    for path in &args.photos {
        let bytes =
            std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
        let image = decode_image(&bytes)
            .with_context(|| format!("decode photo '{}'", path.display()))?;
        images.push(image);
    }
    let captures = CaptureSet::from_images(images)?;

    if args.dump_layout {
        let layout = resolve_strip_layout(config.canvas, &config.style)?;
        eprintln!("{}", serde_json::to_string_pretty(&layout)?);
    }

    let frame = compose_strip(&config, &captures)?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_logo(path: &Path) -> anyhow::Result<PreparedImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read logo '{}'", path.display()))?;
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    let image = if is_svg {
        // Rasterize at half the canvas width: comfortably above the largest
        // box the logo can land in (50% of a drawable).
        rasterize_svg(&bytes, Some(DESIGN_CANVAS.width / 2))
            .with_context(|| format!("rasterize logo '{}'", path.display()))?
    } else {
        decode_image(&bytes).with_context(|| format!("decode logo '{}'", path.display()))?
    };
    Ok(image)
}

fn cmd_dump_style() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&StripStyle::default())?);
    Ok(())
}
