use std::sync::Arc;

use crate::{
    assets::store::{CaptureSet, PreparedFont, PreparedImage, TextBrushRgba8, TextLayoutEngine},
    compile::plan::{ImageSlot, PaintOp, RoundedClip, StripPlan},
    composition::model::StripConfig,
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8},
    foundation::error::{StripError, StripResult},
    geometry::primitives::rounded_rect_path,
    render::backend::FrameRGBA,
};

/// CPU rasterizer executing strip plans through `vello_cpu`.
///
/// Keeps its render context and output pixmap across calls so repeated
/// composition at a fixed canvas size reuses the big allocations. State never
/// leaks between renders: the context is reset and the output pixmap cleared
/// at the start of every call.
#[derive(Default)]
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    out: Option<vello_cpu::Pixmap>,
    text_engine: TextLayoutEngine,
}

impl CpuRasterizer {
    /// Create a rasterizer with no allocated surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> StripResult<R>,
    ) -> StripResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Execute a compiled plan and read back the finished strip.
    ///
    /// `config` and `captures` must be the values the plan was compiled from:
    /// capture indices and the logo slot are resolved against them. Text ops
    /// are skipped with a warning when no font is configured.
    pub fn rasterize(
        &mut self,
        plan: &StripPlan,
        config: &StripConfig,
        captures: &CaptureSet,
    ) -> StripResult<FrameRGBA> {
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| StripError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| StripError::render("canvas height exceeds u16"))?;

        let mut capture_paints = Vec::with_capacity(captures.len());
        for image in captures.iter() {
            capture_paints.push(prepared_image_paint(image)?);
        }
        let logo_paint = match &config.logo {
            Some(logo) => Some(prepared_image_paint(logo)?),
            None => None,
        };

        let mut out = match self.out.take() {
            Some(pm) if pm.width() == width && pm.height() == height => pm,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        clear_pixmap_to_transparent(&mut out);

        let mut warned_missing_font = false;
        self.with_ctx_mut(width, height, |this, ctx| {
            for op in &plan.ops {
                ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

                match op {
                    PaintOp::FillRect { rect, color } => {
                        ctx.set_paint(color_to_cpu(*color));
                        ctx.fill_rect(&rect_to_cpu(*rect));
                    }
                    PaintOp::FillRoundedRect {
                        rect,
                        radius,
                        color,
                    } => {
                        ctx.set_paint(color_to_cpu(*color));
                        let path = rounded_rect_path(*rect, *radius);
                        ctx.fill_path(&bezpath_to_cpu(&path));
                    }
                    PaintOp::Image {
                        slot,
                        transform,
                        clip,
                        opacity,
                    } => {
                        let paint = match slot {
                            ImageSlot::Capture(i) => capture_paints.get(*i).ok_or_else(|| {
                                StripError::render(format!(
                                    "plan references capture {i} but only {} captures were given",
                                    capture_paints.len()
                                ))
                            })?,
                            ImageSlot::Logo => logo_paint.as_ref().ok_or_else(|| {
                                StripError::render(
                                    "plan references a logo but none is configured",
                                )
                            })?,
                        };
                        // The clip path is in canvas space, so it goes in
                        // under the identity transform before the placement
                        // transform is applied.
                        if let Some(RoundedClip { rect, radius }) = clip {
                            let path = rounded_rect_path(*rect, *radius);
                            ctx.push_clip_layer(&bezpath_to_cpu(&path));
                        }
                        if *opacity < 1.0 {
                            ctx.push_opacity_layer(*opacity);
                        }
                        ctx.set_transform(affine_to_cpu(*transform));
                        ctx.set_paint(paint.paint.clone());
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, paint.w, paint.h));
                        if *opacity < 1.0 {
                            ctx.pop_layer();
                        }
                        if clip.is_some() {
                            ctx.pop_layer();
                        }
                    }
                    PaintOp::Text {
                        content,
                        anchor,
                        size_px,
                        color,
                    } => {
                        let Some(font) = config.font.as_ref() else {
                            if !warned_missing_font {
                                tracing::warn!(
                                    "plan contains text ops but no font is configured; skipping text"
                                );
                                warned_missing_font = true;
                            }
                            continue;
                        };
                        if content.is_empty() {
                            continue;
                        }
                        this.draw_text(ctx, font, content, *anchor, *size_px, *color)?;
                    }
                }
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut out);
            Ok(())
        })?;

        let frame = FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: out.data_as_u8_slice().to_vec(),
        };
        self.out = Some(out);
        Ok(frame)
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        font: &PreparedFont,
        content: &str,
        anchor: Point,
        size_px: f64,
        color: Rgba8,
    ) -> StripResult<()> {
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let layout = self
            .text_engine
            .layout_plain(content, font, size_px as f32, brush, None)?;

        // Center the measured layout box on the anchor.
        let origin = Affine::translate((
            anchor.x - f64::from(layout.width()) / 2.0,
            anchor.y - f64::from(layout.height()) / 2.0,
        ));
        ctx.set_transform(affine_to_cpu(origin));

        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::new(font.bytes.clone()), 0);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

struct ImagePaint {
    paint: vello_cpu::Image,
    w: f64,
    h: f64,
}

fn prepared_image_paint(image: &PreparedImage) -> StripResult<ImagePaint> {
    let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
    Ok(ImagePaint {
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
        w: f64::from(image.width),
        h: f64::from(image.height),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> StripResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| StripError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| StripError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(StripError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
