use crate::{
    assets::store::CaptureSet,
    compile::plan::compile_strip,
    composition::model::StripConfig,
    foundation::error::StripResult,
    render::backend::FrameRGBA,
    render::cpu::CpuRasterizer,
};

/// Reusable compositor holding the rasterizer and its scratch surfaces.
///
/// Prefer this over [`compose_strip`] when composing repeatedly (preview
/// loops, batch export): the render context and output pixmap are allocated
/// once per canvas size and reused across calls.
#[derive(Default)]
pub struct StripCompositor {
    rasterizer: CpuRasterizer,
}

impl StripCompositor {
    /// Create a compositor with no allocated surfaces.
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip_all, fields(frame_count = config.style.frame_count, captures = captures.len()))]
    /// Compile and rasterize one strip.
    ///
    /// Pipeline:
    /// 1. [`compile_strip`](crate::compile_strip) (validates the config)
    /// 2. [`CpuRasterizer::rasterize`](crate::CpuRasterizer::rasterize)
    ///
    /// Returns a [`FrameRGBA`] of **premultiplied** RGBA8 pixels sized
    /// exactly to `config.canvas`. The same config and captures always
    /// produce bit-identical pixels.
    pub fn compose(
        &mut self,
        config: &StripConfig,
        captures: &CaptureSet,
    ) -> StripResult<FrameRGBA> {
        let plan = compile_strip(config, captures)?;
        self.rasterizer.rasterize(&plan, config, captures)
    }
}

/// Compose a single strip with a throwaway compositor.
///
/// The primary one-shot API for producing pixels from a config and captures.
pub fn compose_strip(config: &StripConfig, captures: &CaptureSet) -> StripResult<FrameRGBA> {
    StripCompositor::new().compose(config, captures)
}
