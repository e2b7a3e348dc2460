use crate::context::GpuContext;
use crate::gpu::ScenePipeline;
use crate::uniforms::sample_count;
use tumble_common::Viewport;
use tumble_render::Renderer;
use tumble_scene::{PerspectiveCamera, Scene};

/// What happened to a frame handed to the window surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The surface was lost or outdated and has been reconfigured.
    Reconfigured,
    /// The surface could not provide a texture this frame.
    Skipped,
}

/// Draws a scene into a window surface and presents it.
pub struct WgpuRenderer {
    context: GpuContext,
    pipeline: ScenePipeline,
}

impl WgpuRenderer {
    pub fn new(context: GpuContext, antialias: bool) -> Self {
        let samples = sample_count(antialias, context.supports_msaa_4x());
        if antialias && samples == 1 {
            tracing::warn!("4x MSAA unsupported for {:?}, rendering without it", context.format());
        }
        let pipeline = ScenePipeline::new(&context.device, context.format(), context.size(), samples);
        Self { context, pipeline }
    }

    /// Follow a window resize: surface, depth and MSAA targets.
    pub fn resize(&mut self, size: Viewport) {
        self.context.resize(size);
        self.pipeline.resize(&self.context.device, self.context.size());
    }

    pub fn sample_count(&self) -> u32 {
        self.pipeline.sample_count()
    }
}

impl Renderer for WgpuRenderer {
    type Output = FrameOutcome;

    fn size(&self) -> Viewport {
        self.context.size()
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> FrameOutcome {
        let output = match self.context.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return FrameOutcome::Reconfigured;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return FrameOutcome::Skipped;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline.draw(
            &self.context.device,
            &self.context.queue,
            &view,
            scene,
            camera,
        );

        output.present();
        FrameOutcome::Presented
    }
}
