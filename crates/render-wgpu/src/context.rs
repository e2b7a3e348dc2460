use crate::error::RenderError;
use tumble_common::Viewport;

/// Surface, device and queue for one window.
pub struct GpuContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    msaa_4x: bool,
}

impl GpuContext {
    /// Create a surface for `target` and configure it to `size`.
    ///
    /// Blocks on adapter and device requests.
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: Viewport,
    ) -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(RenderError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("tumble_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let size = size.clamped();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let msaa_4x = msaa_4x_supported(surface_format, device.features());
        let backend = adapter.get_info().backend;

        tracing::info!(
            "GPU initialized with {} backend, surface {:?} {}x{}",
            backend.to_str(),
            surface_format,
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            msaa_4x,
        })
    }

    /// Reconfigure the surface for a new window size.
    pub fn resize(&mut self, size: Viewport) {
        let size = size.clamped();
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn size(&self) -> Viewport {
        Viewport::new(self.config.width, self.config.height)
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Whether the surface format can be rendered with 4x multisampling.
    pub fn supports_msaa_4x(&self) -> bool {
        self.msaa_4x
    }
}

/// Whether `format` can be multisampled 4x on a device with `features`.
///
/// The device is created without adapter-specific format features, so
/// pipeline validation only honours the guaranteed ones.
fn msaa_4x_supported(format: wgpu::TextureFormat, features: wgpu::Features) -> bool {
    format
        .guaranteed_format_features(features)
        .flags
        .sample_count_supported(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_surface_formats_guarantee_msaa() {
        for format in [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ] {
            assert!(msaa_4x_supported(format, wgpu::Features::empty()));
        }
    }

    #[test]
    fn wide_float_format_has_no_guaranteed_msaa() {
        assert!(!msaa_4x_supported(
            wgpu::TextureFormat::Rgba32Float,
            wgpu::Features::empty()
        ));
    }
}
