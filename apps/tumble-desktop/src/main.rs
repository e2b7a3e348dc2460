use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tumble_common::Viewport;
use tumble_render::{Renderer, animate};
use tumble_render_wgpu::{FrameOutcome, GpuContext, WgpuRenderer};
use tumble_scene::{SceneConfig, Stage};
use tumble_tools::SceneInspector;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Frames between debug summaries in the log.
const SUMMARY_INTERVAL: u64 = 600;

#[derive(Parser)]
#[command(name = "tumble-desktop", about = "Render a rotating lit cube in a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML scene config; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial window width in physical pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Initial window height in physical pixels
    #[arg(long, default_value = "720")]
    height: u32,
}

/// Everything that exists once the window is up.
struct Running {
    window: Arc<Window>,
    renderer: WgpuRenderer,
    stage: Stage,
    occluded: bool,
    /// Zero-sized window; no surface to draw into until a real size arrives.
    minimized: bool,
}

impl Running {
    fn start(event_loop: &ActiveEventLoop, config: &SceneConfig, size: Viewport) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Tumble")
            .with_inner_size(PhysicalSize::new(size.width, size.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let inner = window.inner_size();
        let viewport = Viewport::new(inner.width, inner.height);

        let context = GpuContext::new(window.clone(), viewport)?;
        let stage = Stage::bootstrap(config, viewport)?;
        let renderer = WgpuRenderer::new(context, stage.antialias());

        tracing::info!(
            "rendering {}x{} with {} sample(s)",
            renderer.size().width,
            renderer.size().height,
            renderer.sample_count()
        );

        Ok(Self {
            window,
            renderer,
            stage,
            occluded: false,
            minimized: false,
        })
    }

    fn paused(&self) -> bool {
        self.occluded || self.minimized
    }

    fn frame(&mut self) {
        match animate(&mut self.stage, &mut self.renderer) {
            FrameOutcome::Presented => {}
            FrameOutcome::Reconfigured => tracing::debug!("surface reconfigured"),
            FrameOutcome::Skipped => tracing::debug!("frame skipped"),
        }
        if self.stage.frame() % SUMMARY_INTERVAL == 0 {
            tracing::debug!("{}", SceneInspector::summary(&self.stage));
        }
    }
}

struct App {
    config: SceneConfig,
    initial_size: Viewport,
    running: Option<Running>,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(config: SceneConfig, initial_size: Viewport) -> Self {
        Self {
            config,
            initial_size,
            running: None,
            startup_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match Running::start(event_loop, &self.config, self.initial_size) {
            Ok(running) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(running) = &mut self.running else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("closing after {} frames", running.stage.frame());
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                let viewport = Viewport::new(new_size.width, new_size.height);
                if viewport.width == 0 || viewport.height == 0 {
                    if !running.minimized {
                        tracing::debug!("window minimized, pausing");
                    }
                    running.minimized = true;
                    return;
                }
                running.renderer.resize(viewport);
                running.stage.set_viewport(viewport);
                tracing::debug!("resized to {}x{}", viewport.width, viewport.height);
                if running.minimized {
                    running.minimized = false;
                    tracing::debug!("window restored, resuming");
                    running.window.request_redraw();
                }
            }
            WindowEvent::Occluded(occluded) => {
                running.occluded = occluded;
                if occluded {
                    tracing::debug!("window hidden, pausing");
                } else {
                    tracing::debug!("window visible, resuming");
                    if !running.paused() {
                        running.window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if running.paused() {
                    return;
                }
                running.frame();
                running.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("tumble-desktop starting");

    let config = SceneConfig::load_or_default(cli.config.as_deref())?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, Viewport::new(cli.width, cli.height));
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
