use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tumble_common::Viewport;
use tumble_render::{DebugTextRenderer, Renderer, animate};
use tumble_scene::{SceneConfig, Stage};
use tumble_tools::SceneInspector;

#[derive(Parser)]
#[command(name = "tumble-cli", about = "Headless tooling for the tumble scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML scene config; defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and a summary of the bootstrapped stage
    Info,
    /// Step frames through the text renderer
    Run {
        /// Number of frames to step
        #[arg(short, long, default_value = "10")]
        frames: u64,
        /// Viewport width
        #[arg(long, default_value = "800")]
        width: u32,
        /// Viewport height
        #[arg(long, default_value = "600")]
        height: u32,
        /// Also print every K-th frame (0 prints only the last)
        #[arg(long, default_value = "0")]
        every: u64,
    },
    /// Print the effective scene config as YAML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SceneConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("tumble-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", tumble_render::crate_info());
            println!("tools: {}", tumble_tools::crate_info());

            let stage = Stage::bootstrap(&config, Viewport::new(800, 600))?;
            println!("stage: {}", SceneInspector::summary(&stage));
            for id in SceneInspector::list_objects(stage.scene()) {
                if let Some(info) = SceneInspector::inspect_mesh(stage.scene(), id) {
                    println!("  {info}");
                } else if let Some(light) = stage.scene().light(id) {
                    println!(
                        "  Light [{}] {} color={} intensity={}",
                        id.short(),
                        light.kind(),
                        light.color(),
                        light.intensity()
                    );
                }
            }
        }
        Commands::Run {
            frames,
            width,
            height,
            every,
        } => {
            let viewport = Viewport::new(width, height);
            let mut stage = Stage::bootstrap(&config, viewport)?;
            let mut renderer = DebugTextRenderer::new(viewport);
            tracing::debug!(
                "stepping {frames} frames at {}x{}",
                renderer.size().width,
                renderer.size().height
            );

            let mut last = None;
            for _ in 0..frames {
                let out = animate(&mut stage, &mut renderer);
                if every > 0 && stage.frame() % every == 0 && stage.frame() != frames {
                    print!("{out}");
                }
                last = Some(out);
            }

            match last {
                Some(out) => print!("{out}"),
                None => print!("{}", renderer.render(stage.scene(), stage.camera())),
            }
            println!("{}", SceneInspector::summary(&stage));
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
