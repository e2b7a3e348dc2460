//! wgpu render backend for the tumble scene.
//!
//! Draws every mesh in a [`tumble_scene::Scene`] with a lit standard-material
//! shader: one ambient term plus up to [`MAX_POINT_LIGHTS`] point lights.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Surface, depth and multisample targets always share the viewport size.
//! - Construction failures surface as [`RenderError`], never panics.

mod context;
mod error;
mod gpu;
mod shaders;
mod surface;
mod uniforms;

pub use context::GpuContext;
pub use error::RenderError;
pub use gpu::ScenePipeline;
pub use surface::{FrameOutcome, WgpuRenderer};
pub use uniforms::{MAX_MESHES, MAX_POINT_LIGHTS, sample_count};
