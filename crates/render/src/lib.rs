//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the scene; they never add, remove or move objects.
//! - One frame is one [`animate`] call: tick the stage, then draw it.
//!
//! The GPU backend lives in `tumble-render-wgpu`; [`DebugTextRenderer`]
//! draws the same scene as text for the CLI, logs and tests.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer, animate};

pub fn crate_info() -> &'static str {
    "tumble-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
