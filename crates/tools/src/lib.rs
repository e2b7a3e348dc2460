//! Developer Tooling: read-only stage and scene inspection.
//!
//! # Invariants
//! - Inspection never mutates the stage.

mod inspector;

pub use inspector::{MeshInfo, SceneInspector, StageSummary};

pub fn crate_info() -> &'static str {
    "tumble-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
