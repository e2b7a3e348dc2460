//! Scene graph for the tumbling cube: scene, camera, meshes, lights and the stage
//! that bootstraps them and advances the animation one frame at a time.
//!
//! # Invariants
//! - Objects are only ever added to a scene, never removed or replaced.
//! - After bootstrap a stage holds exactly one mesh and two lights.
//! - The frame tick is the only mutation after bootstrap and touches only the
//!   cube's rotation.

pub mod camera;
pub mod config;
pub mod light;
pub mod mesh;
pub mod scene;
pub mod stage;

pub use camera::PerspectiveCamera;
pub use config::{ConfigError, SceneConfig};
pub use light::Light;
pub use mesh::{BoxGeometry, Mesh, StandardMaterial, Vertex};
pub use scene::Scene;
pub use stage::Stage;
