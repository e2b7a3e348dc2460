use tumble_common::Viewport;
use tumble_scene::{Light, PerspectiveCamera, Scene, Stage};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a scene through a camera and produces output. It never
/// mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Size of the surface this renderer draws into.
    fn size(&self) -> Viewport;

    /// Render one frame of `scene` as seen by `camera`.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Self::Output;
}

/// One frame of the render loop: advance the animation, then redraw.
pub fn animate<R: Renderer>(stage: &mut Stage, renderer: &mut R) -> R::Output {
    stage.tick();
    renderer.render(stage.scene(), stage.camera())
}

/// Text renderer for headless runs.
///
/// Produces a human-readable dump of the scene and camera. Counts the frames
/// it has drawn.
#[derive(Debug)]
pub struct DebugTextRenderer {
    size: Viewport,
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new(size: Viewport) -> Self {
        Self { size, frames: 0 }
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn size(&self) -> Viewport {
        self.size
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> String {
        self.frames += 1;

        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame {} ({}x{}, background {}) ===\n",
            self.frames, self.size.width, self.size.height, scene.background
        ));
        out.push_str(&format!(
            "Camera: pos=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.3} near={} far={}\n",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.fov,
            camera.aspect,
            camera.near,
            camera.far
        ));

        out.push_str(&format!("Meshes: {}\n", scene.mesh_count()));
        for (id, mesh) in scene.meshes() {
            let g = mesh.geometry;
            let r = mesh.transform.rotation;
            out.push_str(&format!(
                "  [{}] box {}x{}x{} color={} rot=({:.4}, {:.4}, {:.4})\n",
                id.short(),
                g.width,
                g.height,
                g.depth,
                mesh.material.color,
                r.x,
                r.y,
                r.z
            ));
        }

        out.push_str(&format!("Lights: {}\n", scene.light_count()));
        for (id, light) in scene.lights() {
            match light {
                Light::Ambient { color, intensity } => {
                    out.push_str(&format!(
                        "  [{}] ambient color={color} intensity={intensity}\n",
                        id.short()
                    ));
                }
                Light::Point {
                    color,
                    intensity,
                    position,
                    ..
                } => {
                    out.push_str(&format!(
                        "  [{}] point color={color} intensity={intensity} pos=({:.1}, {:.1}, {:.1})\n",
                        id.short(),
                        position.x,
                        position.y,
                        position.z
                    ));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_scene::SceneConfig;

    fn stage(viewport: Viewport) -> Stage {
        Stage::bootstrap(&SceneConfig::default(), viewport).unwrap()
    }

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = Scene::new();
        let mut renderer = DebugTextRenderer::new(Viewport::new(320, 240));
        let output = renderer.render(&scene, &PerspectiveCamera::default());

        assert!(output.contains("Frame 1"));
        assert!(output.contains("Meshes: 0"));
        assert!(output.contains("Lights: 0"));
    }

    #[test]
    fn debug_renderer_lists_cube_and_lights() {
        let s = stage(Viewport::new(800, 600));
        let mut renderer = DebugTextRenderer::new(Viewport::new(800, 600));
        let output = renderer.render(s.scene(), s.camera());

        assert!(output.contains("Meshes: 1"));
        assert!(output.contains("Lights: 2"));
        assert!(output.contains("color=#FFDB99"));
        assert!(output.contains("ambient color=#FFFFFF intensity=0.5"));
        assert!(output.contains("pos=(25.0, 50.0, 25.0)"));
        assert!(output.contains("pos=(0.0, 0.0, 5.0) fov=75"));
    }

    #[test]
    fn debug_renderer_writes_one_line_per_entry() {
        let s = stage(Viewport::new(800, 600));
        let mut renderer = DebugTextRenderer::new(Viewport::new(800, 600));
        let output = renderer.render(s.scene(), s.camera());

        assert!(output.ends_with('\n'));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("=== Frame 1 (800x600"));
        assert!(lines[1].starts_with("Camera: "));
        assert_eq!(lines[2], "Meshes: 1");
        assert!(lines[3].starts_with("  ["));
        assert_eq!(lines[4], "Lights: 2");
    }

    #[test]
    fn renderer_size_matches_viewport() {
        let viewport = Viewport::new(800, 600);
        let s = stage(viewport);
        let renderer = DebugTextRenderer::new(viewport);
        assert_eq!(renderer.size(), viewport);
        assert_eq!(s.camera().aspect, renderer.size().aspect());
    }

    #[test]
    fn animate_ticks_then_draws() {
        let mut s = stage(Viewport::new(800, 600));
        let mut renderer = DebugTextRenderer::new(Viewport::new(800, 600));

        let first = animate(&mut s, &mut renderer);
        assert_eq!(s.frame(), 1);
        assert!(first.contains("rot=(0.0400, 0.0400, 0.0000)"));

        for _ in 0..9 {
            animate(&mut s, &mut renderer);
        }
        assert_eq!(renderer.frames(), 10);
        let r = s.cube_transform().rotation;
        assert!((r.x - 0.4).abs() < 1e-5);
        assert!((r.y - 0.4).abs() < 1e-5);
    }

    #[test]
    fn animate_keeps_scene_structure() {
        let mut s = stage(Viewport::new(640, 480));
        let mut renderer = DebugTextRenderer::new(Viewport::new(640, 480));
        for _ in 0..60 {
            let out = animate(&mut s, &mut renderer);
            assert!(out.contains("Meshes: 1"));
            assert!(out.contains("Lights: 2"));
        }
        assert_eq!(s.camera().position.z, 5.0);
    }
}
