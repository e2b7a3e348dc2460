use crate::camera::PerspectiveCamera;
use crate::config::{ConfigError, SceneConfig};
use crate::light::Light;
use crate::mesh::{BoxGeometry, Mesh, StandardMaterial};
use crate::scene::Scene;
use tumble_common::{ObjectId, Transform, Viewport};

/// The bootstrapped scene, its camera, and the animation state.
///
/// Built once; afterwards [`Stage::tick`] is the only mutation.
#[derive(Debug, Clone)]
pub struct Stage {
    scene: Scene,
    camera: PerspectiveCamera,
    cube: ObjectId,
    rotation_step: f32,
    frame: u64,
    antialias: bool,
}

impl Stage {
    /// Build the scene and camera for `viewport`, then add the cube and its
    /// two lights.
    pub fn bootstrap(config: &SceneConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut scene = Scene::new();
        scene.background = config.background;

        let cam = &config.camera;
        let mut camera = PerspectiveCamera::new(cam.fov, viewport.aspect(), cam.near, cam.far);

        let size = config.cube.size;
        let material = StandardMaterial {
            color: config.cube.color,
            roughness: config.cube.roughness,
            metalness: config.cube.metalness,
        };
        let cube = scene.add_mesh(Mesh::new(
            BoxGeometry::new(size.x, size.y, size.z),
            material,
        ));

        // Move the camera back so it does not start inside the cube.
        camera.position = cam.position;

        let ambient = &config.ambient_light;
        scene.add_light(Light::ambient(ambient.color, ambient.intensity));

        let point = &config.point_light;
        scene.add_light(Light::Point {
            color: point.color,
            intensity: point.intensity,
            position: point.position,
            distance: point.distance,
            decay: point.decay,
        });

        tracing::info!(
            "stage ready: {}x{} aspect {:.3}, {} mesh, {} lights",
            viewport.width,
            viewport.height,
            camera.aspect,
            scene.mesh_count(),
            scene.light_count()
        );

        Ok(Self {
            scene,
            camera,
            cube,
            rotation_step: config.rotation_step,
            frame: 0,
            antialias: config.antialias,
        })
    }

    /// Advance the animation one frame: spin the cube about x and y.
    pub fn tick(&mut self) {
        let step = self.rotation_step;
        if let Some(mesh) = self.scene.mesh_mut(self.cube) {
            mesh.transform.rotation.x += step;
            mesh.transform.rotation.y += step;
        }
        self.frame += 1;
        tracing::trace!(frame = self.frame, "tick");
    }

    /// Follow a resized surface. Only the aspect ratio changes; a viewport
    /// with a zero side (minimized window) is ignored.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.width == 0 || viewport.height == 0 {
            tracing::debug!(?viewport, "ignoring degenerate viewport");
            return;
        }
        self.camera.aspect = viewport.aspect();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn cube_id(&self) -> ObjectId {
        self.cube
    }

    /// The cube's current transform.
    pub fn cube_transform(&self) -> Transform {
        self.scene
            .mesh(self.cube)
            .map(|m| m.transform)
            .unwrap_or_default()
    }

    /// Frames ticked since bootstrap.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_common::Color;

    fn stage() -> Stage {
        Stage::bootstrap(&SceneConfig::default(), Viewport::new(800, 600)).unwrap()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn bootstrap_adds_one_mesh_two_lights() {
        let s = stage();
        assert_eq!(s.scene().mesh_count(), 1);
        assert_eq!(s.scene().light_count(), 2);
        assert_eq!(s.frame(), 0);

        let kinds: Vec<_> = s.scene().lights().values().map(Light::kind).collect();
        assert!(kinds.contains(&"ambient"));
        assert!(kinds.contains(&"point"));
    }

    #[test]
    fn bootstrap_camera_parameters() {
        let s = stage();
        let cam = s.camera();
        assert_eq!(cam.fov, 75.0);
        assert_eq!(cam.aspect, 800.0 / 600.0);
        assert_eq!(cam.near, 0.1);
        assert_eq!(cam.far, 1000.0);
        assert_eq!(cam.position.z, 5.0);
    }

    #[test]
    fn bootstrap_cube_material() {
        let s = stage();
        let mesh = s.scene().mesh(s.cube_id()).unwrap();
        assert_eq!(mesh.material.color, Color::from_hex(0xFFDB99));
        assert_eq!(mesh.geometry, BoxGeometry::new(1.0, 1.0, 1.0));
        assert_eq!(mesh.transform, Transform::default());
    }

    #[test]
    fn rotation_grows_by_step_each_tick() {
        let mut s = stage();
        for n in 1..=100u32 {
            s.tick();
            let r = s.cube_transform().rotation;
            assert!(close(r.x, 0.04 * n as f32), "frame {n}: {}", r.x);
            assert!(close(r.y, 0.04 * n as f32), "frame {n}: {}", r.y);
            assert_eq!(r.z, 0.0);
        }
        assert_eq!(s.frame(), 100);
    }

    #[test]
    fn ten_ticks_reach_point_four() {
        let mut s = stage();
        for _ in 0..10 {
            s.tick();
        }
        let r = s.cube_transform().rotation;
        assert!(close(r.x, 0.4));
        assert!(close(r.y, 0.4));
    }

    #[test]
    fn ticks_keep_structure_and_camera() {
        let mut s = stage();
        let camera = *s.camera();
        for _ in 0..250 {
            s.tick();
        }
        assert_eq!(s.scene().mesh_count(), 1);
        assert_eq!(s.scene().light_count(), 2);
        assert_eq!(*s.camera(), camera);
        assert_eq!(s.camera().position.z, 5.0);
    }

    #[test]
    fn same_frame_count_gives_same_rotation() {
        let mut a = stage();
        let mut b = stage();
        for _ in 0..37 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.cube_transform(), b.cube_transform());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SceneConfig::default();
        config.camera.near = 0.0;
        assert!(Stage::bootstrap(&config, Viewport::new(800, 600)).is_err());
    }

    #[test]
    fn resize_changes_only_aspect() {
        let mut s = stage();
        let before = *s.camera();
        s.set_viewport(Viewport::new(1920, 1080));
        assert_eq!(s.camera().aspect, 1920.0 / 1080.0);
        assert_eq!(s.camera().position, before.position);
        assert_eq!(s.camera().fov, before.fov);
    }

    #[test]
    fn zero_sized_viewport_keeps_aspect() {
        let mut s = stage();
        for viewport in [
            Viewport::new(0, 0),
            Viewport::new(0, 600),
            Viewport::new(800, 0),
        ] {
            s.set_viewport(viewport);
            assert_eq!(s.camera().aspect, 800.0 / 600.0);
            assert!(s.camera().view_projection().is_finite());
        }
    }
}
