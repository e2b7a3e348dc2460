use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use tumble_scene::{Light, Mesh, PerspectiveCamera, Scene, Vertex};

/// Point lights beyond this count are ignored by the shader.
pub const MAX_POINT_LIGHTS: usize = 4;

/// Meshes beyond this count are not drawn.
pub const MAX_MESHES: usize = 16;

/// Stride between per-mesh uniform blocks; the default
/// `min_uniform_buffer_offset_alignment`.
pub(crate) const MESH_UNIFORM_STRIDE: u64 = 256;

/// Pick the MSAA sample count for the main pass.
pub fn sample_count(antialias: bool, four_x_supported: bool) -> u32 {
    if antialias && four_x_supported { 4 } else { 1 }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl From<Vertex> for GpuVertex {
    fn from(v: Vertex) -> Self {
        Self {
            position: v.position,
            normal: v.normal,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct PointLightUniform {
    /// xyz position, w range (0 = unbounded).
    pub position: [f32; 4],
    /// rgb color times intensity, w decay exponent.
    pub color: [f32; 4],
}

/// Camera and lights, shared by every mesh in a frame. Bind group 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    /// Summed ambient light, rgb; w unused.
    pub ambient: [f32; 4],
    /// x holds the number of active point lights.
    pub counts: [u32; 4],
    pub point_lights: [PointLightUniform; MAX_POINT_LIGHTS],
}

impl FrameUniforms {
    pub fn from_scene(scene: &Scene, camera: &PerspectiveCamera) -> Self {
        let mut ambient = Vec3::ZERO;
        let mut point_lights = [PointLightUniform::zeroed(); MAX_POINT_LIGHTS];
        let mut count = 0usize;

        for light in scene.lights().values() {
            match *light {
                Light::Ambient { color, intensity } => {
                    ambient += Vec3::from(color.to_linear().scaled(intensity));
                }
                Light::Point {
                    color,
                    intensity,
                    position,
                    distance,
                    decay,
                } => {
                    if count == MAX_POINT_LIGHTS {
                        tracing::warn!("more than {MAX_POINT_LIGHTS} point lights, extra ignored");
                        continue;
                    }
                    let [r, g, b] = color.to_linear().scaled(intensity);
                    point_lights[count] = PointLightUniform {
                        position: position.extend(distance).to_array(),
                        color: [r, g, b, decay],
                    };
                    count += 1;
                }
            }
        }

        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_position: camera.position.extend(1.0).to_array(),
            ambient: ambient.extend(0.0).to_array(),
            counts: [count as u32, 0, 0, 0],
            point_lights,
        }
    }
}

/// Per-mesh transform and material. Bind group 1, dynamic offset.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct MeshUniforms {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// Linear rgb, w unused.
    pub base_color: [f32; 4],
    /// x roughness, y metalness.
    pub material: [f32; 4],
}

impl MeshUniforms {
    /// The vertex buffer holds a unit cube, so the box dimensions are folded
    /// into the model matrix.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let g = mesh.geometry;
        let model =
            mesh.transform.matrix() * Mat4::from_scale(Vec3::new(g.width, g.height, g.depth));
        let normal_matrix = model.inverse().transpose();
        let m = mesh.material;
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
            base_color: Vec3::from(m.color.to_linear().to_array())
                .extend(1.0)
                .to_array(),
            material: [m.roughness, m.metalness, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_common::{Color, Viewport};
    use tumble_scene::{BoxGeometry, SceneConfig, Stage, StandardMaterial};

    fn stage() -> Stage {
        Stage::bootstrap(&SceneConfig::default(), Viewport::new(800, 600)).unwrap()
    }

    #[test]
    fn uniform_sizes_fit_alignment_rules() {
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<MeshUniforms>() % 16, 0);
        assert!(std::mem::size_of::<MeshUniforms>() as u64 <= MESH_UNIFORM_STRIDE);
    }

    #[test]
    fn frame_uniforms_pack_both_lights() {
        let s = stage();
        let u = FrameUniforms::from_scene(s.scene(), s.camera());
        assert_eq!(u.counts[0], 1);
        assert_eq!(u.ambient, [0.5, 0.5, 0.5, 0.0]);
        assert_eq!(u.point_lights[0].position, [25.0, 50.0, 25.0, 0.0]);
        assert_eq!(u.point_lights[0].color, [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(u.point_lights[1], PointLightUniform::zeroed());
        assert_eq!(u.camera_position, [0.0, 0.0, 5.0, 1.0]);
    }

    #[test]
    fn extra_point_lights_are_dropped() {
        let mut scene = Scene::new();
        for i in 0..(MAX_POINT_LIGHTS + 2) {
            scene.add_light(Light::point(Color::WHITE, 1.0, Vec3::splat(i as f32)));
        }
        let u = FrameUniforms::from_scene(&scene, &PerspectiveCamera::default());
        assert_eq!(u.counts[0] as usize, MAX_POINT_LIGHTS);
    }

    #[test]
    fn ambient_lights_accumulate() {
        let mut scene = Scene::new();
        scene.add_light(Light::ambient(Color::WHITE, 0.25));
        scene.add_light(Light::ambient(Color::WHITE, 0.25));
        let u = FrameUniforms::from_scene(&scene, &PerspectiveCamera::default());
        assert_eq!(u.ambient, [0.5, 0.5, 0.5, 0.0]);
        assert_eq!(u.counts[0], 0);
    }

    #[test]
    fn mesh_uniforms_follow_rotation() {
        let mut s = stage();
        let before = MeshUniforms::from_mesh(s.scene().mesh(s.cube_id()).unwrap());
        assert_eq!(before.model, Mat4::IDENTITY.to_cols_array_2d());

        s.tick();
        let after = MeshUniforms::from_mesh(s.scene().mesh(s.cube_id()).unwrap());
        assert_ne!(after.model, before.model);
        assert_eq!(after.material, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(after.base_color[0], 1.0);
    }

    #[test]
    fn mesh_uniforms_scale_unit_cube() {
        let mesh = Mesh::new(BoxGeometry::new(2.0, 3.0, 4.0), StandardMaterial::default());
        let u = MeshUniforms::from_mesh(&mesh);
        let model = Mat4::from_cols_array_2d(&u.model);
        let corner = model.transform_point3(Vec3::splat(0.5));
        assert!((corner - Vec3::new(1.0, 1.5, 2.0)).length() < 1e-6);
    }

    #[test]
    fn msaa_sample_count() {
        assert_eq!(sample_count(true, true), 4);
        assert_eq!(sample_count(true, false), 1);
        assert_eq!(sample_count(false, true), 1);
    }
}
