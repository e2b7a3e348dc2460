use tumble_common::ObjectId;
use tumble_scene::{Scene, Stage};

/// Stage inspector for developer tooling.
///
/// Provides read-only queries against the stage for logging and the CLI.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the stage.
    pub fn summary(stage: &Stage) -> StageSummary {
        let cam = stage.camera();
        let r = stage.cube_transform().rotation;
        StageSummary {
            frame: stage.frame(),
            mesh_count: stage.scene().mesh_count(),
            light_count: stage.scene().light_count(),
            cube_rotation: [r.x, r.y, r.z],
            camera_position: cam.position.to_array(),
            aspect: cam.aspect,
        }
    }

    /// Geometry, material and transform of one mesh.
    pub fn inspect_mesh(scene: &Scene, id: ObjectId) -> Option<MeshInfo> {
        scene.mesh(id).map(|mesh| {
            let g = mesh.geometry;
            MeshInfo {
                id,
                size: [g.width, g.height, g.depth],
                color: mesh.material.color.to_hex(),
                position: mesh.transform.position.to_array(),
                rotation: mesh.transform.rotation.to_array(),
            }
        })
    }

    /// All object ids in the scene, meshes first.
    pub fn list_objects(scene: &Scene) -> Vec<ObjectId> {
        scene
            .meshes()
            .keys()
            .chain(scene.lights().keys())
            .copied()
            .collect()
    }
}

/// Summary of stage state.
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub frame: u64,
    pub mesh_count: usize,
    pub light_count: usize,
    pub cube_rotation: [f32; 3],
    pub camera_position: [f32; 3],
    pub aspect: f32,
}

impl std::fmt::Display for StageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame={} meshes={} lights={} rot=({:.3}, {:.3}) camera=({:.1}, {:.1}, {:.1}) aspect={:.3}",
            self.frame,
            self.mesh_count,
            self.light_count,
            self.cube_rotation[0],
            self.cube_rotation[1],
            self.camera_position[0],
            self.camera_position[1],
            self.camera_position[2],
            self.aspect,
        )
    }
}

/// Detailed info about a single mesh.
#[derive(Debug, Clone)]
pub struct MeshInfo {
    pub id: ObjectId,
    pub size: [f32; 3],
    pub color: u32,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl std::fmt::Display for MeshInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mesh [{}] box {}x{}x{} color=#{:06X} pos=({:.2}, {:.2}, {:.2}) rot=({:.3}, {:.3}, {:.3})",
            self.id.short(),
            self.size[0],
            self.size[1],
            self.size[2],
            self.color,
            self.position[0],
            self.position[1],
            self.position[2],
            self.rotation[0],
            self.rotation[1],
            self.rotation[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_common::Viewport;
    use tumble_scene::SceneConfig;

    fn stage() -> Stage {
        Stage::bootstrap(&SceneConfig::default(), Viewport::new(800, 600)).unwrap()
    }

    #[test]
    fn summary_fresh_stage() {
        let summary = SceneInspector::summary(&stage());
        assert_eq!(summary.frame, 0);
        assert_eq!(summary.mesh_count, 1);
        assert_eq!(summary.light_count, 2);
        assert_eq!(summary.cube_rotation, [0.0, 0.0, 0.0]);
        assert_eq!(summary.camera_position, [0.0, 0.0, 5.0]);
    }

    #[test]
    fn summary_after_ticks() {
        let mut s = stage();
        for _ in 0..10 {
            s.tick();
        }
        let summary = SceneInspector::summary(&s);
        assert_eq!(summary.frame, 10);
        assert!((summary.cube_rotation[0] - 0.4).abs() < 1e-5);
        assert!(format!("{summary}").contains("rot=(0.400, 0.400)"));
    }

    #[test]
    fn inspect_cube() {
        let s = stage();
        let info = SceneInspector::inspect_mesh(s.scene(), s.cube_id()).unwrap();
        assert_eq!(info.size, [1.0, 1.0, 1.0]);
        assert_eq!(info.color, 0xFFDB99);
        assert!(info.to_string().contains("color=#FFDB99"));
    }

    #[test]
    fn inspect_mesh_not_found() {
        let s = stage();
        assert!(SceneInspector::inspect_mesh(s.scene(), ObjectId::new()).is_none());
    }

    #[test]
    fn list_objects() {
        let s = stage();
        let ids = SceneInspector::list_objects(s.scene());
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], s.cube_id());
    }
}
