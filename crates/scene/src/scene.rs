use crate::light::Light;
use crate::mesh::Mesh;
use std::collections::BTreeMap;
use tumble_common::{Color, ObjectId};

/// Container of every mesh and light drawn in a frame.
///
/// Objects can be added and mutated in place but never removed. Uses BTreeMap
/// so iteration order does not depend on hashing.
#[derive(Debug, Clone)]
pub struct Scene {
    meshes: BTreeMap<ObjectId, Mesh>,
    lights: BTreeMap<ObjectId, Light>,
    /// Color the frame is cleared to before drawing.
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            meshes: BTreeMap::new(),
            lights: BTreeMap::new(),
            background: Color::BLACK,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh and return its id.
    pub fn add_mesh(&mut self, mesh: Mesh) -> ObjectId {
        let id = ObjectId::new();
        self.meshes.insert(id, mesh);
        tracing::debug!(id = %id.short(), "mesh added");
        id
    }

    /// Add a light and return its id.
    pub fn add_light(&mut self, light: Light) -> ObjectId {
        let id = ObjectId::new();
        self.lights.insert(id, light);
        tracing::debug!(id = %id.short(), kind = light.kind(), "light added");
        id
    }

    pub fn mesh(&self, id: ObjectId) -> Option<&Mesh> {
        self.meshes.get(&id)
    }

    pub fn mesh_mut(&mut self, id: ObjectId) -> Option<&mut Mesh> {
        self.meshes.get_mut(&id)
    }

    pub fn light(&self, id: ObjectId) -> Option<&Light> {
        self.lights.get(&id)
    }

    pub fn meshes(&self) -> &BTreeMap<ObjectId, Mesh> {
        &self.meshes
    }

    pub fn lights(&self) -> &BTreeMap<ObjectId, Light> {
        &self.lights
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{BoxGeometry, StandardMaterial};
    use glam::Vec3;

    #[test]
    fn empty_scene() {
        let scene = Scene::new();
        assert_eq!(scene.mesh_count(), 0);
        assert_eq!(scene.light_count(), 0);
        assert_eq!(scene.background, Color::BLACK);
    }

    #[test]
    fn add_and_lookup() {
        let mut scene = Scene::new();
        let m = scene.add_mesh(Mesh::new(
            BoxGeometry::default(),
            StandardMaterial::default(),
        ));
        let l = scene.add_light(Light::point(Color::WHITE, 1.0, Vec3::Y));

        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!(scene.mesh(m).is_some());
        assert!(scene.light(l).is_some());
        assert!(scene.mesh(l).is_none());
    }

    #[test]
    fn mesh_mut_updates_in_place() {
        let mut scene = Scene::new();
        let m = scene.add_mesh(Mesh::new(
            BoxGeometry::default(),
            StandardMaterial::default(),
        ));
        scene.mesh_mut(m).unwrap().transform.rotation.x = 1.0;
        assert_eq!(scene.mesh(m).unwrap().transform.rotation.x, 1.0);
        assert_eq!(scene.mesh_count(), 1);
    }
}
