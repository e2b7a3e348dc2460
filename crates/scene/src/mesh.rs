use serde::{Deserialize, Serialize};
use tumble_common::{Color, Transform};

/// One corner of a face: position and outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned box centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Flat-shaded triangle list: four vertices per face so every face keeps its
    /// own normal, wound counter-clockwise seen from outside.
    pub fn triangles(&self) -> (Vec<Vertex>, Vec<u16>) {
        let x = self.width * 0.5;
        let y = self.height * 0.5;
        let z = self.depth * 0.5;
        let v = |position: [f32; 3], normal: [f32; 3]| Vertex { position, normal };

        #[rustfmt::skip]
        let vertices = vec![
            // +Z face
            v([-x, -y,  z], [0.0, 0.0, 1.0]),
            v([ x, -y,  z], [0.0, 0.0, 1.0]),
            v([ x,  y,  z], [0.0, 0.0, 1.0]),
            v([-x,  y,  z], [0.0, 0.0, 1.0]),
            // -Z face
            v([ x, -y, -z], [0.0, 0.0, -1.0]),
            v([-x, -y, -z], [0.0, 0.0, -1.0]),
            v([-x,  y, -z], [0.0, 0.0, -1.0]),
            v([ x,  y, -z], [0.0, 0.0, -1.0]),
            // +X face
            v([ x, -y,  z], [1.0, 0.0, 0.0]),
            v([ x, -y, -z], [1.0, 0.0, 0.0]),
            v([ x,  y, -z], [1.0, 0.0, 0.0]),
            v([ x,  y,  z], [1.0, 0.0, 0.0]),
            // -X face
            v([-x, -y, -z], [-1.0, 0.0, 0.0]),
            v([-x, -y,  z], [-1.0, 0.0, 0.0]),
            v([-x,  y,  z], [-1.0, 0.0, 0.0]),
            v([-x,  y, -z], [-1.0, 0.0, 0.0]),
            // +Y face
            v([-x,  y,  z], [0.0, 1.0, 0.0]),
            v([ x,  y,  z], [0.0, 1.0, 0.0]),
            v([ x,  y, -z], [0.0, 1.0, 0.0]),
            v([-x,  y, -z], [0.0, 1.0, 0.0]),
            // -Y face
            v([-x, -y, -z], [0.0, -1.0, 0.0]),
            v([ x, -y, -z], [0.0, -1.0, 0.0]),
            v([ x, -y,  z], [0.0, -1.0, 0.0]),
            v([-x, -y,  z], [0.0, -1.0, 0.0]),
        ];
        let indices = (0..6u16)
            .flat_map(|face| {
                let b = face * 4;
                [b, b + 1, b + 2, b + 2, b + 3, b]
            })
            .collect();
        (vertices, indices)
    }
}

/// Lit surface: diffuse color plus the usual physically-based knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardMaterial {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

/// Geometry and material placed in the scene by a transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub geometry: BoxGeometry,
    pub material: StandardMaterial,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: BoxGeometry, material: StandardMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn unit_box_counts() {
        let (verts, indices) = BoxGeometry::default().triangles();
        assert_eq!(verts.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < verts.len()));
    }

    #[test]
    fn normals_point_outward() {
        let (verts, _) = BoxGeometry::new(2.0, 3.0, 4.0).triangles();
        for v in &verts {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert!(Vec3::from(v.position).dot(n) > 0.0);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        let (verts, indices) = BoxGeometry::default().triangles();
        for tri in indices.chunks(3) {
            let a = Vec3::from(verts[tri[0] as usize].position);
            let b = Vec3::from(verts[tri[1] as usize].position);
            let c = Vec3::from(verts[tri[2] as usize].position);
            let face_normal = (b - a).cross(c - a);
            assert!(face_normal.dot(Vec3::from(verts[tri[0] as usize].normal)) > 0.0);
        }
    }

    #[test]
    fn extents_follow_dimensions() {
        let (verts, _) = BoxGeometry::new(2.0, 4.0, 6.0).triangles();
        let max = verts
            .iter()
            .fold(Vec3::splat(f32::MIN), |m, v| m.max(Vec3::from(v.position)));
        assert_eq!(max, Vec3::new(1.0, 2.0, 3.0));
    }
}
