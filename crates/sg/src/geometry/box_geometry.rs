use glam::Vec3;

use super::BufferGeometry;

/// An axis aligned box centered on the origin.
///
/// Dimensions are not validated: a negative size mirrors the box (and flips
/// its winding), a zero size flattens it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// (normal, u, v) for each face, with `u x v = normal` so that the quad
/// `-u-v, +u-v, +u+v, -u+v` is counter-clockwise seen from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

impl BoxGeometry {
    pub const UNIT: Self = Self {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    };

    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// 4 vertices and 2 triangles per face, faces ordered +x, -x, +y, -y, +z, -z
    pub fn to_buffer(&self) -> BufferGeometry {
        let half = 0.5 * self.size();
        let mut geometry = BufferGeometry {
            positions: Vec::with_capacity(24),
            normals: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };

        for (normal, u, v) in FACES {
            let base = geometry.positions.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                geometry.positions.push((normal + su * u + sv * v) * half);
                geometry.normals.push(normal);
            }
            geometry
                .indices
                .extend([0, 1, 2, 0, 2, 3].map(|i| base + i));
        }

        geometry
    }
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::BoxGeometry;

    #[test]
    fn unit_box_layout() {
        let geometry = BoxGeometry::UNIT.to_buffer();
        assert_eq!(geometry.vertex_count(), 24);
        assert_eq!(geometry.indices.len(), 36);
        assert_eq!(
            geometry.bounding_box(),
            Some((Vec3::splat(-0.5), Vec3::splat(0.5)))
        );
    }

    #[test]
    fn triangles_face_outward() {
        let geometry = BoxGeometry::new(1.0, 2.0, 3.0).to_buffer();
        for (i, [a, b, c]) in geometry.triangles().enumerate() {
            let face_normal = (b - a).cross(c - a).normalize();
            let expected = geometry.normals[geometry.indices[3 * i] as usize];
            assert!(face_normal.abs_diff_eq(expected, 1e-5), "triangle {i}");
            // outward: the face center lies on the normal side of the origin
            assert!(((a + b + c) / 3.0).dot(expected) > 0.0);
        }
    }

    #[test]
    fn dimensions_scale_each_axis() {
        let (min, max) = BoxGeometry::new(2.0, 0.5, 4.0)
            .to_buffer()
            .bounding_box()
            .unwrap();
        assert_eq!(max - min, Vec3::new(2.0, 0.5, 4.0));
    }

    #[test]
    fn negative_dimensions_do_not_panic() {
        let geometry = BoxGeometry::new(-1.0, 1.0, 0.0).to_buffer();
        assert_eq!(geometry.triangles().count(), 12);
    }
}
