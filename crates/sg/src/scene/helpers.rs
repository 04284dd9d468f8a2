use glam::Vec3;

use crate::{
    color::linear,
    geometry::LineGeometry,
    material::LineBasicMaterial,
};

use super::{LineSegments, Object3D, ObjectKind};

/// Three segments from the origin along +X (red), +Y (green) and +Z (blue)
pub struct AxesHelper;

impl AxesHelper {
    pub const DEFAULT_SIZE: f32 = 1.0;

    #[allow(clippy::new_ret_no_self)]
    pub fn new(size: f32) -> Object3D {
        let mut geometry = LineGeometry::default();
        for (axis, color) in [
            (Vec3::X, linear::RED),
            (Vec3::Y, linear::GREEN),
            (Vec3::Z, linear::BLUE),
        ] {
            geometry.push_segment((Vec3::ZERO, color), (size * axis, color));
        }

        Object3D::new(ObjectKind::Lines(LineSegments {
            geometry,
            material: LineBasicMaterial {
                vertex_colors: true,
                ..Default::default()
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::AxesHelper;

    #[test]
    fn axes_have_the_requested_length() {
        let helper = AxesHelper::new(AxesHelper::DEFAULT_SIZE);
        let lines = helper.as_lines().unwrap();
        assert_eq!(lines.geometry.segment_count(), 3);
        for ([from, to], colors) in lines.geometry.segments() {
            assert_eq!(from, Vec3::ZERO);
            assert_eq!(to.length(), 1.0);
            assert!(colors.is_some());
        }
        assert!(lines.material.vertex_colors);
    }
}
