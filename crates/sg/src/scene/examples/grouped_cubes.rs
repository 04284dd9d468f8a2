use glam::Vec3;

use super::CAMERA;
use crate::{
    camera::PerspectiveCamera,
    color::Rgb,
    geometry::BoxGeometry,
    material::MeshBasicMaterial,
    scene::{AxesHelper, Object3D, Scene},
    surface::Sizes,
};

/// A stretched mesh with an axes helper, and a transformed group of three cubes
pub struct GroupedCubesScene;

impl GroupedCubesScene {
    pub const SELECTOR: &'static str = "canvas.webgl";

    /// Cube names and colors in the group, with their x position
    pub const CUBES: [(&'static str, u32, f32); 3] =
        [("cube1", 0x00ff00, -1.0), ("cube2", 0xffffff, 1.0), ("cube3", 0xfff000, 0.0)];

    pub fn build(sizes: Sizes) -> Scene {
        let mut scene = Scene::new();

        let mesh = scene.add(
            Object3D::mesh(BoxGeometry::UNIT, MeshBasicMaterial::new(Rgb::from_hex(0xff0000))).named("mesh"),
        );
        mesh.transform.scale = Vec3::new(2.0, 0.5, 0.5);
        mesh.transform.rotation.z = 0.95;
        let mesh_position = mesh.transform.position;

        scene.add(AxesHelper::new(AxesHelper::DEFAULT_SIZE).named("axes"));

        let camera = scene.add(Object3D::camera(PerspectiveCamera::new(75.0, sizes.aspect())).named(CAMERA));
        camera.transform.position.z = 3.0;
        let camera_position = camera.transform.position;

        log::info!("mesh position length: {}", mesh_position.length());
        log::info!("mesh distance to camera: {}", mesh_position.distance(camera_position));

        let group = scene.add(Object3D::group().named("group"));
        group.transform.position.y = 1.0;
        group.transform.rotation.y = 1.0;
        group.transform.scale.y = 2.0;
        for (name, color, x) in Self::CUBES {
            let cube = Object3D::mesh(BoxGeometry::new(1.0, 1.0, 1.0), MeshBasicMaterial::new(Rgb::from_hex(color)));
            group.add(cube.named(name).at(Vec3::new(x, 0.0, 0.0)));
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::GroupedCubesScene;
    use crate::{geometry::BoxGeometry, surface::Sizes};

    fn scene() -> crate::scene::Scene {
        GroupedCubesScene::build(Sizes::new(800, 600))
    }

    #[test]
    fn group_holds_three_unit_cubes() {
        let scene = scene();
        let group = scene.object_by_name("group").unwrap();
        assert!(group.is_group());
        assert_eq!(group.children.len(), 3);

        let xs: Vec<f32> = group.children.iter().map(|c| c.transform.position.x).collect();
        assert_eq!(xs, [-1.0, 1.0, 0.0]);

        let colors: Vec<String> = group
            .children
            .iter()
            .map(|c| c.as_mesh().unwrap().material.color.hex_string())
            .collect();
        assert_eq!(colors, ["#00ff00", "#ffffff", "#fff000"]);

        for cube in &group.children {
            assert_eq!(cube.as_mesh().unwrap().geometry.as_box(), Some(&BoxGeometry::UNIT));
        }
    }

    #[test]
    fn group_transform() {
        let scene = scene();
        let transform = scene.object_by_name("group").unwrap().transform;
        assert_eq!(transform.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.rotation.y, 1.0);
        assert_eq!(transform.scale, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn mesh_sits_at_the_origin() {
        let scene = scene();
        let mesh = scene.object_by_name("mesh").unwrap();
        let camera = scene.object_by_name("camera").unwrap();
        assert_eq!(mesh.transform.position.length(), 0.0);
        assert_eq!(mesh.transform.position.distance(camera.transform.position), 3.0);
        assert_eq!(mesh.transform.scale, Vec3::new(2.0, 0.5, 0.5));
        assert_eq!(mesh.transform.rotation.z, 0.95);
    }

    #[test]
    fn counts() {
        let scene = scene();
        assert_eq!(scene.count(|o| o.as_mesh().is_some()), 4);
        assert_eq!(scene.count(|o| o.as_lines().is_some()), 1);
        assert_eq!(scene.count(|o| o.as_camera().is_some()), 1);
    }

    #[test]
    fn building_twice_gives_the_same_tree() {
        assert_eq!(scene(), scene());
    }
}
