use glam::Vec3;

use super::CAMERA;
use crate::{
    camera::PerspectiveCamera,
    color::Rgb,
    geometry::BoxGeometry,
    material::MeshBasicMaterial,
    scene::{Object3D, Scene},
    surface::Sizes,
};

/// A red cube in front of the camera
pub struct SingleCubeScene;

impl SingleCubeScene {
    pub const SELECTOR: &'static str = "canvas.webgl";

    pub fn build(sizes: Sizes) -> Scene {
        let mut scene = Scene::new();

        let material = MeshBasicMaterial::new(Rgb::from_hex(0xff0000));
        scene.add(Object3D::mesh(BoxGeometry::new(1.0, 1.0, 1.0), material).named("cube"));

        let camera = scene.add(Object3D::camera(PerspectiveCamera::new(75.0, sizes.aspect())).named(CAMERA));
        camera.transform.position = Vec3::new(0.0, 0.0, 3.0);

        scene
    }
}
