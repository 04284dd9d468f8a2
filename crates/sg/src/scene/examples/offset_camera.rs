use super::CAMERA;
use crate::{
    camera::PerspectiveCamera,
    color::Rgb,
    geometry::BoxGeometry,
    material::MeshBasicMaterial,
    scene::{Object3D, Scene},
    surface::Sizes,
};

/// The single cube seen from the side and further away
pub struct OffsetCameraScene;

impl OffsetCameraScene {
    pub const SELECTOR: &'static str = ".webgl";

    pub fn build(sizes: Sizes) -> Scene {
        let mut scene = Scene::new();

        scene.add(Object3D::mesh(BoxGeometry::UNIT, MeshBasicMaterial::new(Rgb::from_hex(0xff0000))).named("cube"));

        let camera = scene.add(Object3D::camera(PerspectiveCamera::new(75.0, sizes.aspect())).named(CAMERA));
        camera.transform.position.x = 3.0;
        camera.transform.position.z = 5.0;

        scene
    }
}
