pub mod examples;
mod helpers;
mod object;

use glam::Mat4;

pub use helpers::AxesHelper;
pub use object::{LineSegments, Mesh, Object3D, ObjectKind};

use crate::color::Rgb;

/// Root of the scene graph.
///
/// The scene has no transform of its own: top level objects are expressed in
/// world space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Overrides the renderer clear color when set
    pub background: Option<Rgb>,
    pub children: Vec<Object3D>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object in the scene and return it for further configuration
    pub fn add(&mut self, object: Object3D) -> &mut Object3D {
        log::debug!(
            "adding {} {} to the scene",
            object.kind,
            object.name.as_deref().unwrap_or("<unnamed>")
        );
        self.children.push(object);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// First object named `name`, depth first
    pub fn object_by_name(&self, name: &str) -> Option<&Object3D> {
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn object_by_name_mut(&mut self, name: &str) -> Option<&mut Object3D> {
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Detach the first object named `name` (with its subtree) from wherever it is
    pub fn remove_by_name(&mut self, name: &str) -> Option<Object3D> {
        fn remove_from(children: &mut Vec<Object3D>, name: &str) -> Option<Object3D> {
            if let Some(index) = children.iter().position(|c| c.name.as_deref() == Some(name)) {
                return Some(children.remove(index));
            }
            children
                .iter_mut()
                .find_map(|c| remove_from(&mut c.children, name))
        }
        remove_from(&mut self.children, name)
    }

    /// Call `f` on every object with its world matrix
    pub fn traverse<F: FnMut(&Object3D, Mat4)>(&self, mut f: F) {
        for child in &self.children {
            child.visit(Mat4::IDENTITY, false, &mut f);
        }
    }

    /// Same as [Scene::traverse] but skips hidden subtrees
    pub fn traverse_visible<F: FnMut(&Object3D, Mat4)>(&self, mut f: F) {
        for child in &self.children {
            child.visit(Mat4::IDENTITY, true, &mut f);
        }
    }

    pub fn world_matrix_of(&self, name: &str) -> Option<Mat4> {
        self.children.iter().find_map(|c| {
            c.world_matrix_where(Mat4::IDENTITY, &|o: &Object3D| o.name.as_deref() == Some(name))
        })
    }

    /// World matrix of `object` if this exact object is part of the scene
    pub fn world_matrix_of_object(&self, object: &Object3D) -> Option<Mat4> {
        self.children
            .iter()
            .find_map(|c| c.world_matrix_where(Mat4::IDENTITY, &|o: &Object3D| std::ptr::eq(o, object)))
    }

    /// Number of objects in the whole tree matching `pred`
    pub fn count<P: Fn(&Object3D) -> bool>(&self, pred: P) -> usize {
        let mut count = 0;
        self.traverse(|o, _| {
            if pred(o) {
                count += 1
            }
        });
        count
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::{Object3D, Scene};
    use crate::{
        camera::PerspectiveCamera,
        color::Rgb,
        geometry::BoxGeometry,
        material::MeshBasicMaterial,
        math::transform::Euler,
    };

    fn cube(name: &str, x: f32) -> Object3D {
        Object3D::mesh(BoxGeometry::UNIT, MeshBasicMaterial::new(Rgb::from_hex(0x00ff00)))
            .named(name)
            .at(Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn add_returns_the_inserted_object() {
        let mut scene = Scene::new();
        let mesh = scene.add(cube("mesh", 0.0));
        mesh.transform.scale = Vec3::new(2.0, 0.5, 0.5);
        assert_eq!(
            scene.object_by_name("mesh").unwrap().transform.scale,
            Vec3::new(2.0, 0.5, 0.5)
        );
    }

    #[test]
    fn world_matrix_composes_parents() {
        let mut scene = Scene::new();
        let group = scene.add(Object3D::group().named("group"));
        group.transform.position.y = 1.0;
        group.transform.rotation = Euler::new(0.0, 1.0, 0.0);
        group.transform.scale.y = 2.0;
        group.add(cube("cube", -1.0));

        let group_matrix = scene.object_by_name("group").unwrap().local_matrix();
        let cube_local = scene.object_by_name("cube").unwrap().local_matrix();
        let world = scene.world_matrix_of("cube").unwrap();
        assert!(world.abs_diff_eq(group_matrix * cube_local, 1e-6));

        let center = world.transform_point3(Vec3::ZERO);
        let expected = Vec3::new(-f32::cos(1.0), 1.0, f32::sin(1.0));
        assert!(center.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn traverse_is_depth_first_in_insertion_order() {
        let mut scene = Scene::new();
        let group = scene.add(Object3D::group().named("group"));
        group.add(cube("a", 0.0)).add(cube("a.child", 0.0));
        group.add(cube("b", 0.0));
        scene.add(cube("c", 0.0));

        let mut names = Vec::new();
        scene.traverse(|o, _| names.push(o.name.clone().unwrap()));
        assert_eq!(names, ["group", "a", "a.child", "b", "c"]);
    }

    #[test]
    fn hidden_subtrees_are_skipped() {
        let mut scene = Scene::new();
        let group = scene.add(Object3D::group());
        group.visible = false;
        group.add(cube("hidden", 0.0));
        scene.add(cube("shown", 0.0));

        let mut visited = 0;
        scene.traverse_visible(|_, _| visited += 1);
        assert_eq!(visited, 1);
        assert_eq!(scene.count(|o| o.as_mesh().is_some()), 2);
    }

    #[test]
    fn lookup_by_identity() {
        let mut scene = Scene::new();
        scene.add(Object3D::camera(PerspectiveCamera::default()).at(Vec3::new(0.0, 0.0, 3.0)));
        let camera = &scene.children[0];
        let world = scene.world_matrix_of_object(camera).unwrap();
        assert!(world.abs_diff_eq(Mat4::from_translation(Vec3::new(0.0, 0.0, 3.0)), 1e-6));

        let detached = Object3D::camera(PerspectiveCamera::default());
        assert!(scene.world_matrix_of_object(&detached).is_none());
    }

    #[test]
    fn remove_nested() {
        let mut scene = Scene::new();
        scene.add(Object3D::group()).add(cube("nested", 1.0));
        let removed = scene.remove_by_name("nested").unwrap();
        assert_eq!(removed.transform.position.x, 1.0);
        assert!(scene.object_by_name("nested").is_none());
        assert!(scene.remove_by_name("nested").is_none());
    }
}
