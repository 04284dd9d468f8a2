use glam::{Mat4, Vec3};

use crate::{
    camera::PerspectiveCamera,
    geometry::{Geometry, LineGeometry},
    material::{LineBasicMaterial, MeshBasicMaterial},
    math::transform::Transform,
};

/// A renderable pair of geometry and material
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: MeshBasicMaterial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegments {
    pub geometry: LineGeometry,
    pub material: LineBasicMaterial,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ObjectKind {
    /// Transform only, nothing to draw
    #[display("group")]
    Group,
    #[display("mesh")]
    Mesh(Mesh),
    #[display("camera")]
    Camera(PerspectiveCamera),
    #[display("lines")]
    Lines(LineSegments),
}

/// A node of the scene graph.
///
/// A node owns its children. Its world matrix is the product of the local
/// matrices of all its ancestors, then its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Object3D {
    pub name: Option<String>,
    pub transform: Transform,
    /// An invisible node hides its whole subtree
    pub visible: bool,
    pub kind: ObjectKind,
    pub children: Vec<Object3D>,
}

impl Object3D {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            name: None,
            transform: Transform::IDENTITY,
            visible: true,
            kind,
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(ObjectKind::Group)
    }

    pub fn mesh(geometry: impl Into<Geometry>, material: MeshBasicMaterial) -> Self {
        Self::new(ObjectKind::Mesh(Mesh {
            geometry: geometry.into(),
            material,
        }))
    }

    pub fn camera(camera: PerspectiveCamera) -> Self {
        Self::new(ObjectKind::Camera(camera))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Attach `child` and return it for further configuration
    pub fn add(&mut self, child: Object3D) -> &mut Object3D {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn local_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_camera(&self) -> Option<&PerspectiveCamera> {
        match &self.kind {
            ObjectKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn as_lines(&self) -> Option<&LineSegments> {
        match &self.kind {
            ObjectKind::Lines(lines) => Some(lines),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ObjectKind::Group)
    }

    pub(super) fn find(&self, name: &str) -> Option<&Object3D> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub(super) fn find_mut(&mut self, name: &str) -> Option<&mut Object3D> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// World matrix of the first node of this subtree matching `pred`
    pub(super) fn world_matrix_where<P: Fn(&Object3D) -> bool>(
        &self,
        parent: Mat4,
        pred: &P,
    ) -> Option<Mat4> {
        let world = parent * self.local_matrix();
        if pred(self) {
            return Some(world);
        }
        self.children
            .iter()
            .find_map(|c| c.world_matrix_where(world, pred))
    }

    /// Depth first, parents before children, children in insertion order
    pub(super) fn visit<F: FnMut(&Object3D, Mat4)>(
        &self,
        parent: Mat4,
        visible_only: bool,
        f: &mut F,
    ) {
        if visible_only && !self.visible {
            return;
        }
        let world = parent * self.local_matrix();
        f(self, world);
        for child in &self.children {
            child.visit(world, visible_only, f);
        }
    }
}
