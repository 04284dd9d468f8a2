use glam::{Mat4, Quat, Vec3};

/// Rotation given as three angles in radians, applied in `XYZ` order.
///
/// The resulting rotation matrix is `Rx * Ry * Rz`: a point is rotated
/// around Z first, then Y, then X.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        *self = Self::new(x, y, z);
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_x(self.x) * Quat::from_rotation_y(self.y) * Quat::from_rotation_z(self.z)
    }
}

/// Local transformation of a node: translation + rotation + scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Euler::ZERO,
        scale: Vec3::ONE,
    };

    /// `T * R * S`
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation.to_quat(), self.position)
    }

    /// Apply scale then rotation then translation
    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        self.rotation.to_quat().mul_vec3(self.scale * p) + self.position
    }

    /// Apply scale then rotation but not translation !
    pub fn apply_vector(&self, v: Vec3) -> Vec3 {
        self.rotation.to_quat().mul_vec3(self.scale * v)
    }
}
