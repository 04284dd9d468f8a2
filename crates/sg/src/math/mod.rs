pub mod float;
pub mod transform;

pub use glam::{Mat4, Quat, Vec3, Vec4};
