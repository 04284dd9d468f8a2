use anyhow::{bail, Result};
use glam::{Mat4, Vec3};

use crate::math::float::FloatAsExt;

/// A pinhole camera looking down its local `-Z` axis.
///
/// Only the projection lives here, the position and orientation are the ones of
/// the [Object3D](crate::scene::Object3D) holding the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view, in degrees
    pub fov: f32,
    /// width / height of the image
    pub aspect: f32,
    /// Distance to the near clipping plane, in world unit
    pub near: f32,
    /// Distance to the far clipping plane, in world unit
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            fov: 50.0,
            aspect: 1.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32) -> Self {
        Self {
            fov,
            aspect,
            ..Default::default()
        }
    }

    /// Projection to OpenGL clip space: visible points end in $\left[-1, 1\right]^3$ after the divide
    pub fn projection_matrix(&self) -> Result<Mat4> {
        let Some(aspect) = self.aspect.into_positive() else {
            bail!("camera aspect ratio must be positive, got {}", self.aspect);
        };
        let fov = match self.fov.into_positive() {
            Some(fov) if fov < 180.0 => fov,
            _ => bail!("camera field of view must be in ]0, 180[ degrees, got {}", self.fov),
        };
        let (Some(near), Some(far)) = (self.near.into_positive(), self.far.into_positive()) else {
            bail!("camera clipping planes must be positive, got {}..{}", self.near, self.far);
        };
        if near >= far {
            bail!("camera near plane ({near}) must be closer than the far plane ({far})");
        }

        Ok(Mat4::perspective_rh_gl(fov.to_radians(), aspect, near, far))
    }
}

/// Represent a coordinate in the pixel space of a drawing buffer.
///
/// $\left(0, 0\right)$ is the top left corner, `z` keeps the normalized device depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCoord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ScreenCoord {
    /// Convert a point in normalized device coordinates, where `y` points up and
    /// the viewport spans $\left[-1, 1\right]$, into pixel space.
    pub fn from_ndc(ndc: Vec3, width: u32, height: u32) -> Self {
        Self {
            x: (ndc.x + 1.0) * 0.5 * width as f32,
            y: (1.0 - ndc.y) * 0.5 * height as f32,
            z: ndc.z,
        }
    }
}
