//! Colorspaces a [Color](super::Color) can be expressed in.
//!
//! Hex literals (`#ff0000`, `0xff0000`) are sRGB: a non linear encoding that is
//! fine for storage and displays but not for math. Blending and interpolation
//! happen in linear RGB and the result is encoded back to sRGB on output.

pub trait Colorspace:
    Copy + Clone + Send + Sync + PartialEq + std::fmt::Debug + bytemuck::Zeroable + bytemuck::Pod
{
    fn to_linear(c: f32) -> f32;
    fn from_linear(c: f32) -> f32;
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
#[allow(non_camel_case_types)]
pub struct Linear_RGB;

impl Colorspace for Linear_RGB {
    fn to_linear(c: f32) -> f32 {
        c
    }

    fn from_linear(c: f32) -> f32 {
        c
    }
}

/// sRGB transfer function. Don't do math on it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
#[allow(non_camel_case_types)]
pub struct sRGB;

impl Colorspace for sRGB {
    fn to_linear(srgb: f32) -> f32 {
        if srgb.is_nan() {
            return 0.0;
        }
        let srgb = srgb.clamp(0.0, 1.0);
        if srgb <= 0.04045 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    }

    fn from_linear(linear: f32) -> f32 {
        if linear.is_nan() {
            return 0.0;
        }
        let linear = linear.clamp(0.0, 1.0);
        if linear < 0.0031308 {
            12.92 * linear
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}
