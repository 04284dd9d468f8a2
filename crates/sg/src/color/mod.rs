use std::{marker::PhantomData, str::FromStr};

use anyhow::{anyhow, bail};

pub mod colorspace;

use colorspace::Colorspace;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Zeroable)]
pub struct Color<S>(pub [f32; 3], PhantomData<S>)
where
    S: Colorspace;

unsafe impl<S: Colorspace> bytemuck::Pod for Color<S> {}

#[allow(non_camel_case_types)]
pub type sRgb = Color<colorspace::sRGB>;
/// Linear RGB, the color type materials and the renderer work with
pub type Rgb = Color<colorspace::Linear_RGB>;

impl<S: Colorspace> Color<S> {
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr, PhantomData)
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    pub fn to_byte_array(self) -> [u8; 3] {
        self.0.map(|c| (c.clamp(0.0, 1.0) * 255. + 0.5) as u8)
    }

    pub fn convert<T: Colorspace>(self) -> Color<T> {
        Color::from_array(self.0.map(|c| T::from_linear(S::to_linear(c))))
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        let a: Rgb = self.convert();
        let b: Rgb = other.convert();
        let mixed = [0, 1, 2].map(|i| a.0[i] + (b.0[i] - a.0[i]) * t);
        Rgb::from_array(mixed).convert()
    }
}

impl<S: Colorspace> From<[f32; 3]> for Color<S> {
    fn from(val: [f32; 3]) -> Self {
        Color::<S>::from_array(val)
    }
}

impl Rgb {
    /// Build a color from a `0xrrggbb` literal, interpreted as sRGB
    pub fn from_hex(hex: u32) -> Self {
        let bytes = [(hex >> 16) & 0xff, (hex >> 8) & 0xff, hex & 0xff];
        sRgb::from_array(bytes.map(|b| b as f32 / 255.)).convert()
    }

    /// The sRGB `0xrrggbb` value of this color
    pub fn hex(self) -> u32 {
        let [r, g, b] = self.convert::<colorspace::sRGB>().to_byte_array();
        u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
    }

    pub fn hex_string(self) -> String {
        format!("#{:06x}", self.hex())
    }

    /// sRGB bytes with the given alpha, ready to be written in a frame
    pub fn to_rgba8(self, alpha: f32) -> [u8; 4] {
        let [r, g, b] = self.convert::<colorspace::sRGB>().to_byte_array();
        [r, g, b, (alpha.clamp(0.0, 1.0) * 255. + 0.5) as u8]
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#rrggbb` or the `#rgb` shorthand
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.trim().strip_prefix('#') else {
            bail!("color {s:?} should start with '#'");
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("color {s:?} contains non hexadecimal digits");
        }
        let hex = match digits.len() {
            6 => u32::from_str_radix(digits, 16)?,
            3 => {
                let short = u32::from_str_radix(digits, 16)?;
                let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
                (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11
            }
            n => return Err(anyhow!("color {s:?} has {n} digits, expected 3 or 6")),
        };
        Ok(Self::from_hex(hex))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex_string())
    }
}

pub mod linear {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::from_array([1.0, 1.0, 1.0]);
    pub const BLACK: Rgb = Rgb::from_array([0.0, 0.0, 0.0]);
    pub const RED: Rgb = Rgb::from_array([1.0, 0.0, 0.0]);
    pub const GREEN: Rgb = Rgb::from_array([0.0, 1.0, 0.0]);
    pub const BLUE: Rgb = Rgb::from_array([0.0, 0.0, 1.0]);
}

#[cfg(test)]
mod tests {
    use super::{linear, Rgb};

    fn close(a: Rgb, b: Rgb) -> bool {
        a.0.iter().zip(b.0).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn hex_literals() {
        assert!(close(Rgb::from_hex(0xff0000), linear::RED));
        assert!(close(Rgb::from_hex(0xffffff), linear::WHITE));
        assert!(close(Rgb::from_hex(0x000000), linear::BLACK));
    }

    #[test]
    fn string_and_number_agree() {
        let s: Rgb = "#ff0000".parse().unwrap();
        assert_eq!(s, Rgb::from_hex(0xff0000));

        let upper: Rgb = "#FFF000".parse().unwrap();
        assert_eq!(upper.hex(), 0xfff000);

        let short: Rgb = "#0f0".parse().unwrap();
        assert_eq!(short.hex(), 0x00ff00);
    }

    #[test]
    fn hex_survives_linear_storage() {
        for hex in [0xfefae0, 0x00ff00, 0xfff000, 0x123456, 0x010203] {
            assert_eq!(Rgb::from_hex(hex).hex(), hex);
        }
        assert_eq!(Rgb::from_hex(0xfefae0).hex_string(), "#fefae0");
    }

    #[test]
    fn mid_grey_is_not_linear() {
        let grey = Rgb::from_hex(0x808080);
        assert!((grey.0[0] - 0.2159).abs() < 1e-3);
    }

    #[test]
    fn malformed_strings() {
        assert!("ff0000".parse::<Rgb>().is_err());
        assert!("#ff00".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#+f0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn rgba_bytes() {
        assert_eq!(Rgb::from_hex(0xfff000).to_rgba8(1.0), [255, 240, 0, 255]);
        assert_eq!(linear::BLACK.to_rgba8(0.0), [0, 0, 0, 0]);
    }
}
