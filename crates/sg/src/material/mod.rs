use crate::color::{linear, Rgb};

/// Which faces of a triangle get drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise triangles, as seen from the camera
    #[default]
    Front,
    Back,
    Double,
}

impl Side {
    /// Whether a triangle with the given orientation on screen has to be drawn
    pub fn keeps(self, front_facing: bool) -> bool {
        match self {
            Side::Front => front_facing,
            Side::Back => !front_facing,
            Side::Double => true,
        }
    }
}

/// Flat shading: every fragment gets `color`, lights are ignored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBasicMaterial {
    pub color: Rgb,
    pub visible: bool,
    pub side: Side,
}

impl MeshBasicMaterial {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }
}

impl Default for MeshBasicMaterial {
    fn default() -> Self {
        Self {
            color: linear::WHITE,
            visible: true,
            side: Side::Front,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBasicMaterial {
    pub color: Rgb,
    /// Use the geometry colors instead of `color`
    pub vertex_colors: bool,
}

impl Default for LineBasicMaterial {
    fn default() -> Self {
        Self {
            color: linear::WHITE,
            vertex_colors: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MeshBasicMaterial, Side};
    use crate::color::Rgb;

    #[test]
    fn defaults() {
        let material = MeshBasicMaterial::new(Rgb::from_hex(0xff0000));
        assert!(material.visible);
        assert_eq!(material.side, Side::Front);
        assert_eq!(material.color.hex(), 0xff0000);
    }

    #[test]
    fn culling() {
        assert!(Side::Front.keeps(true));
        assert!(!Side::Front.keeps(false));
        assert!(Side::Back.keeps(false));
        assert!(Side::Double.keeps(false) && Side::Double.keeps(true));
    }
}
