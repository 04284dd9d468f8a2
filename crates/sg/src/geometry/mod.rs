//! Shapes, as triangle or segment lists in object space.
//!
//! Primitives ([BoxGeometry]) keep the parameters they were built from so a
//! scene can be inspected after construction; the renderer only ever sees
//! the generated [BufferGeometry].

mod box_geometry;

use std::borrow::Cow;

pub use box_geometry::BoxGeometry;
use glam::Vec3;
use itertools::Itertools;

use crate::color::Rgb;

/// Indexed triangle list.
///
/// Triangles are counter-clockwise when seen from the side their normal points to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl BufferGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the triangles, skipping the ones referencing a missing vertex
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.iter().tuples().filter_map(|(&a, &b, &c)| {
            Some([
                *self.positions.get(a as usize)?,
                *self.positions.get(b as usize)?,
                *self.positions.get(c as usize)?,
            ])
        })
    }

    /// Axis aligned bounds as `(min, max)`, `None` for an empty geometry
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Box(BoxGeometry),
    Buffer(BufferGeometry),
}

impl Geometry {
    pub fn as_box(&self) -> Option<&BoxGeometry> {
        match self {
            Geometry::Box(b) => Some(b),
            Geometry::Buffer(_) => None,
        }
    }

    pub fn to_buffer(&self) -> Cow<'_, BufferGeometry> {
        match self {
            Geometry::Box(b) => Cow::Owned(b.to_buffer()),
            Geometry::Buffer(buffer) => Cow::Borrowed(buffer),
        }
    }
}

impl From<BoxGeometry> for Geometry {
    fn from(value: BoxGeometry) -> Self {
        Geometry::Box(value)
    }
}

impl From<BufferGeometry> for Geometry {
    fn from(value: BufferGeometry) -> Self {
        Geometry::Buffer(value)
    }
}

/// Unindexed segment list: vertices `2k` and `2k + 1` form the k-th segment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    pub positions: Vec<Vec3>,
    /// Per vertex colors, used when the material asks for them
    pub colors: Vec<Rgb>,
}

impl LineGeometry {
    pub fn push_segment(&mut self, from: (Vec3, Rgb), to: (Vec3, Rgb)) {
        self.positions.extend([from.0, to.0]);
        self.colors.extend([from.1, to.1]);
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// Iterate over `(start, end)` segments with their vertex colors, if any
    pub fn segments(&self) -> impl Iterator<Item = ([Vec3; 2], Option<[Rgb; 2]>)> + '_ {
        self.positions
            .chunks_exact(2)
            .enumerate()
            .map(|(i, p)| {
                let colors = match self.colors.get(2 * i..2 * i + 2) {
                    Some([a, b]) => Some([*a, *b]),
                    _ => None,
                };
                ([p[0], p[1]], colors)
            })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{BoxGeometry, BufferGeometry, Geometry, LineGeometry};
    use crate::color::linear;

    #[test]
    fn out_of_range_indices_are_skipped() {
        let geometry = BufferGeometry {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z; 3],
            indices: vec![0, 1, 2, 0, 1, 7],
        };
        assert_eq!(geometry.triangle_count(), 2);
        assert_eq!(geometry.triangles().count(), 1);
    }

    #[test]
    fn geometry_keeps_box_parameters() {
        let geometry: Geometry = BoxGeometry::new(1.0, 2.0, 3.0).into();
        assert_eq!(geometry.as_box(), Some(&BoxGeometry::new(1.0, 2.0, 3.0)));
        assert_eq!(geometry.to_buffer().triangle_count(), 12);
    }

    #[test]
    fn segments_pair_vertices() {
        let mut lines = LineGeometry::default();
        lines.push_segment((Vec3::ZERO, linear::RED), (Vec3::X, linear::RED));
        lines.push_segment((Vec3::ZERO, linear::GREEN), (Vec3::Y, linear::BLUE));

        let segments: Vec<_> = lines.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].0, [Vec3::ZERO, Vec3::Y]);
        assert_eq!(segments[1].1, Some([linear::GREEN, linear::BLUE]));
    }
}
