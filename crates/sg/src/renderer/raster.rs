//! Scan conversion of projected primitives into tile buffers.
//!
//! Everything here works on one [Tile] at a time so tiles can be filled
//! independently; a primitive overlapping several tiles is drawn once per tile,
//! clipped to the tile bounds.

use glam::Vec4;

use super::tile::Tile;
use crate::{camera::ScreenCoord, color::Rgb};

/// A triangle in pixel space, ready to be filled
#[derive(Debug, Clone, Copy)]
pub struct ScreenTriangle {
    pub vertices: [ScreenCoord; 3],
    pub color: [u8; 4],
}

#[derive(Debug, Clone, Copy)]
pub struct ScreenLine {
    pub from: ScreenCoord,
    pub to: ScreenCoord,
    pub colors: [Rgb; 2],
}

/// Signed distance to the near plane in clip space, positive in front of it
fn near_distance(v: Vec4) -> f32 {
    v.z + v.w
}

/// Sutherland-Hodgman against the near plane.
///
/// Winding is preserved. Returns an empty polygon when everything is behind the plane.
pub fn clip_polygon_near(polygon: &[Vec4]) -> Vec<Vec4> {
    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let (dc, dn) = (near_distance(current), near_distance(next));
        if dc >= 0.0 {
            clipped.push(current);
        }
        if (dc >= 0.0) != (dn >= 0.0) {
            clipped.push(current.lerp(next, dc / (dc - dn)));
        }
    }
    clipped
}

/// Clip a segment against the near plane, returning the kept part and its
/// parameters along the original segment
pub fn clip_segment_near(a: Vec4, b: Vec4) -> Option<((Vec4, f32), (Vec4, f32))> {
    let (da, db) = (near_distance(a), near_distance(b));
    match (da >= 0.0, db >= 0.0) {
        (true, true) => Some(((a, 0.0), (b, 1.0))),
        (false, false) => None,
        (a_in, _) => {
            let t = da / (da - db);
            let p = a.lerp(b, t);
            if a_in {
                Some(((a, 0.0), (p, t)))
            } else {
                Some(((p, t), (b, 1.0)))
            }
        }
    }
}

/// Liang-Barsky: the `[t0, t1]` part of `from -> to` inside the given rectangle
fn clip_segment_rect(
    from: ScreenCoord,
    to: ScreenCoord,
    (x_min, x_max): (f32, f32),
    (y_min, y_max): (f32, f32),
) -> Option<(f32, f32)> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
    for (p, q) in [
        (-dx, from.x - x_min),
        (dx, x_max - from.x),
        (-dy, from.y - y_min),
        (dy, y_max - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((t0, t1))
}

/// Twice the signed area of (a, b, p)
fn edge(a: ScreenCoord, b: ScreenCoord, p: (f32, f32)) -> f32 {
    (b.x - a.x) * (p.1 - a.y) - (b.y - a.y) * (p.0 - a.x)
}

/// Color and depth of one tile
pub struct TileBuffer {
    pub tile: Tile,
    pub color: Vec<[u8; 4]>,
    pub depth: Vec<f32>,
}

impl TileBuffer {
    pub fn new(tile: Tile, clear: [u8; 4]) -> Self {
        Self {
            tile,
            color: vec![clear; tile.len()],
            depth: vec![f32::INFINITY; tile.len()],
        }
    }

    /// Depth tested write, `z` is the normalized device depth
    fn write(&mut self, x: u32, y: u32, z: f32, color: [u8; 4]) {
        if !(-1.0..=1.0).contains(&z) {
            return;
        }
        let index = self.tile.index_of(x, y);
        if z < self.depth[index] {
            self.depth[index] = z;
            self.color[index] = color;
        }
    }

    /// Pixels whose center lies inside the triangle, both windings accepted
    pub fn fill_triangle(&mut self, triangle: &ScreenTriangle) {
        let [a, b, c] = triangle.vertices;
        let area = edge(a, b, (c.x, c.y));
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let tile = self.tile;
        let (min_x, max_x) = (a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x));
        let (min_y, max_y) = (a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y));
        let x0 = min_x.floor().clamp(tile.x_start as f32, tile.x_end as f32) as u32;
        let x1 = max_x.ceil().clamp(tile.x_start as f32, tile.x_end as f32) as u32;
        let y0 = min_y.floor().clamp(tile.y_start as f32, tile.y_end as f32) as u32;
        let y1 = max_y.ceil().clamp(tile.y_start as f32, tile.y_end as f32) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let z = w0 * a.z + w1 * b.z + w2 * c.z;
                    self.write(x, y, z, triangle.color);
                }
            }
        }
    }

    /// DDA restricted to the part of the line crossing this tile
    pub fn draw_line(&mut self, line: &ScreenLine) {
        let tile = self.tile;
        let (from, to) = (line.from, line.to);
        let Some((t0, t1)) = clip_segment_rect(
            from,
            to,
            (tile.x_start as f32, tile.x_end as f32),
            (tile.y_start as f32, tile.y_end as f32),
        ) else {
            return;
        };

        // samples are placed along the whole line so that the result does not depend on the tiling
        let (dx, dy, dz) = (to.x - from.x, to.y - from.y, to.z - from.z);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
        let (first, last) = ((t0 * steps).floor() as u32, (t1 * steps).ceil() as u32);
        let single_color = line.colors[0] == line.colors[1];
        for i in first..=last {
            let t = i as f32 / steps;
            let (x, y) = ((from.x + t * dx).floor(), (from.y + t * dy).floor());
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            if !tile.contains(x, y) {
                continue;
            }
            let color = if single_color {
                line.colors[0]
            } else {
                line.colors[0].lerp(line.colors[1], t)
            };
            self.write(x, y, from.z + t * dz, color.to_rgba8(1.0));
        }
    }
}
