//! Software rasterizer drawing a [Scene] as seen from a camera node.
//!
//! A frame is produced in two passes:
//! - the scene is traversed once, every visible triangle and segment is
//!   transformed to clip space, clipped against the near plane, culled and
//!   projected to pixel space,
//! - the drawing buffer is cut in tiles that are rasterized independently
//!   (in parallel with rayon unless asked otherwise) then copied in the frame.

mod raster;
pub mod tile;

use anyhow::{bail, ensure, Result};
use glam::{Mat4, Vec3, Vec4};
use image::{Rgba, RgbaImage};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    camera::ScreenCoord,
    color::{linear, Rgb},
    math::float::FloatAsExt,
    scene::{LineSegments, Mesh, Object3D, Scene},
    surface::{Canvas, Sizes},
    utils::log_once::{debug_once, warn_once},
};
use raster::{clip_polygon_near, clip_segment_near, ScreenLine, ScreenTriangle, TileBuffer};
use tile::{Tile, Tiler};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Multithreaded,
    Monothreaded,
}

/// What the last frame drew, plus the number of frames rendered so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("frame {frames}: {calls} draw calls, {triangles} triangles, {lines} lines")]
pub struct RenderInfo {
    pub frames: u64,
    /// Meshes and line sets that produced at least one primitive
    pub calls: u64,
    pub triangles: u64,
    pub lines: u64,
}

/// Everything the tiles need, in pixel space
#[derive(Default)]
struct Primitives {
    triangles: Vec<ScreenTriangle>,
    lines: Vec<ScreenLine>,
    draw_calls: u64,
}

fn to_screen(clip: Vec4, width: u32, height: u32) -> Option<ScreenCoord> {
    let ndc = clip.truncate() / clip.w;
    ndc.is_finite()
        .then(|| ScreenCoord::from_ndc(ndc, width, height))
}

impl Primitives {
    fn collect(scene: &Scene, view_projection: Mat4, width: u32, height: u32) -> Self {
        let mut primitives = Self::default();
        scene.traverse_visible(|object, world| {
            let mvp = view_projection * world;
            let drawn = match (object.as_mesh(), object.as_lines()) {
                (Some(mesh), _) => primitives.push_mesh(mesh, mvp, world.determinant() < 0.0, width, height),
                (_, Some(lines)) => primitives.push_lines(lines, mvp, width, height),
                _ => 0,
            };
            if drawn > 0 {
                primitives.draw_calls += 1;
            }
        });
        primitives
    }

    fn push_mesh(&mut self, mesh: &Mesh, mvp: Mat4, mirrored: bool, width: u32, height: u32) -> usize {
        let material = &mesh.material;
        if !material.visible {
            return 0;
        }
        let color = material.color.to_rgba8(1.0);
        let geometry = mesh.geometry.to_buffer();
        let before = self.triangles.len();

        for triangle in geometry.triangles() {
            let clip = triangle.map(|p| mvp * p.extend(1.0));
            let polygon = clip_polygon_near(&clip);
            if polygon.len() < 3 {
                continue;
            }
            for i in 1..polygon.len() - 1 {
                let ndc = [polygon[0], polygon[i], polygon[i + 1]].map(|v| v.truncate() / v.w);
                let signed_area = (ndc[1] - ndc[0]).truncate().perp_dot((ndc[2] - ndc[0]).truncate());
                let Some(signed_area) = signed_area.into_non_zero(f32::EPSILON) else {
                    debug_once!("skipping degenerate triangles");
                    continue;
                };
                // a mirroring transform turns counter-clockwise triangles clockwise
                let front_facing = (signed_area > 0.0) != mirrored;
                if !material.side.keeps(front_facing) {
                    continue;
                }
                if !ndc.iter().all(|v| v.is_finite()) {
                    continue;
                }
                self.triangles.push(ScreenTriangle {
                    vertices: ndc.map(|v| ScreenCoord::from_ndc(v, width, height)),
                    color,
                });
            }
        }

        self.triangles.len() - before
    }

    fn push_lines(&mut self, lines: &LineSegments, mvp: Mat4, width: u32, height: u32) -> usize {
        let material = &lines.material;
        let before = self.lines.len();

        for ([a, b], vertex_colors) in lines.geometry.segments() {
            let colors = match vertex_colors {
                Some(colors) if material.vertex_colors => colors,
                _ => [material.color; 2],
            };
            let Some(((ca, ta), (cb, tb))) = clip_segment_near(mvp * a.extend(1.0), mvp * b.extend(1.0)) else {
                continue;
            };
            let (Some(from), Some(to)) = (to_screen(ca, width, height), to_screen(cb, width, height)) else {
                continue;
            };
            self.lines.push(ScreenLine {
                from,
                to,
                colors: [colors[0].lerp(colors[1], ta), colors[0].lerp(colors[1], tb)],
            });
        }

        self.lines.len() - before
    }
}

impl TileBuffer {
    fn draw(&mut self, primitives: &Primitives) {
        log::trace!("rasterizing tile {:?}", self.tile);
        for triangle in &primitives.triangles {
            self.fill_triangle(triangle);
        }
        for line in &primitives.lines {
            self.draw_line(line);
        }
    }

    /// Copy the tile rows in the frame
    fn blit(&self, frame: &mut RgbaImage) {
        let frame_width = frame.width() as usize;
        let tile = self.tile;
        let raw: &mut [u8] = frame;
        for (row, pixels) in self.color.chunks_exact(tile.width()).enumerate() {
            let start = 4 * ((tile.y_start as usize + row) * frame_width + tile.x_start as usize);
            let bytes: &[u8] = bytemuck::cast_slice(pixels);
            raw[start..start + bytes.len()].copy_from_slice(bytes);
        }
    }
}

/// Draws scenes onto the drawing buffer of a [Canvas]
pub struct Renderer {
    canvas: Canvas,
    pixel_ratio: f32,
    clear_color: Rgb,
    clear_alpha: f32,
    pub tile_size: u32,
    pub execution_mode: ExecutionMode,
    frame: RgbaImage,
    info: RenderInfo,
}

impl Renderer {
    pub const DEFAULT_TILE_SIZE: u32 = 32;

    /// Bind a renderer to `canvas`, the drawing buffer takes the canvas size
    pub fn new(canvas: Canvas) -> Self {
        let mut this = Self {
            canvas,
            pixel_ratio: 1.0,
            clear_color: linear::BLACK,
            clear_alpha: 0.0,
            tile_size: Self::DEFAULT_TILE_SIZE,
            execution_mode: ExecutionMode::default(),
            frame: RgbaImage::new(0, 0),
            info: RenderInfo::default(),
        };
        this.reset_frame();
        this
    }

    /// Resize the canvas (and the drawing buffer), clearing it
    pub fn set_size(&mut self, width: u32, height: u32) {
        log::debug!("renderer size set to {width}x{height}");
        self.canvas.width = width;
        self.canvas.height = height;
        self.reset_frame();
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        match ratio.into_positive() {
            Some(ratio) => {
                self.pixel_ratio = ratio;
                self.reset_frame();
            }
            None => warn_once!("ignoring invalid pixel ratio {ratio}"),
        }
    }

    pub fn set_clear_color(&mut self, color: Rgb, alpha: f32) {
        self.clear_color = color;
        self.clear_alpha = alpha;
    }

    pub fn clear_color(&self) -> (Rgb, f32) {
        (self.clear_color, self.clear_alpha)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn size(&self) -> Sizes {
        self.canvas.sizes()
    }

    /// Canvas size times pixel ratio
    pub fn drawing_buffer_size(&self) -> Sizes {
        Sizes::new(
            (self.canvas.width as f32 * self.pixel_ratio).floor() as u32,
            (self.canvas.height as f32 * self.pixel_ratio).floor() as u32,
        )
    }

    pub fn info(&self) -> RenderInfo {
        self.info
    }

    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn into_frame(self) -> RgbaImage {
        self.frame
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.frame.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn reset_frame(&mut self) {
        let Sizes { width, height } = self.drawing_buffer_size();
        self.frame = RgbaImage::from_pixel(width, height, Rgba(self.clear_color.to_rgba8(self.clear_alpha)));
    }

    /// Draw one frame of `scene` as seen from `camera`.
    ///
    /// `camera` has to be a camera node. It is usually part of `scene`, a
    /// detached camera is placed with its local transform.
    pub fn render(&mut self, scene: &Scene, camera: &Object3D) -> Result<()> {
        let Some(perspective) = camera.as_camera() else {
            bail!("cannot render from a {} node, a camera is required", camera.kind);
        };
        let Sizes { width, height } = self.drawing_buffer_size();
        ensure!(width > 0 && height > 0, "drawing buffer is empty ({width}x{height})");

        let projection = perspective.projection_matrix()?;
        let camera_world = scene.world_matrix_of_object(camera).unwrap_or_else(|| {
            warn_once!("camera is not part of the scene, using its local transform");
            camera.local_matrix()
        });
        if camera_world.determinant().into_non_zero(f32::EPSILON).is_none() {
            bail!("camera transform is not invertible (zero scale?)");
        }
        let view_projection = projection * camera_world.inverse();

        let primitives = Primitives::collect(scene, view_projection, width, height);
        log::debug!(
            "camera at {}, {} triangles and {} lines to rasterize",
            camera_world.transform_point3(Vec3::ZERO),
            primitives.triangles.len(),
            primitives.lines.len()
        );

        let clear = match scene.background {
            Some(background) => background.to_rgba8(1.0),
            None => self.clear_color.to_rgba8(self.clear_alpha),
        };
        let tiles: Vec<Tile> = Tiler {
            width,
            height,
            tile_size: self.tile_size.max(1),
        }
        .into_iter()
        .collect();
        let render_tile = |tile: Tile| {
            let mut buffer = TileBuffer::new(tile, clear);
            buffer.draw(&primitives);
            buffer
        };
        let buffers: Vec<TileBuffer> = match self.execution_mode {
            ExecutionMode::Multithreaded => tiles.into_par_iter().map(render_tile).collect(),
            ExecutionMode::Monothreaded => tiles.into_iter().map(render_tile).collect(),
        };

        if self.frame.dimensions() != (width, height) {
            self.frame = RgbaImage::new(width, height);
        }
        for buffer in &buffers {
            buffer.blit(&mut self.frame);
        }

        self.info = RenderInfo {
            frames: self.info.frames + 1,
            calls: primitives.draw_calls,
            triangles: primitives.triangles.len() as u64,
            lines: primitives.lines.len() as u64,
        };
        log::info!("{}", self.info);
        Ok(())
    }
}
