//! The tutorial scenes.
//!
//! Each one builds its scene graph from literal values; [run] then plays the
//! end of every script: find the canvas, bind a renderer, render once.

mod grouped_cubes;
mod offset_camera;
mod single_cube;

use anyhow::{Context, Result};
pub use grouped_cubes::GroupedCubesScene;
pub use offset_camera::OffsetCameraScene;
pub use single_cube::SingleCubeScene;

use crate::{
    renderer::{ExecutionMode, Renderer},
    scene::Scene,
    surface::{Document, Sizes},
};

/// Name of the camera node in every example scene
pub const CAMERA: &str = "camera";

/// How the final render call is set up
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub sizes: Sizes,
    pub pixel_ratio: f32,
    pub tile_size: u32,
    pub execution_mode: ExecutionMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sizes: Sizes::default(),
            pixel_ratio: 1.0,
            tile_size: Renderer::DEFAULT_TILE_SIZE,
            execution_mode: ExecutionMode::default(),
        }
    }
}

/// Look the canvas up, bind a renderer to it and draw `scene` once from its camera
pub fn run(document: &Document, selector: &str, scene: &Scene, options: RenderOptions) -> Result<Renderer> {
    let canvas = document
        .query_selector(selector)?
        .with_context(|| format!("no drawing surface matches {selector:?}"))?;
    let camera = scene
        .object_by_name(CAMERA)
        .with_context(|| format!("scene has no {CAMERA:?} node"))?;

    let mut renderer = Renderer::new(canvas);
    renderer.tile_size = options.tile_size;
    renderer.execution_mode = options.execution_mode;
    renderer.set_pixel_ratio(options.pixel_ratio);
    renderer.set_size(options.sizes.width, options.sizes.height);
    renderer.render(scene, camera)?;

    Ok(renderer)
}

#[cfg(test)]
mod tests {
    use super::{run, GroupedCubesScene, OffsetCameraScene, RenderOptions, SingleCubeScene};
    use crate::surface::{Document, Sizes};

    #[test]
    fn every_example_renders_once() {
        let sizes = Sizes::new(160, 120);
        let options = RenderOptions {
            sizes,
            ..Default::default()
        };
        let document = Document::with_webgl_canvas();
        for (selector, scene) in [
            (SingleCubeScene::SELECTOR, SingleCubeScene::build(sizes)),
            (OffsetCameraScene::SELECTOR, OffsetCameraScene::build(sizes)),
            (GroupedCubesScene::SELECTOR, GroupedCubesScene::build(sizes)),
        ] {
            let renderer = run(&document, selector, &scene, options).unwrap();
            assert_eq!(renderer.info().frames, 1);
            assert_eq!(renderer.frame().dimensions(), (160, 120));
        }
    }

    #[test]
    fn missing_canvas() {
        let scene = SingleCubeScene::build(Sizes::default());
        let err = run(&Document::default(), SingleCubeScene::SELECTOR, &scene, RenderOptions::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("canvas.webgl"));
    }
}
