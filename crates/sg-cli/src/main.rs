mod output;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use output::{FileOutput, FinalOutput};
use sg::{
    scene::examples::{self, RenderOptions},
    surface::{Document, Sizes},
    utils::timer::timed_scope_log,
};
use utils::{AvailableExecutionMode, AvailableScene};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Sizes,

    #[arg(long, default_value_t = 1.0)]
    /// Device pixel ratio, the drawing buffer is `dimensions` times this ratio
    pixel_ratio: f32,

    #[arg(short, long, default_value = "output/frame.png")]
    /// Where to save the frame, the image format is deduced from the extension
    output: PathBuf,

    #[arg(long, default_value_t = 32)]
    tile_size: u32,

    #[arg(short, long, value_enum, default_value_t)]
    execution_mode: AvailableExecutionMode,

    #[arg(long)]
    /// CSS selector of the canvas to draw on. Defaults to the one the scene uses
    selector: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("building scene {:?}", args.scene);
    let scene = args.scene.build(args.dimensions);
    let document = Document::with_webgl_canvas();
    let selector = args.selector.as_deref().unwrap_or(args.scene.selector());

    let options = RenderOptions {
        sizes: args.dimensions,
        pixel_ratio: args.pixel_ratio,
        tile_size: args.tile_size,
        execution_mode: args.execution_mode.into(),
    };
    let renderer = timed_scope_log("render", || examples::run(&document, selector, &scene, options)).res?;

    let outputs: Vec<Box<dyn FinalOutput>> = vec![Box::new(FileOutput::new(args.output))];
    for output in outputs {
        output.commit(renderer.frame())?;
    }

    log::info!("Done");
    Ok(())
}
