mod file_output;

use anyhow::Result;
pub use file_output::FileOutput;
use image::RgbaImage;

pub trait FinalOutput {
    fn commit(&self, frame: &RgbaImage) -> Result<()>;
}
