use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::PathBuf;

use super::FinalOutput;

pub struct FileOutput {
    pub path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, frame: &RgbaImage) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }

        log::info!("Saving frame to {}...", self.path.display());
        frame
            .save(&self.path)
            .with_context(|| format!("saving frame to {}", self.path.display()))
    }
}
