pub mod camera;
pub mod color;
pub mod geometry;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod utils;
