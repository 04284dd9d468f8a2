use clap::ValueEnum;
use sg::{
    renderer::ExecutionMode,
    scene::{
        examples::{GroupedCubesScene, OffsetCameraScene, SingleCubeScene},
        Scene,
    },
    surface::Sizes,
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    SingleCube,
    OffsetCamera,
    #[default]
    GroupedCubes,
}

impl AvailableScene {
    pub fn build(self, sizes: Sizes) -> Scene {
        match self {
            AvailableScene::SingleCube => SingleCubeScene::build(sizes),
            AvailableScene::OffsetCamera => OffsetCameraScene::build(sizes),
            AvailableScene::GroupedCubes => GroupedCubesScene::build(sizes),
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            AvailableScene::SingleCube => SingleCubeScene::SELECTOR,
            AvailableScene::OffsetCamera => OffsetCameraScene::SELECTOR,
            AvailableScene::GroupedCubes => GroupedCubesScene::SELECTOR,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AvailableExecutionMode {
    #[default]
    Multithreaded,
    Monothreaded,
}

impl From<AvailableExecutionMode> for ExecutionMode {
    fn from(val: AvailableExecutionMode) -> Self {
        match val {
            AvailableExecutionMode::Multithreaded => ExecutionMode::Multithreaded,
            AvailableExecutionMode::Monothreaded => ExecutionMode::Monothreaded,
        }
    }
}
