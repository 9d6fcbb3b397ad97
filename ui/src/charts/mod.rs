mod board;
pub use board::ChartBoard;

mod controls;
pub use controls::{CategoryControls, PlatformControls};

mod export;
pub use export::ExportPanel;

pub mod geometry;
pub mod scene;
