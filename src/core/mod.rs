pub mod circle;
pub mod dome;

pub use circle::rasterize_circle;
pub use dome::rasterize_dome;
pub use crate::domain::model::{CircleResult, DomeResult, Grid2D, Layer, Voxel};
