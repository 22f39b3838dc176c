pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use app::{PlannerServer, Router};
pub use core::{rasterize_circle, rasterize_dome};
pub use domain::model::{CircleResult, DomeResult, RasterRequest, Shape, ShapeLimits};
pub use domain::ports::ConfigProvider;
pub use utils::error::{PlannerError, Result};
