use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for a single rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterRequest {
    pub radius: u32,
    pub filled: bool,
    pub thickness: u32,
}

impl RasterRequest {
    pub fn new(radius: u32, filled: bool, thickness: u32) -> Self {
        Self {
            radius,
            filled,
            thickness,
        }
    }

    /// Outline circle of radius 10, one cell thick.
    pub fn circle_default() -> Self {
        Self::new(10, false, 1)
    }

    /// Hollow dome of radius 12, one block thick.
    pub fn dome_default() -> Self {
        Self::new(12, false, 1)
    }
}

/// Square occupancy grid. Row index is `z + radius`, column index is `x + radius`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid2D(Vec<Vec<u8>>);

impl Grid2D {
    pub fn new(size: usize) -> Self {
        Self(vec![vec![0; size]; size])
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|cell| *cell == 1)
    }

    pub fn set(&mut self, row: usize, col: usize) {
        self.0[row][col] = 1;
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.0
            .iter()
            .map(|row| row.iter().filter(|cell| **cell == 1).count())
            .sum()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleResult {
    pub radius: u32,
    pub size: usize,
    pub grid: Grid2D,
    pub count: usize,
}

/// One horizontal slice of a dome at height `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub y: u32,
    pub size: usize,
    pub grid: Grid2D,
    pub block_count: usize,
    /// Radius of the ideal sphere's cross-section at this height. Display only.
    pub slice_radius: f64,
}

/// An occupied block, serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voxel(pub i32, pub i32, pub i32);

impl Voxel {
    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }

    pub fn z(&self) -> i32 {
        self.2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomeResult {
    pub radius: u32,
    pub filled: bool,
    pub thickness: u32,
    pub layers: Vec<Layer>,
    pub voxels: Vec<Voxel>,
    pub total_blocks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Dome,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle => write!(f, "circle"),
            Shape::Dome => write!(f, "dome"),
        }
    }
}

/// Accepted parameter range for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeLimits {
    pub min_radius: u32,
    pub max_radius: u32,
    pub default_radius: u32,
    pub max_thickness: u32,
    pub default_thickness: u32,
}

impl ShapeLimits {
    pub const CIRCLE: ShapeLimits = ShapeLimits {
        min_radius: 1,
        max_radius: 200,
        default_radius: 10,
        max_thickness: 20,
        default_thickness: 1,
    };

    pub const DOME: ShapeLimits = ShapeLimits {
        min_radius: 2,
        max_radius: 80,
        default_radius: 12,
        max_thickness: 10,
        default_thickness: 1,
    };

    /// Built-in limits, which are also the ceilings a config file may not exceed.
    pub fn builtin(shape: Shape) -> Self {
        match shape {
            Shape::Circle => Self::CIRCLE,
            Shape::Dome => Self::DOME,
        }
    }

    /// Builds a request from raw caller values, substituting defaults for
    /// missing values and clamping everything into range.
    pub fn clamp(&self, radius: Option<i64>, thickness: Option<i64>, filled: bool) -> RasterRequest {
        let radius = radius
            .unwrap_or(i64::from(self.default_radius))
            .clamp(i64::from(self.min_radius), i64::from(self.max_radius));
        let thickness = thickness
            .unwrap_or(i64::from(self.default_thickness))
            .clamp(1, i64::from(self.max_thickness));

        // both values now fit in the u32 bounds they were clamped to
        RasterRequest::new(radius as u32, filled, thickness as u32)
    }
}
