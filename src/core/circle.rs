use crate::domain::model::{CircleResult, Grid2D};

/// Rasterizes a disk (`filled`) or a ring of roughly `thickness` cells
/// centred on the ideal circle of `radius`.
pub fn rasterize_circle(radius: u32, filled: bool, thickness: u32) -> CircleResult {
    let r = i64::from(radius);
    let size = 2 * radius as usize + 1;
    let mut grid = Grid2D::new(size);
    let mut count = 0;

    let half = f64::from(thickness.max(1)) / 2.0;

    for z in -r..=r {
        for x in -r..=r {
            let d = ((x * x + z * z) as f64).sqrt();

            let place = if filled {
                d <= r as f64 + 0.5
            } else {
                (d - r as f64).abs() <= half
            };

            if place {
                grid.set((z + r) as usize, (x + r) as usize);
                count += 1;
            }
        }
    }

    tracing::debug!(radius, filled, thickness, count, "rasterized circle");

    CircleResult {
        radius,
        size,
        grid,
        count,
    }
}
