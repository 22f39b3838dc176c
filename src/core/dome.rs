use crate::domain::model::{DomeResult, Grid2D, Layer, Voxel};

/// Rasterizes the upper half (`y >= 0`) of a sphere of `radius`, either solid
/// or as a shell roughly `thickness` blocks deep.
///
/// Layers are ordered by ascending `y`. Voxels are recorded in iteration
/// order: `y` outermost, then `z`, then `x`.
///
/// The inner boundary is not clamped, so a shell whose thickness reaches the
/// radius comes out solid.
pub fn rasterize_dome(radius: u32, filled: bool, thickness: u32) -> DomeResult {
    let r = i64::from(radius);
    let size = 2 * radius as usize + 1;

    let t = i64::from(thickness.max(1));
    let outer = r as f64 + 0.5;
    let inner = (r - t) as f64 + 0.5;

    let mut layers = Vec::with_capacity(radius as usize + 1);
    let mut voxels = Vec::new();

    for y in 0..=r {
        let mut grid = Grid2D::new(size);
        let mut block_count = 0;

        for z in -r..=r {
            for x in -r..=r {
                let d = ((x * x + y * y + z * z) as f64).sqrt();

                let place = if filled {
                    d <= outer
                } else {
                    d >= inner && d <= outer
                };

                if place {
                    grid.set((z + r) as usize, (x + r) as usize);
                    block_count += 1;
                    voxels.push(Voxel(x as i32, y as i32, z as i32));
                }
            }
        }

        layers.push(Layer {
            y: y as u32,
            size,
            grid,
            block_count,
            slice_radius: 0.0,
        });
    }

    for layer in &mut layers {
        layer.slice_radius = slice_radius(radius, layer.y);
    }

    let total_blocks = layers.iter().map(|layer| layer.block_count).sum();

    tracing::debug!(radius, filled, thickness, total_blocks, "rasterized dome");

    DomeResult {
        radius,
        filled,
        thickness,
        layers,
        voxels,
        total_blocks,
    }
}

fn slice_radius(radius: u32, y: u32) -> f64 {
    let r = f64::from(radius);
    let y = f64::from(y);
    (r * r - y * y).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::circle::rasterize_circle;

    fn distance(v: &Voxel) -> f64 {
        let (x, y, z) = (v.x() as f64, v.y() as f64, v.z() as f64);
        (x * x + y * y + z * z).sqrt()
    }

    #[test]
    fn test_block_totals_agree() {
        for radius in [1u32, 2, 5, 9] {
            for thickness in [1u32, 2, 4] {
                for filled in [true, false] {
                    let dome = rasterize_dome(radius, filled, thickness);
                    let layer_sum: usize = dome.layers.iter().map(|l| l.block_count).sum();
                    assert_eq!(dome.total_blocks, layer_sum);
                    assert_eq!(dome.total_blocks, dome.voxels.len());
                    assert_eq!(dome.layers.len(), radius as usize + 1);
                    for layer in &dome.layers {
                        assert_eq!(layer.block_count, layer.grid.occupied());
                    }
                }
            }
        }
    }

    #[test]
    fn test_filled_base_layer_matches_filled_circle() {
        for radius in [1u32, 3, 8, 16] {
            for thickness in [1u32, 2, 5, 10] {
                let dome = rasterize_dome(radius, true, thickness);
                let circle = rasterize_circle(radius, true, thickness);
                assert_eq!(dome.layers[0].y, 0);
                assert_eq!(dome.layers[0].grid, circle.grid, "r={} t={}", radius, thickness);
                assert_eq!(dome.layers[0].block_count, circle.count);
            }
        }
    }

    #[test]
    fn test_unit_filled_dome() {
        let dome = rasterize_dome(1, true, 1);
        assert_eq!(dome.layers.len(), 2);
        assert_eq!(dome.layers[0].grid, rasterize_circle(1, true, 1).grid);
        // the four top corners sit at sqrt(3), outside 1.5
        assert_eq!(dome.layers[1].block_count, 5);
        assert_eq!(dome.total_blocks, dome.voxels.len());
    }

    #[test]
    fn test_shell_voxels_lie_between_boundaries() {
        let dome = rasterize_dome(2, false, 1);
        assert!(!dome.voxels.is_empty());
        for voxel in &dome.voxels {
            let d = distance(voxel);
            assert!((1.5..=2.5).contains(&d), "{:?} at distance {}", voxel, d);
        }
    }

    #[test]
    fn test_voxels_recorded_in_their_layer() {
        let dome = rasterize_dome(6, false, 2);
        let r = 6;
        for voxel in &dome.voxels {
            assert!((0..=r).contains(&voxel.y()));
            let layer = &dome.layers[voxel.y() as usize];
            assert_eq!(layer.y as i32, voxel.y());
            assert!(layer.grid.get((voxel.z() + r) as usize, (voxel.x() + r) as usize));
        }
    }

    #[test]
    fn test_voxel_order_is_y_then_z_then_x() {
        let dome = rasterize_dome(5, true, 1);
        for pair in dome.voxels.windows(2) {
            let a = (pair[0].y(), pair[0].z(), pair[0].x());
            let b = (pair[1].y(), pair[1].z(), pair[1].x());
            assert!(a < b, "{:?} should precede {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_slice_radius_is_descriptive() {
        let dome = rasterize_dome(5, false, 1);
        assert_eq!(dome.layers[0].slice_radius, 5.0);
        assert_eq!(dome.layers[3].slice_radius, 4.0);
        assert_eq!(dome.layers[5].slice_radius, 0.0);
    }

    #[test]
    fn test_thick_shell_at_small_radius_is_solid() {
        // inner boundary goes negative, so every voxel inside outer qualifies
        let shell = rasterize_dome(2, false, 10);
        let solid = rasterize_dome(2, true, 10);
        assert_eq!(shell.total_blocks, solid.total_blocks);
        assert_eq!(shell.voxels, solid.voxels);
        assert_eq!(shell.thickness, 10);
        assert!(!shell.filled);
    }

    #[test]
    fn test_zero_radius_dome() {
        let dome = rasterize_dome(0, false, 1);
        assert_eq!(dome.layers.len(), 1);
        assert_eq!(dome.voxels, vec![Voxel(0, 0, 0)]);
        assert_eq!(dome.total_blocks, 1);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(rasterize_dome(10, false, 3), rasterize_dome(10, false, 3));
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(rasterize_dome(2, true, 1)).unwrap();
        for key in ["radius", "filled", "thickness", "layers", "voxels", "total_blocks"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        let layer = &value["layers"][0];
        for key in ["y", "size", "grid", "block_count", "slice_radius"] {
            assert!(layer.get(key).is_some(), "missing layer.{}", key);
        }
        assert_eq!(value["voxels"][0].as_array().map(|v| v.len()), Some(3));
    }
}
