//! Hole placement.
//!
//! Model
//! - Each hole gets a sub-rectangle of the exterior envelope scaled by
//!   `HOLE_BASE_SCALE + v * u` with `u ~ U[0, 1)`. With several holes `v` grows weakly with
//!   the hole index so sizes differ across one polygon.
//! - The hole index picks a quadrant bias (`index mod 2` on X, `index / 2 mod 2` on Y) and
//!   a second and third draw spread the hole inside the remaining slack.
//! - Offset fraction plus scale never exceed 1, so the result is inside the exterior.
//!   Holes may still overlap each other when there are more than two.

use crate::geom::Bounds2;
use nalgebra::Vector2;
use rand::Rng;

/// Smallest hole size as a fraction of the exterior extent.
pub const HOLE_BASE_SCALE: f64 = 0.2;
/// Extra random size fraction on top of `HOLE_BASE_SCALE`.
pub const HOLE_VARIATION_SCALE: f64 = 0.2;

const QUADRANT_STEP: f64 = 0.3;
const EDGE_MARGIN: f64 = 0.1;
const SPREAD: f64 = 0.3;

/// Rectangle for hole `index` out of `total` inside `exterior`.
///
/// Consumes three uniform draws: size, then X spread, then Y spread.
pub fn hole_bounds<R: Rng + ?Sized>(
    rng: &mut R,
    exterior: &Bounds2,
    index: usize,
    total: usize,
) -> Bounds2 {
    let mut variation = HOLE_VARIATION_SCALE;
    if total > 1 {
        variation *= 1.0 + (index as f64 * 0.3 / total as f64);
    }
    let scale = HOLE_BASE_SCALE + variation * rng.gen::<f64>();
    let extent = exterior.extent();
    let size: Vector2<f64> = extent * scale;

    let bias = Vector2::new(
        (index % 2) as f64 * QUADRANT_STEP,
        ((index as f64 / 2.0) % 2.0) * QUADRANT_STEP,
    );
    let ux = rng.gen::<f64>();
    let uy = rng.gen::<f64>();
    let frac = Vector2::new(
        EDGE_MARGIN + bias.x + SPREAD * ux,
        EDGE_MARGIN + bias.y + SPREAD * uy,
    );
    let offset = (extent - size).component_mul(&frac);

    let min = exterior.min + offset;
    let max = min + size;
    Bounds2 { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn holes_fit_inside_exterior() {
        let ext = Bounds2::new(-10.0, 30.0, 5.0, 25.0);
        let mut rng = StdRng::seed_from_u64(17);
        for total in 1..8 {
            for index in 0..total {
                let h = hole_bounds(&mut rng, &ext, index, total);
                assert!(ext.contains_bounds_eps(&h, 1e-9), "{h:?} outside {ext:?}");
                assert!(h.width() >= ext.width() * HOLE_BASE_SCALE - 1e-9);
                assert!(h.width() < ext.width() * 0.5);
            }
        }
    }

    #[test]
    fn index_biases_the_quadrant() {
        let ext = Bounds2::new(0.0, 100.0, 0.0, 100.0);
        // Fixed draws: u = 0 everywhere.
        let mut zero = rand::rngs::mock::StepRng::new(0, 0);
        let a = hole_bounds(&mut zero, &ext, 0, 3);
        let b = hole_bounds(&mut zero, &ext, 1, 3);
        let c = hole_bounds(&mut zero, &ext, 2, 3);
        assert_eq!(a.min, Vector2::new(8.0, 8.0));
        assert!(b.min_x() > a.min_x() && b.min_y() > a.min_y());
        assert_eq!(c.min_x(), a.min_x());
        assert!(c.min_y() > b.min_y());
    }

    #[test]
    fn degenerate_exterior_gives_point_hole() {
        let ext = Bounds2::new(2.0, 2.0, 3.0, 3.0);
        let mut rng = StdRng::seed_from_u64(1);
        let h = hole_bounds(&mut rng, &ext, 0, 1);
        assert_eq!((h.width(), h.height()), (0.0, 0.0));
    }
}
