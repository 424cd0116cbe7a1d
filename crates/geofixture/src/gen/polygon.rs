//! Polygon generator.
//!
//! - An explicit exterior ring (with or without explicit holes) wins over generation.
//! - Otherwise the exterior is a generated ring with `[3, 8]` unique vertices (or the
//!   configured count, raised to 3), inside the configured bounds.
//! - `holes(k)` with `k > 0` places one hole per index via `hole_bounds` on the exterior
//!   ring's envelope; each hole ring has `[3, 6]` unique vertices.
//! - Ring closure errors propagate unchanged; nothing is retried.

use super::coord::{impl_domain_builders, CoordDomain};
use super::holes::hole_bounds;
use super::primitive::MIN_RING_VERTICES;
use super::sequence::{build_sequence, LengthRange};
use super::{check_precision, Generator, GeneratorError};
use crate::geom::{close_ring, Polygon, Precision, Ring};
use rand::Rng;
use tracing::debug;

/// Default unique-vertex range for generated exteriors.
pub const DEFAULT_POLYGON_VERTICES: LengthRange = LengthRange::new_unchecked(3, 8);
/// Unique-vertex range for generated holes.
pub const DEFAULT_HOLE_VERTICES: LengthRange = LengthRange::new_unchecked(3, 6);

/// Which input a `PolygonSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolygonSource<'a> {
    Explicit {
        exterior: &'a Ring,
        holes: &'a [Ring],
    },
    Generated {
        vertices: LengthRange,
        holes: usize,
    },
}

/// Polygon generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSpec {
    pub(crate) domain: CoordDomain,
    vertices: Option<usize>,
    holes: Option<usize>,
    exterior: Option<Ring>,
    explicit_holes: Option<Vec<Ring>>,
    precision: Precision,
}

impl_domain_builders!(PolygonSpec, domain);

impl PolygonSpec {
    pub fn new() -> Self {
        Self::default()
    }
    /// Unique vertices of the generated exterior. Values below 3 become 3.
    pub fn vertices(mut self, n: usize) -> Self {
        self.vertices = Some(n.max(MIN_RING_VERTICES));
        self
    }
    /// Number of generated holes.
    pub fn holes(mut self, k: usize) -> Self {
        self.holes = Some(k);
        self
    }
    /// Explicit exterior ring, no holes unless `rings` is used.
    pub fn exterior_ring(mut self, ring: Ring) -> Self {
        self.exterior = Some(ring);
        self.explicit_holes = None;
        self
    }
    /// Explicit exterior and interior rings.
    pub fn rings(mut self, exterior: Ring, holes: Vec<Ring>) -> Self {
        self.exterior = Some(exterior);
        self.explicit_holes = Some(holes);
        self
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn vertex_range(&self) -> LengthRange {
        match self.vertices {
            Some(n) => LengthRange::new_unchecked(n, n),
            None => DEFAULT_POLYGON_VERTICES,
        }
    }

    pub fn source(&self) -> PolygonSource<'_> {
        match &self.exterior {
            Some(exterior) => PolygonSource::Explicit {
                exterior,
                holes: self.explicit_holes.as_deref().unwrap_or(&[]),
            },
            None => PolygonSource::Generated {
                vertices: self.vertex_range(),
                holes: self.holes.unwrap_or(0),
            },
        }
    }

    fn ring_in<R: Rng + ?Sized>(
        rng: &mut R,
        range: LengthRange,
        domain: &CoordDomain,
    ) -> Result<Ring, GeneratorError> {
        let seq = build_sequence(rng, range, domain, None);
        Ok(close_ring(seq.coords())?)
    }
}

impl Generator for PolygonSpec {
    type Output = Polygon;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Polygon, GeneratorError> {
        check_precision(&self.precision)?;
        let polygon = match self.source() {
            PolygonSource::Explicit { exterior, holes } => {
                debug!(holes = holes.len(), "polygon from explicit rings");
                Polygon::new(exterior.clone(), holes.to_vec())
            }
            PolygonSource::Generated { vertices, holes } => {
                self.domain.check()?;
                let exterior = Self::ring_in(rng, vertices, &self.domain)?;
                let outer = exterior.envelope();
                let mut interiors = Vec::with_capacity(holes);
                for i in 0..holes {
                    let hb = hole_bounds(rng, &outer, i, holes);
                    let domain = CoordDomain {
                        bounds: Some(hb),
                        ..self.domain
                    };
                    interiors.push(Self::ring_in(rng, DEFAULT_HOLE_VERTICES, &domain)?);
                }
                debug!(
                    vertices = exterior.len() - 1,
                    holes = interiors.len(),
                    "generated polygon"
                );
                Polygon::new(exterior, interiors)
            }
        };
        Ok(polygon.with_precision(self.precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Bounds2, Coord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Ring {
        close_ring(&[
            Coord::new(0.0, 0.0),
            Coord::new(10.0, 0.0),
            Coord::new(10.0, 10.0),
            Coord::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn default_polygon_has_no_holes_and_bounded_vertices() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let p = PolygonSpec::new().generate(&mut rng).unwrap();
            assert!(p.holes().is_empty());
            assert!(DEFAULT_POLYGON_VERTICES.contains(p.exterior().len() - 1));
        }
    }

    #[test]
    fn two_holes_are_closed_and_inside_exterior() {
        let mut rng = StdRng::seed_from_u64(2);
        let spec = PolygonSpec::new()
            .within(Bounds2::new(0.0, 50.0, 0.0, 50.0))
            .holes(2);
        for _ in 0..50 {
            let p = spec.generate(&mut rng).unwrap();
            assert_eq!(p.holes().len(), 2);
            let outer = p.exterior().envelope();
            for h in p.holes() {
                assert_eq!(h.first(), h.last());
                assert!(h.len() >= 4);
                assert!(DEFAULT_HOLE_VERTICES.contains(h.len() - 1));
                assert!(outer.contains_bounds_eps(&h.envelope(), 1e-9));
            }
        }
    }

    #[test]
    fn explicit_rings_win_over_generation_settings() {
        let hole = close_ring(&[
            Coord::new(2.0, 2.0),
            Coord::new(4.0, 2.0),
            Coord::new(3.0, 4.0),
        ])
        .unwrap();
        let spec = PolygonSpec::new()
            .vertices(12)
            .holes(3)
            .rings(square(), vec![hole.clone()]);
        assert!(matches!(spec.source(), PolygonSource::Explicit { .. }));
        let mut rng = StdRng::seed_from_u64(3);
        let p = spec.generate(&mut rng).unwrap();
        assert_eq!(p.exterior(), &square());
        assert_eq!(p.holes(), &[hole]);

        let only_ext = PolygonSpec::new().holes(2).exterior_ring(square());
        assert!(only_ext.generate(&mut rng).unwrap().holes().is_empty());
    }

    #[test]
    fn vertex_requests_are_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        let p = PolygonSpec::new().vertices(1).generate(&mut rng).unwrap();
        assert_eq!(p.exterior().len(), 4);
        let p = PolygonSpec::new().vertices(7).generate(&mut rng).unwrap();
        assert_eq!(p.exterior().len(), 8);
    }

    #[test]
    fn fixed_precision_rounds_generated_rings() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = PolygonSpec::new()
            .precision(Precision::Fixed { scale: 1.0 })
            .holes(1)
            .generate(&mut rng)
            .unwrap();
        for c in p.exterior().coords().iter().chain(p.holes()[0].coords()) {
            assert_eq!(c.x(), c.x().round());
            assert_eq!(c.y(), c.y().round());
        }
    }
}
