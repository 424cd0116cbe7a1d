//! Envelope generator.
//!
//! Order: explicit envelope > corner pair > scalar bounds > single coordinate > random.
//! The random default draws two WGS84 coordinates and normalizes them into a rectangle.

use super::coord::sample_coord;
use super::{Generator, GeneratorError};
use crate::geom::{Bounds2, Coord};
use rand::Rng;

/// Which input an `EnvelopeSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnvelopeSource {
    Explicit(Bounds2),
    Corners(Coord, Coord),
    Scalars { x1: f64, x2: f64, y1: f64, y2: f64 },
    Coordinate(Coord),
    Random,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnvelopeSpec {
    envelope: Option<Bounds2>,
    corners: Option<(Coord, Coord)>,
    scalars: Option<[f64; 4]>,
    coordinate: Option<Coord>,
}

impl EnvelopeSpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn envelope(mut self, b: Bounds2) -> Self {
        self.envelope = Some(b);
        self
    }
    pub fn corners(mut self, a: Coord, b: Coord) -> Self {
        self.corners = Some((a, b));
        self
    }
    /// Scalar bounds in `x1, x2, y1, y2` order; swapped pairs are normalized.
    pub fn bounds(mut self, x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        self.scalars = Some([x1, x2, y1, y2]);
        self
    }
    /// Zero-area envelope at `c`.
    pub fn coordinate(mut self, c: Coord) -> Self {
        self.coordinate = Some(c);
        self
    }

    pub fn source(&self) -> EnvelopeSource {
        if let Some(b) = self.envelope {
            EnvelopeSource::Explicit(b)
        } else if let Some((a, b)) = self.corners {
            EnvelopeSource::Corners(a, b)
        } else if let Some([x1, x2, y1, y2]) = self.scalars {
            EnvelopeSource::Scalars { x1, x2, y1, y2 }
        } else if let Some(c) = self.coordinate {
            EnvelopeSource::Coordinate(c)
        } else {
            EnvelopeSource::Random
        }
    }
}

impl Generator for EnvelopeSpec {
    type Output = Bounds2;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Bounds2, GeneratorError> {
        Ok(match self.source() {
            EnvelopeSource::Explicit(b) => b,
            EnvelopeSource::Corners(a, b) => Bounds2::from_corners(&a, &b),
            EnvelopeSource::Scalars { x1, x2, y1, y2 } => Bounds2::new(x1, x2, y1, y2),
            EnvelopeSource::Coordinate(c) => Bounds2::point(&c),
            EnvelopeSource::Random => {
                let a = sample_coord(rng, None);
                let b = sample_coord(rng, None);
                Bounds2::from_corners(&a, &b)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn resolution_order() {
        let env = Bounds2::new(0.0, 1.0, 0.0, 1.0);
        let a = Coord::new(5.0, 6.0);
        let b = Coord::new(-5.0, 2.0);
        let all = EnvelopeSpec::new()
            .coordinate(a)
            .bounds(9.0, 8.0, 7.0, 6.0)
            .corners(a, b)
            .envelope(env);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(all.generate(&mut rng).unwrap(), env);

        let no_env = EnvelopeSpec::new().coordinate(a).bounds(9.0, 8.0, 7.0, 6.0).corners(a, b);
        assert_eq!(
            no_env.generate(&mut rng).unwrap(),
            Bounds2::new(-5.0, 5.0, 2.0, 6.0)
        );

        let scalars = EnvelopeSpec::new().coordinate(a).bounds(9.0, 8.0, 7.0, 6.0);
        assert_eq!(
            scalars.generate(&mut rng).unwrap(),
            Bounds2::new(8.0, 9.0, 6.0, 7.0)
        );

        let single = EnvelopeSpec::new().coordinate(a).generate(&mut rng).unwrap();
        assert_eq!((single.width(), single.height()), (0.0, 0.0));
        assert!(single.contains(&a));
    }

    #[test]
    fn random_envelope_is_normalized_wgs84() {
        let mut rng = StdRng::seed_from_u64(2);
        let world = Bounds2::wgs84();
        for _ in 0..200 {
            let e = EnvelopeSpec::new().generate(&mut rng).unwrap();
            assert!(e.min_x() <= e.max_x() && e.min_y() <= e.max_y());
            assert!(world.contains_bounds_eps(&e, 0.0));
        }
    }
}
