//! Primitive shapes: point, line string, ring, segment, triangle.
//!
//! - Point: explicit coordinate > bounds > default domain.
//! - Line: open sequence, length `[2, 10]` unless configured; same length validation as
//!   `SequenceSpec`.
//! - Ring: vertex count counts unique vertices (the closing copy is extra), default
//!   `[3, 9]`. Requests below 3 are raised to 3 without an error.

use super::coord::{impl_domain_builders, CoordDomain};
use super::sequence::{build_sequence, LengthRange, SequenceSpec};
use super::{check_precision, first_present, ConfigError, Generator, GeneratorError};
use crate::geom::{close_ring, Bounds2, Coord, CoordSeq, Precision, Ring, Segment, Triangle};
use rand::Rng;

/// Default line-string length.
pub const DEFAULT_LINE_LENGTH: LengthRange = LengthRange::new_unchecked(2, 10);
/// Default unique-vertex range for rings.
pub const DEFAULT_RING_VERTICES: LengthRange = LengthRange::new_unchecked(3, 9);
/// Fewest unique vertices a generated ring may have.
pub const MIN_RING_VERTICES: usize = 3;

/// Which input a `PointSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointSource {
    Explicit(Coord),
    Bounded(Bounds2),
    Default,
}

/// Point generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSpec {
    pub(crate) domain: CoordDomain,
    coordinate: Option<Coord>,
}

impl_domain_builders!(PointSpec, domain);

impl PointSpec {
    pub fn new() -> Self {
        Self::default()
    }
    /// Fixed longitude/latitude pair.
    pub fn coordinate(mut self, x: f64, y: f64) -> Self {
        self.coordinate = Some(Coord::new(x, y));
        self
    }
    /// Fixed coordinate, Z and M included.
    pub fn coord(mut self, c: Coord) -> Self {
        self.coordinate = Some(c);
        self
    }

    pub fn source(&self) -> PointSource {
        first_present([
            self.coordinate.map(PointSource::Explicit),
            self.domain.bounds.map(PointSource::Bounded),
        ])
        .unwrap_or(PointSource::Default)
    }
}

impl Generator for PointSpec {
    type Output = Coord;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, GeneratorError> {
        match self.source() {
            PointSource::Explicit(c) => Ok(c),
            PointSource::Bounded(_) | PointSource::Default => {
                self.domain.check()?;
                Ok(self.domain.sample(rng))
            }
        }
    }
}

/// Open line-string generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineSpec {
    seq: SequenceSpec,
    precision: Precision,
}

impl_domain_builders!(LineSpec, seq.domain);

impl LineSpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn length(mut self, n: usize) -> Result<Self, ConfigError> {
        self.seq = self.seq.length(n)?;
        Ok(self)
    }
    pub fn length_between(mut self, min: usize, max: usize) -> Result<Self, ConfigError> {
        self.seq = self.seq.length_between(min, max)?;
        Ok(self)
    }
    pub fn coordinates(mut self, coords: impl Into<CoordSeq>) -> Result<Self, ConfigError> {
        self.seq = self.seq.coordinates(coords)?;
        Ok(self)
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
    pub fn length_range(&self) -> LengthRange {
        self.seq.length.unwrap_or(DEFAULT_LINE_LENGTH)
    }
}

impl Generator for LineSpec {
    type Output = CoordSeq;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CoordSeq, GeneratorError> {
        self.seq.domain.check()?;
        check_precision(&self.precision)?;
        let seq = build_sequence(
            rng,
            self.length_range(),
            &self.seq.domain,
            self.seq.coordinates.as_ref(),
        );
        Ok(seq.with_precision(self.precision))
    }
}

/// Which input a `RingSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingSource<'a> {
    Explicit(&'a CoordSeq),
    Generated(LengthRange),
}

/// Closed-ring generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingSpec {
    pub(crate) domain: CoordDomain,
    vertices: Option<LengthRange>,
    sequence: Option<CoordSeq>,
    precision: Precision,
}

impl_domain_builders!(RingSpec, domain);

impl RingSpec {
    pub fn new() -> Self {
        Self::default()
    }
    /// Unique vertex count. Values below 3 become 3.
    pub fn vertices(mut self, n: usize) -> Self {
        self.vertices = Some(LengthRange::new_unchecked(n, n).clamped_min(MIN_RING_VERTICES));
        self
    }
    /// Unique vertex range. Both ends are raised to at least 3, `max` to at least `min`.
    pub fn vertices_between(mut self, min: usize, max: usize) -> Self {
        self.vertices =
            Some(LengthRange::new_unchecked(min, max.max(min)).clamped_min(MIN_RING_VERTICES));
        self
    }
    /// Explicit coordinates; closed on generation if open.
    pub fn sequence(mut self, seq: impl Into<CoordSeq>) -> Self {
        self.sequence = Some(seq.into());
        self
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
    pub fn vertex_range(&self) -> LengthRange {
        self.vertices.unwrap_or(DEFAULT_RING_VERTICES)
    }

    pub fn source(&self) -> RingSource<'_> {
        match &self.sequence {
            Some(seq) => RingSource::Explicit(seq),
            None => RingSource::Generated(self.vertex_range()),
        }
    }
}

impl Generator for RingSpec {
    type Output = Ring;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Ring, GeneratorError> {
        check_precision(&self.precision)?;
        let ring = match self.source() {
            RingSource::Explicit(seq) => close_ring(seq.coords())?,
            RingSource::Generated(range) => {
                self.domain.check()?;
                let seq = build_sequence(rng, range, &self.domain, None);
                close_ring(seq.coords())?
            }
        };
        Ok(ring.with_precision(self.precision))
    }
}

/// Two-point segment generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentSpec {
    pub(crate) domain: CoordDomain,
    points: Option<(Coord, Coord)>,
}

impl_domain_builders!(SegmentSpec, domain);

/// Which input a `SegmentSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentSource {
    Explicit(Coord, Coord),
    Generated,
}

impl SegmentSpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn points(mut self, p0: Coord, p1: Coord) -> Self {
        self.points = Some((p0, p1));
        self
    }

    pub fn source(&self) -> SegmentSource {
        match self.points {
            Some((p0, p1)) => SegmentSource::Explicit(p0, p1),
            None => SegmentSource::Generated,
        }
    }
}

impl Generator for SegmentSpec {
    type Output = Segment;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Segment, GeneratorError> {
        match self.source() {
            SegmentSource::Explicit(p0, p1) => Ok(Segment { p0, p1 }),
            SegmentSource::Generated => {
                self.domain.check()?;
                let p0 = self.domain.sample(rng);
                let p1 = self.domain.sample(rng);
                Ok(Segment { p0, p1 })
            }
        }
    }
}

/// Triangle generator (three independent points).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSpec {
    pub(crate) domain: CoordDomain,
    points: Option<(Coord, Coord, Coord)>,
}

impl_domain_builders!(TriangleSpec, domain);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleSource {
    Explicit(Coord, Coord, Coord),
    Generated,
}

impl TriangleSpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn points(mut self, p0: Coord, p1: Coord, p2: Coord) -> Self {
        self.points = Some((p0, p1, p2));
        self
    }

    pub fn source(&self) -> TriangleSource {
        match self.points {
            Some((p0, p1, p2)) => TriangleSource::Explicit(p0, p1, p2),
            None => TriangleSource::Generated,
        }
    }
}

impl Generator for TriangleSpec {
    type Output = Triangle;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Triangle, GeneratorError> {
        match self.source() {
            TriangleSource::Explicit(p0, p1, p2) => Ok(Triangle { p0, p1, p2 }),
            TriangleSource::Generated => {
                self.domain.check()?;
                let p0 = self.domain.sample(rng);
                let p1 = self.domain.sample(rng);
                let p2 = self.domain.sample(rng);
                Ok(Triangle { p0, p1, p2 })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Dims, RingError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn point_precedence() {
        let b = Bounds2::new(0.0, 50.0, 0.0, 50.0);
        let spec = PointSpec::new().within(b).coordinate(120.0, -80.0);
        assert_eq!(spec.source(), PointSource::Explicit(Coord::new(120.0, -80.0)));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(spec.generate(&mut rng).unwrap(), Coord::new(120.0, -80.0));

        let bounded = PointSpec::new().within(b);
        assert_eq!(bounded.source(), PointSource::Bounded(b));
        for _ in 0..200 {
            assert!(b.contains(&bounded.generate(&mut rng).unwrap()));
        }
        assert_eq!(PointSpec::new().source(), PointSource::Default);
    }

    #[test]
    fn line_default_and_fixed_length() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let n = LineSpec::new().generate(&mut rng).unwrap().len();
            assert!(DEFAULT_LINE_LENGTH.contains(n));
        }
        let fixed = LineSpec::new().length(4).unwrap();
        assert_eq!(fixed.generate(&mut rng).unwrap().len(), 4);
        assert_eq!(
            LineSpec::new().length(0).unwrap_err().to_string(),
            "length must be >= 1"
        );
    }

    #[test]
    fn ring_with_five_vertices_has_six_coords() {
        let mut rng = StdRng::seed_from_u64(3);
        let ring = RingSpec::new().vertices(5).generate(&mut rng).unwrap();
        assert_eq!(ring.len(), 6);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn ring_vertex_requests_below_three_are_clamped() {
        let mut rng = StdRng::seed_from_u64(4);
        for n in [0, 1, 2] {
            let ring = RingSpec::new().vertices(n).generate(&mut rng).unwrap();
            assert_eq!(ring.len(), 4);
        }
        let spec = RingSpec::new().vertices_between(1, 2);
        assert_eq!(spec.vertex_range(), LengthRange::new_unchecked(3, 3));
    }

    #[test]
    fn ring_keeps_z_on_closing_coordinate() {
        let mut rng = StdRng::seed_from_u64(5);
        let ring = RingSpec::new()
            .dims(Dims::Xyz)
            .generate(&mut rng)
            .unwrap();
        assert!(ring.last().z.is_some());
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn explicit_ring_sequence_is_closed_or_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let open = vec![Coord::new(0.0, 0.0), Coord::new(4.0, 0.0), Coord::new(0.0, 3.0)];
        let spec = RingSpec::new().vertices(7).sequence(open.clone());
        assert!(matches!(spec.source(), RingSource::Explicit(_)));
        let ring = spec.generate(&mut rng).unwrap();
        assert_eq!(ring.unique_vertices(), open.as_slice());

        let short = RingSpec::new().sequence(open[..2].to_vec());
        assert!(matches!(
            short.generate(&mut rng),
            Err(GeneratorError::Ring(RingError::Degenerate { .. }))
        ));
    }

    #[test]
    fn segment_and_triangle_respect_bounds_and_overrides() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = Bounds2::new(-1.0, 1.0, -1.0, 1.0);
        let seg = SegmentSpec::new().within(b).generate(&mut rng).unwrap();
        assert!(b.contains(&seg.p0) && b.contains(&seg.p1));
        let tri = TriangleSpec::new().within(b).generate(&mut rng).unwrap();
        assert!([tri.p0, tri.p1, tri.p2].iter().all(|p| b.contains(p)));

        let a = Coord::new(10.0, 10.0);
        let c = Coord::new(20.0, 10.0);
        let fixed = SegmentSpec::new().within(b).points(a, c);
        assert_eq!(fixed.source(), SegmentSource::Explicit(a, c));
        assert_eq!(fixed.generate(&mut rng).unwrap(), Segment { p0: a, p1: c });
        assert_eq!(SegmentSpec::new().source(), SegmentSource::Generated);

        let d = Coord::new(15.0, 30.0);
        let tri = TriangleSpec::new().within(b).points(a, c, d);
        assert_eq!(tri.source(), TriangleSource::Explicit(a, c, d));
        assert_eq!(
            tri.generate(&mut rng).unwrap(),
            Triangle { p0: a, p1: c, p2: d }
        );
        assert_eq!(TriangleSpec::new().within(b).source(), TriangleSource::Generated);
    }
}
