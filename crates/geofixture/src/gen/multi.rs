//! Homogeneous multi-geometries.
//!
//! Resolution order: member list > count directive > random count. A member list is
//! wrapped as-is (precision still applied). Random counts are `[2, 10]` for points and
//! lines, `[1, 5]` for polygons. Bounds and dimensions pass through to every member.

use super::coord::{impl_domain_builders, CoordDomain};
use super::polygon::PolygonSpec;
use super::primitive::LineSpec;
use super::sequence::LengthRange;
use super::{check_precision, ConfigError, Generator, GeneratorError};
use crate::geom::{Coord, CoordSeq, Geometry, Polygon, Precision};
use rand::Rng;
use tracing::debug;

pub const DEFAULT_MULTI_POINT_COUNT: LengthRange = LengthRange::new_unchecked(2, 10);
pub const DEFAULT_MULTI_LINE_COUNT: LengthRange = LengthRange::new_unchecked(2, 10);
pub const DEFAULT_MULTI_POLYGON_COUNT: LengthRange = LengthRange::new_unchecked(1, 5);

/// Which input a multi-geometry spec builds from.
#[derive(Debug, PartialEq)]
pub enum MultiSource<'a, T> {
    Members(&'a [T]),
    Count(LengthRange),
}

/// Fields shared by the three multi specs.
#[derive(Clone, Debug, PartialEq)]
struct MultiCommon<T> {
    domain: CoordDomain,
    members: Option<Vec<T>>,
    count: Option<LengthRange>,
    precision: Precision,
}

impl<T> Default for MultiCommon<T> {
    fn default() -> Self {
        Self {
            domain: CoordDomain::default(),
            members: None,
            count: None,
            precision: Precision::default(),
        }
    }
}

impl<T> MultiCommon<T> {
    fn source(&self, default: LengthRange) -> MultiSource<'_, T> {
        match &self.members {
            Some(m) => MultiSource::Members(m),
            None => MultiSource::Count(self.count.unwrap_or(default)),
        }
    }

    fn draw_count<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        range: LengthRange,
    ) -> Result<usize, GeneratorError> {
        self.domain.check()?;
        Ok(range.sample(rng))
    }
}

macro_rules! impl_multi_builders {
    ($ty:ident, $member:ty, $setter:ident, $default:expr) => {
        impl_domain_builders!($ty, common.domain);

        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }
            /// Explicit members; count and bounds are then ignored.
            pub fn $setter(mut self, members: Vec<$member>) -> Self {
                self.common.members = Some(members);
                self
            }
            /// Fixed member count.
            pub fn length(mut self, n: usize) -> Result<Self, ConfigError> {
                self.common.count = Some(LengthRange::fixed(n)?);
                Ok(self)
            }
            /// Member count range.
            pub fn length_between(mut self, min: usize, max: usize) -> Result<Self, ConfigError> {
                self.common.count = Some(LengthRange::between(min, max)?);
                Ok(self)
            }
            pub fn precision(mut self, precision: Precision) -> Self {
                self.common.precision = precision;
                self
            }
            pub fn source(&self) -> MultiSource<'_, $member> {
                self.common.source($default)
            }
        }
    };
}

/// Multi-point generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPointSpec {
    common: MultiCommon<Coord>,
}

impl_multi_builders!(MultiPointSpec, Coord, points, DEFAULT_MULTI_POINT_COUNT);

impl Generator for MultiPointSpec {
    type Output = Geometry;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Geometry, GeneratorError> {
        check_precision(&self.common.precision)?;
        let points = match self.source() {
            MultiSource::Members(m) => m.to_vec(),
            MultiSource::Count(range) => {
                let n = self.common.draw_count(rng, range)?;
                debug!(count = n, "multi-point");
                (0..n).map(|_| self.common.domain.sample(rng)).collect()
            }
        };
        Ok(Geometry::MultiPoint(points).with_precision(self.common.precision))
    }
}

/// Multi-line-string generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineSpec {
    common: MultiCommon<CoordSeq>,
}

impl_multi_builders!(MultiLineSpec, CoordSeq, lines, DEFAULT_MULTI_LINE_COUNT);

impl Generator for MultiLineSpec {
    type Output = Geometry;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Geometry, GeneratorError> {
        check_precision(&self.common.precision)?;
        let lines = match self.source() {
            MultiSource::Members(m) => m.to_vec(),
            MultiSource::Count(range) => {
                let n = self.common.draw_count(rng, range)?;
                debug!(count = n, "multi-line");
                let line = LineSpec::new().with_domain(self.common.domain);
                (0..n)
                    .map(|_| line.generate(rng))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(Geometry::MultiLineString(lines).with_precision(self.common.precision))
    }
}

/// Multi-polygon generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygonSpec {
    common: MultiCommon<Polygon>,
}

impl_multi_builders!(MultiPolygonSpec, Polygon, polygons, DEFAULT_MULTI_POLYGON_COUNT);

impl Generator for MultiPolygonSpec {
    type Output = Geometry;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Geometry, GeneratorError> {
        check_precision(&self.common.precision)?;
        let polygons = match self.source() {
            MultiSource::Members(m) => m.to_vec(),
            MultiSource::Count(range) => {
                let n = self.common.draw_count(rng, range)?;
                debug!(count = n, "multi-polygon");
                let polygon = PolygonSpec::new().with_domain(self.common.domain);
                (0..n)
                    .map(|_| polygon.generate(rng))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(Geometry::MultiPolygon(polygons).with_precision(self.common.precision))
    }
}
