//! Geometry collections.
//!
//! Resolution cascade, first match wins:
//! 1. explicit instance (collection, then multi-point, multi-line, multi-polygon), returned
//!    as the same `Arc` with no further generation;
//! 2. member list, wrapped into a collection with precision applied;
//! 3. count directive, a mixed collection of exactly that many members;
//! 4. nothing set, a uniformly chosen `CollectionKind` with its own default count.
//!
//! Mixed members are each an independently chosen point, line or polygon. Bounds and
//! dimensions propagate to every member generator unchanged.

use super::coord::{impl_domain_builders, CoordDomain};
use super::multi::{MultiLineSpec, MultiPointSpec, MultiPolygonSpec};
use super::polygon::PolygonSpec;
use super::primitive::{LineSpec, PointSpec};
use super::sequence::LengthRange;
use super::{check_precision, ConfigError, Generator, GeneratorError};
use crate::geom::{Geometry, Precision};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Member count of a mixed collection when none is configured.
pub const DEFAULT_MIXED_COUNT: LengthRange = LengthRange::new_unchecked(2, 6);

/// Collection subtypes chosen from when nothing is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Mixed,
    MultiPoint,
    MultiLine,
    MultiPolygon,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Mixed,
        CollectionKind::MultiPoint,
        CollectionKind::MultiLine,
        CollectionKind::MultiPolygon,
    ];

    /// Uniform choice over `ALL`.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Shape of one member of a mixed collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Point,
    Line,
    Polygon,
}

impl MemberKind {
    pub const ALL: [MemberKind; 3] = [MemberKind::Point, MemberKind::Line, MemberKind::Polygon];

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Which input a `CollectionSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollectionSource<'a> {
    /// Explicit instance; `slot` names the setter it came from.
    Instance {
        slot: CollectionKind,
        geometry: &'a Arc<Geometry>,
    },
    Members(&'a [Geometry]),
    Count(usize),
    Random,
}

/// Geometry-collection generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionSpec {
    pub(crate) domain: CoordDomain,
    collection: Option<Arc<Geometry>>,
    multi_point: Option<Arc<Geometry>>,
    multi_line: Option<Arc<Geometry>>,
    multi_polygon: Option<Arc<Geometry>>,
    members: Option<Vec<Geometry>>,
    count: Option<usize>,
    precision: Precision,
}

impl_domain_builders!(CollectionSpec, domain);

impl CollectionSpec {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returned as-is by `generate`.
    pub fn collection(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.collection = Some(g.into());
        self
    }
    pub fn multi_point(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.multi_point = Some(g.into());
        self
    }
    pub fn multi_line(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.multi_line = Some(g.into());
        self
    }
    pub fn multi_polygon(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.multi_polygon = Some(g.into());
        self
    }
    /// Members of a collection to build.
    pub fn members(mut self, members: Vec<Geometry>) -> Self {
        self.members = Some(members);
        self
    }
    /// Exact member count of a generated mixed collection.
    pub fn length(mut self, n: usize) -> Result<Self, ConfigError> {
        self.count = Some(LengthRange::fixed(n)?.min());
        Ok(self)
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn source(&self) -> CollectionSource<'_> {
        let instances = [
            (CollectionKind::Mixed, &self.collection),
            (CollectionKind::MultiPoint, &self.multi_point),
            (CollectionKind::MultiLine, &self.multi_line),
            (CollectionKind::MultiPolygon, &self.multi_polygon),
        ];
        if let Some((slot, geometry)) = instances
            .into_iter()
            .find_map(|(slot, g)| g.as_ref().map(|g| (slot, g)))
        {
            return CollectionSource::Instance { slot, geometry };
        }
        match (&self.members, self.count) {
            (Some(m), _) => CollectionSource::Members(m),
            (None, Some(n)) => CollectionSource::Count(n),
            (None, None) => CollectionSource::Random,
        }
    }

    fn mixed<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Geometry, GeneratorError> {
        let point = PointSpec::new().with_domain(self.domain);
        let line = LineSpec::new().with_domain(self.domain);
        let polygon = PolygonSpec::new().with_domain(self.domain);
        let mut members = Vec::with_capacity(n);
        for _ in 0..n {
            let m = match MemberKind::pick(rng) {
                MemberKind::Point => Geometry::Point(point.generate(rng)?),
                MemberKind::Line => Geometry::LineString(line.generate(rng)?),
                MemberKind::Polygon => Geometry::Polygon(polygon.generate(rng)?),
            };
            members.push(m);
        }
        Ok(Geometry::Collection(members))
    }

    fn of_kind<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: CollectionKind,
    ) -> Result<Geometry, GeneratorError> {
        match kind {
            CollectionKind::Mixed => {
                let n = DEFAULT_MIXED_COUNT.sample(rng);
                self.mixed(rng, n)
            }
            CollectionKind::MultiPoint => MultiPointSpec::new().with_domain(self.domain).generate(rng),
            CollectionKind::MultiLine => MultiLineSpec::new().with_domain(self.domain).generate(rng),
            CollectionKind::MultiPolygon => {
                MultiPolygonSpec::new().with_domain(self.domain).generate(rng)
            }
        }
    }
}

impl Generator for CollectionSpec {
    type Output = Arc<Geometry>;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Arc<Geometry>, GeneratorError> {
        let source = self.source();
        if let CollectionSource::Instance { slot, geometry } = source {
            debug!(?slot, "collection from explicit instance");
            return Ok(Arc::clone(geometry));
        }
        check_precision(&self.precision)?;
        self.domain.check()?;
        let g = match source {
            CollectionSource::Members(m) => Geometry::Collection(m.to_vec()),
            CollectionSource::Count(n) => self.mixed(rng, n)?,
            CollectionSource::Random | CollectionSource::Instance { .. } => {
                let kind = CollectionKind::pick(rng);
                debug!(?kind, "collection subtype");
                self.of_kind(rng, kind)?
            }
        };
        Ok(Arc::new(g.with_precision(self.precision)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Bounds2, Coord, GeometryKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn explicit_instance_is_returned_by_identity() {
        let gc = Arc::new(Geometry::Collection(vec![Geometry::Point(Coord::new(1.0, 2.0))]));
        let mp = Arc::new(Geometry::MultiPoint(vec![Coord::new(0.0, 0.0)]));
        let spec = CollectionSpec::new()
            .within(Bounds2::new(0.0, 1.0, 0.0, 1.0))
            .length(4)
            .unwrap()
            .multi_point(Arc::clone(&mp))
            .collection(Arc::clone(&gc));
        let out = spec.generate(&mut StdRng::seed_from_u64(1)).unwrap();
        assert!(Arc::ptr_eq(&out, &gc));

        let spec = CollectionSpec::new()
            .members(vec![Geometry::Point(Coord::new(5.0, 5.0))])
            .multi_point(Arc::clone(&mp));
        assert!(matches!(
            spec.source(),
            CollectionSource::Instance { slot: CollectionKind::MultiPoint, .. }
        ));
        let out = spec.generate(&mut StdRng::seed_from_u64(1)).unwrap();
        assert!(Arc::ptr_eq(&out, &mp));
    }

    #[test]
    fn members_beat_length() {
        let members = vec![
            Geometry::Point(Coord::new(1.0, 1.0)),
            Geometry::Point(Coord::new(2.0, 2.0)),
        ];
        let spec = CollectionSpec::new()
            .length(5)
            .unwrap()
            .members(members.clone());
        let out = spec.generate(&mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(*out, Geometry::Collection(members));
    }

    #[test]
    fn length_builds_mixed_collection_in_bounds() {
        let b = Bounds2::new(0.0, 10.0, 0.0, 10.0);
        let spec = CollectionSpec::new().within(b).length(5).unwrap();
        assert_eq!(spec.source(), CollectionSource::Count(5));
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let out = spec.generate(&mut rng).unwrap();
            assert_eq!(out.kind(), GeometryKind::Collection);
            assert_eq!(out.num_members(), 5);
            assert!(out.coords().iter().all(|c| b.contains(c)));
        }
    }

    #[test]
    fn unconfigured_collection_reaches_every_subtype() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let out = CollectionSpec::new().generate(&mut rng).unwrap();
            if out.kind() == GeometryKind::Collection {
                assert!(DEFAULT_MIXED_COUNT.contains(out.num_members()));
            }
            seen.insert(out.kind());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn mixed_members_cover_all_member_kinds() {
        let mut rng = StdRng::seed_from_u64(5);
        let spec = CollectionSpec::new().length(60).unwrap();
        let out = spec.generate(&mut rng).unwrap();
        let Geometry::Collection(members) = &*out else {
            panic!("expected a collection, got {:?}", out.kind());
        };
        let kinds: HashSet<_> = members.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            HashSet::from([
                GeometryKind::Point,
                GeometryKind::LineString,
                GeometryKind::Polygon
            ])
        );
    }
}
