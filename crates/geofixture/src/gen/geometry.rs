//! Any-geometry generator.
//!
//! Explicit instances are checked in the order point, line string, linear ring, polygon,
//! collection, and the first one set is returned as the same `Arc`. Without one, a kind
//! is chosen uniformly from `ANY_KINDS` and generated with the configured domain.

use super::collection::CollectionSpec;
use super::coord::{impl_domain_builders, CoordDomain};
use super::multi::{MultiLineSpec, MultiPointSpec, MultiPolygonSpec};
use super::polygon::PolygonSpec;
use super::primitive::{LineSpec, PointSpec, RingSpec};
use super::{check_precision, Generator, GeneratorError};
use crate::geom::{Geometry, GeometryKind, Precision};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Kinds drawn from when no instance is configured.
pub const ANY_KINDS: [GeometryKind; 5] = [
    GeometryKind::Point,
    GeometryKind::LineString,
    GeometryKind::LinearRing,
    GeometryKind::Polygon,
    GeometryKind::Collection,
];

/// Which input a `GeometrySpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometrySource<'a> {
    Instance {
        slot: GeometryKind,
        geometry: &'a Arc<Geometry>,
    },
    Random,
}

/// Generator over every supported geometry kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometrySpec {
    pub(crate) domain: CoordDomain,
    point: Option<Arc<Geometry>>,
    line_string: Option<Arc<Geometry>>,
    linear_ring: Option<Arc<Geometry>>,
    polygon: Option<Arc<Geometry>>,
    collection: Option<Arc<Geometry>>,
    precision: Precision,
}

impl_domain_builders!(GeometrySpec, domain);

impl GeometrySpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn point(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.point = Some(g.into());
        self
    }
    pub fn line_string(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.line_string = Some(g.into());
        self
    }
    pub fn linear_ring(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.linear_ring = Some(g.into());
        self
    }
    pub fn polygon(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.polygon = Some(g.into());
        self
    }
    pub fn collection(mut self, g: impl Into<Arc<Geometry>>) -> Self {
        self.collection = Some(g.into());
        self
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn source(&self) -> GeometrySource<'_> {
        let slots = [
            (GeometryKind::Point, &self.point),
            (GeometryKind::LineString, &self.line_string),
            (GeometryKind::LinearRing, &self.linear_ring),
            (GeometryKind::Polygon, &self.polygon),
            (GeometryKind::Collection, &self.collection),
        ];
        slots
            .into_iter()
            .find_map(|(slot, g)| {
                g.as_ref()
                    .map(|geometry| GeometrySource::Instance { slot, geometry })
            })
            .unwrap_or(GeometrySource::Random)
    }

    /// Generate one geometry of `kind`.
    pub fn generate_kind<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: GeometryKind,
    ) -> Result<Arc<Geometry>, GeneratorError> {
        check_precision(&self.precision)?;
        let d = self.domain;
        let p = self.precision;
        let g = match kind {
            GeometryKind::Point => Geometry::Point(PointSpec::new().with_domain(d).generate(rng)?),
            GeometryKind::LineString => {
                Geometry::LineString(LineSpec::new().with_domain(d).generate(rng)?)
            }
            GeometryKind::LinearRing => {
                Geometry::LinearRing(RingSpec::new().with_domain(d).generate(rng)?)
            }
            GeometryKind::Polygon => {
                Geometry::Polygon(PolygonSpec::new().with_domain(d).generate(rng)?)
            }
            GeometryKind::MultiPoint => MultiPointSpec::new().with_domain(d).generate(rng)?,
            GeometryKind::MultiLineString => MultiLineSpec::new().with_domain(d).generate(rng)?,
            GeometryKind::MultiPolygon => MultiPolygonSpec::new().with_domain(d).generate(rng)?,
            GeometryKind::Collection => {
                return CollectionSpec::new().with_domain(d).precision(p).generate(rng);
            }
        };
        Ok(Arc::new(g.with_precision(p)))
    }
}

impl Generator for GeometrySpec {
    type Output = Arc<Geometry>;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Arc<Geometry>, GeneratorError> {
        match self.source() {
            GeometrySource::Instance { slot, geometry } => {
                debug!(slot = slot.name(), "geometry from explicit instance");
                Ok(Arc::clone(geometry))
            }
            GeometrySource::Random => {
                self.domain.check()?;
                let kind = ANY_KINDS[rng.gen_range(0..ANY_KINDS.len())];
                debug!(kind = kind.name(), "geometry kind");
                self.generate_kind(rng, kind)
            }
        }
    }
}
