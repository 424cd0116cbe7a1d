//! Command-line shape selection and the generator it maps to.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use geofixture::api::*;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindArg {
    Point,
    Line,
    Ring,
    Polygon,
    MultiPoint,
    MultiLine,
    MultiPolygon,
    Collection,
    Any,
}

/// Shape flags shared by `generate` and `replay`.
#[derive(Args, Clone, Debug, Serialize)]
pub struct ShapeArgs {
    #[arg(long, value_enum)]
    pub kind: KindArg,
    /// Bounding rectangle as `minx,maxx,miny,maxy`
    #[arg(long, value_parser = parse_bbox)]
    #[serde(serialize_with = "ser_bbox")]
    pub bbox: Option<Bounds2>,
    /// Sequence length (line) or member count (multi-*, collection)
    #[arg(long)]
    pub length: Option<usize>,
    /// Hole count (polygon)
    #[arg(long)]
    pub holes: Option<usize>,
    /// Unique vertex count (ring, polygon exterior)
    #[arg(long)]
    pub vertices: Option<usize>,
}

pub fn parse_bbox(s: &str) -> Result<Bounds2, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("bbox: {e}"))?;
    match parts.as_slice() {
        [x1, x2, y1, y2] => Ok(Bounds2::new(*x1, *x2, *y1, *y2)),
        _ => Err(format!("bbox needs 4 numbers, got {}", parts.len())),
    }
}

fn ser_bbox<S: serde::Serializer>(b: &Option<Bounds2>, s: S) -> Result<S::Ok, S::Error> {
    match b {
        Some(b) => [b.min_x(), b.max_x(), b.min_y(), b.max_y()].serialize(s),
        None => s.serialize_none(),
    }
}

/// Generator selected on the command line.
#[derive(Clone, Debug)]
pub enum FixtureSpec {
    Point(PointSpec),
    Line(LineSpec),
    Ring(RingSpec),
    Polygon(PolygonSpec),
    MultiPoint(MultiPointSpec),
    MultiLine(MultiLineSpec),
    MultiPolygon(MultiPolygonSpec),
    Collection(CollectionSpec),
    Any(GeometrySpec),
}

impl ShapeArgs {
    /// Build the generator, rejecting flags that do not apply to the kind.
    pub fn build(&self) -> Result<FixtureSpec> {
        use KindArg as K;
        let ignored: Vec<(&str, bool)> = match self.kind {
            K::Point | K::Any => vec![
                ("--length", self.length.is_some()),
                ("--holes", self.holes.is_some()),
                ("--vertices", self.vertices.is_some()),
            ],
            K::Line | K::MultiPoint | K::MultiLine | K::MultiPolygon | K::Collection => vec![
                ("--holes", self.holes.is_some()),
                ("--vertices", self.vertices.is_some()),
            ],
            K::Ring => vec![
                ("--length", self.length.is_some()),
                ("--holes", self.holes.is_some()),
            ],
            K::Polygon => vec![("--length", self.length.is_some())],
        };
        if let Some((flag, _)) = ignored.iter().find(|(_, set)| *set) {
            bail!("{flag} does not apply to --kind {:?}", self.kind);
        }

        let domain = CoordDomain {
            bounds: self.bbox,
            ..CoordDomain::default()
        };
        Ok(match self.kind {
            K::Point => FixtureSpec::Point(PointSpec::new().with_domain(domain)),
            K::Line => {
                let mut spec = LineSpec::new().with_domain(domain);
                if let Some(n) = self.length {
                    spec = spec.length(n)?;
                }
                FixtureSpec::Line(spec)
            }
            K::Ring => {
                let mut spec = RingSpec::new().with_domain(domain);
                if let Some(v) = self.vertices {
                    spec = spec.vertices(v);
                }
                FixtureSpec::Ring(spec)
            }
            K::Polygon => {
                let mut spec = PolygonSpec::new().with_domain(domain);
                if let Some(v) = self.vertices {
                    spec = spec.vertices(v);
                }
                if let Some(k) = self.holes {
                    spec = spec.holes(k);
                }
                FixtureSpec::Polygon(spec)
            }
            K::MultiPoint => {
                let mut spec = MultiPointSpec::new().with_domain(domain);
                if let Some(n) = self.length {
                    spec = spec.length(n)?;
                }
                FixtureSpec::MultiPoint(spec)
            }
            K::MultiLine => {
                let mut spec = MultiLineSpec::new().with_domain(domain);
                if let Some(n) = self.length {
                    spec = spec.length(n)?;
                }
                FixtureSpec::MultiLine(spec)
            }
            K::MultiPolygon => {
                let mut spec = MultiPolygonSpec::new().with_domain(domain);
                if let Some(n) = self.length {
                    spec = spec.length(n)?;
                }
                FixtureSpec::MultiPolygon(spec)
            }
            K::Collection => {
                let mut spec = CollectionSpec::new().with_domain(domain);
                if let Some(n) = self.length {
                    spec = spec.length(n)?;
                }
                FixtureSpec::Collection(spec)
            }
            K::Any => FixtureSpec::Any(GeometrySpec::new().with_domain(domain)),
        })
    }
}

fn owned(g: Arc<Geometry>) -> Geometry {
    Arc::try_unwrap(g).unwrap_or_else(|shared| (*shared).clone())
}

impl Generator for FixtureSpec {
    type Output = Geometry;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Geometry, GeneratorError> {
        Ok(match self {
            FixtureSpec::Point(s) => Geometry::Point(s.generate(rng)?),
            FixtureSpec::Line(s) => Geometry::LineString(s.generate(rng)?),
            FixtureSpec::Ring(s) => Geometry::LinearRing(s.generate(rng)?),
            FixtureSpec::Polygon(s) => Geometry::Polygon(s.generate(rng)?),
            FixtureSpec::MultiPoint(s) => s.generate(rng)?,
            FixtureSpec::MultiLine(s) => s.generate(rng)?,
            FixtureSpec::MultiPolygon(s) => s.generate(rng)?,
            FixtureSpec::Collection(s) => owned(s.generate(rng)?),
            FixtureSpec::Any(s) => owned(s.generate(rng)?),
        })
    }
}
