//! Owned shape values produced by the generators.
//!
//! Every value owns its coordinates outright; nothing is shared or mutated after
//! construction. `Ring` can only be built through `close_ring`.

use super::types::{Bounds2, Coord, Precision};

/// Ordered coordinate list (the path of a line string, or raw ring input).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordSeq {
    coords: Vec<Coord>,
}

impl CoordSeq {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    pub fn into_vec(self) -> Vec<Coord> {
        self.coords
    }
    pub fn envelope(&self) -> Option<Bounds2> {
        Bounds2::of_coords(&self.coords)
    }
    pub(crate) fn with_precision(self, p: Precision) -> Self {
        Self {
            coords: self.coords.into_iter().map(|c| p.apply(c)).collect(),
        }
    }
}

impl From<Vec<Coord>> for CoordSeq {
    fn from(coords: Vec<Coord>) -> Self {
        Self::new(coords)
    }
}

/// Closed coordinate sequence: `len >= 4` and `first == last`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub(super) coords: Vec<Coord>,
}

impl Ring {
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    #[inline]
    pub fn first(&self) -> &Coord {
        &self.coords[0]
    }
    #[inline]
    pub fn last(&self) -> &Coord {
        &self.coords[self.coords.len() - 1]
    }
    /// Vertices without the closing duplicate.
    #[inline]
    pub fn unique_vertices(&self) -> &[Coord] {
        &self.coords[..self.coords.len() - 1]
    }
    pub fn envelope(&self) -> Bounds2 {
        let mut b = Bounds2::point(self.first());
        for c in &self.coords[1..] {
            b.expand_to_include(c);
        }
        b
    }
    /// Rounding is deterministic, so the first and last coordinates stay equal.
    pub(crate) fn with_precision(self, p: Precision) -> Self {
        Self {
            coords: self.coords.into_iter().map(|c| p.apply(c)).collect(),
        }
    }
}

/// One exterior ring plus zero or more holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }
    #[inline]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }
    #[inline]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }
    pub fn envelope(&self) -> Bounds2 {
        self.exterior.envelope()
    }
    pub fn num_coords(&self) -> usize {
        self.exterior.len() + self.holes.iter().map(Ring::len).sum::<usize>()
    }
    pub(crate) fn with_precision(self, p: Precision) -> Self {
        Self {
            exterior: self.exterior.with_precision(p),
            holes: self
                .holes
                .into_iter()
                .map(|h| h.with_precision(p))
                .collect(),
        }
    }
}

/// Geometry type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    Collection,
}

impl GeometryKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::LinearRing => "LinearRing",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::Collection => "GeometryCollection",
        }
    }
}

/// Any generated geometry. Composite variants own their members.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coord),
    LineString(CoordSeq),
    LinearRing(Ring),
    Polygon(Polygon),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<CoordSeq>),
    MultiPolygon(Vec<Polygon>),
    Collection(Vec<Geometry>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::LineString(_) => GeometryKind::LineString,
            Self::LinearRing(_) => GeometryKind::LinearRing,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Self::Collection(_) => GeometryKind::Collection,
        }
    }

    /// Number of members for composite kinds, 1 otherwise.
    pub fn num_members(&self) -> usize {
        match self {
            Self::MultiPoint(v) => v.len(),
            Self::MultiLineString(v) => v.len(),
            Self::MultiPolygon(v) => v.len(),
            Self::Collection(v) => v.len(),
            _ => 1,
        }
    }

    /// All coordinates in storage order (exterior before holes, members in order).
    pub fn coords(&self) -> Vec<&Coord> {
        let mut out = Vec::new();
        self.collect_coords(&mut out);
        out
    }

    fn collect_coords<'a>(&'a self, out: &mut Vec<&'a Coord>) {
        match self {
            Self::Point(c) => out.push(c),
            Self::LineString(s) => out.extend(s.coords()),
            Self::LinearRing(r) => out.extend(r.coords()),
            Self::Polygon(p) => push_polygon(p, out),
            Self::MultiPoint(v) => out.extend(v.iter()),
            Self::MultiLineString(v) => v.iter().for_each(|s| out.extend(s.coords())),
            Self::MultiPolygon(v) => v.iter().for_each(|p| push_polygon(p, out)),
            Self::Collection(v) => v.iter().for_each(|g| g.collect_coords(out)),
        }
    }

    pub fn num_coords(&self) -> usize {
        self.coords().len()
    }

    /// `None` only for empty composites.
    pub fn envelope(&self) -> Option<Bounds2> {
        Bounds2::of_coords(self.coords())
    }

    /// Round every coordinate with `p`. Structure is preserved.
    pub fn with_precision(self, p: Precision) -> Self {
        if matches!(p, Precision::Floating) {
            return self;
        }
        match self {
            Self::Point(c) => Self::Point(p.apply(c)),
            Self::LineString(s) => Self::LineString(s.with_precision(p)),
            Self::LinearRing(r) => Self::LinearRing(r.with_precision(p)),
            Self::Polygon(poly) => Self::Polygon(poly.with_precision(p)),
            Self::MultiPoint(v) => Self::MultiPoint(v.into_iter().map(|c| p.apply(c)).collect()),
            Self::MultiLineString(v) => {
                Self::MultiLineString(v.into_iter().map(|s| s.with_precision(p)).collect())
            }
            Self::MultiPolygon(v) => {
                Self::MultiPolygon(v.into_iter().map(|q| q.with_precision(p)).collect())
            }
            Self::Collection(v) => {
                Self::Collection(v.into_iter().map(|g| g.with_precision(p)).collect())
            }
        }
    }
}

fn push_polygon<'a>(p: &'a Polygon, out: &mut Vec<&'a Coord>) {
    out.extend(p.exterior().coords());
    for h in p.holes() {
        out.extend(h.coords());
    }
}

/// Two-point segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Coord,
    pub p1: Coord,
}

impl Segment {
    pub fn length(&self) -> f64 {
        (self.p1.xy - self.p0.xy).norm()
    }
}

/// Three-vertex triangle (not closed; not a `Geometry`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p0: Coord,
    pub p1: Coord,
    pub p2: Coord,
}

impl Triangle {
    /// Signed area; positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let ab = self.p1.xy - self.p0.xy;
        let ac = self.p2.xy - self.p0.xy;
        0.5 * (ab.x * ac.y - ab.y * ac.x)
    }
}
