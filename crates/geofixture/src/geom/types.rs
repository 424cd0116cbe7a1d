//! Basic value types shared by every generator.
//!
//! - `Coord`: XY position with optional Z (altitude) and M (measure).
//! - `Bounds2`: axis-aligned bounding rectangle, normalized on construction.
//! - `Interval`: closed 1D range used for Z/M domains.
//! - `Precision`: coordinate rounding model applied by composite generators.
//!
//! Code cross-refs: `gen::sample_coord`, `gen::hole_bounds`

use nalgebra::Vector2;

/// Default X domain (longitude, degrees).
pub const WGS84_X: Interval = Interval {
    lo: -180.0,
    hi: 180.0,
};
/// Default Y domain (latitude, degrees).
pub const WGS84_Y: Interval = Interval { lo: -90.0, hi: 90.0 };
/// Default domain for Z and M when they are requested but not configured.
pub const DEFAULT_ZM: Interval = Interval {
    lo: 1.0,
    hi: 10_000.0,
};

/// Which ordinates a coordinate carries beyond X and Y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dims {
    #[default]
    Xy,
    Xyz,
    Xym,
    Xyzm,
}

impl Dims {
    #[inline]
    pub fn has_z(self) -> bool {
        matches!(self, Dims::Xyz | Dims::Xyzm)
    }
    #[inline]
    pub fn has_m(self) -> bool {
        matches!(self, Dims::Xym | Dims::Xyzm)
    }
}

/// A 2-4 component coordinate. Value type; equality is component-wise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub xy: Vector2<f64>,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            xy: Vector2::new(x, y),
            z: None,
            m: None,
        }
    }
    #[inline]
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }
    #[inline]
    pub fn with_m(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.xy.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.xy.y
    }
    pub fn dims(&self) -> Dims {
        match (self.z.is_some(), self.m.is_some()) {
            (false, false) => Dims::Xy,
            (true, false) => Dims::Xyz,
            (false, true) => Dims::Xym,
            (true, true) => Dims::Xyzm,
        }
    }
}

/// Closed interval `[lo, hi]`; `new` swaps reversed inputs and keeps NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self { lo, hi }
    }
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }
    /// Finite endpoints and a width that does not overflow.
    ///
    /// Uniform float sampling scales the width by `1 / (1 - EPSILON)`, so that must stay
    /// finite too.
    #[inline]
    pub fn is_sampleable(&self) -> bool {
        self.is_finite() && ((self.hi - self.lo) / (1.0 - f64::EPSILON)).is_finite()
    }
}

/// Axis-aligned rectangle `{min_x, max_x, min_y, max_y}`.
///
/// Invariant: `min <= max` component-wise. Every constructor normalizes swapped inputs
/// silently instead of failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// Rectangle from scalar bounds in `(x1, x2, y1, y2)` order.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self::from_intervals(Interval::new(x1, x2), Interval::new(y1, y2))
    }

    pub fn from_intervals(x: Interval, y: Interval) -> Self {
        Self {
            min: Vector2::new(x.lo, y.lo),
            max: Vector2::new(x.hi, y.hi),
        }
    }

    /// Smallest rectangle holding both corners.
    pub fn from_corners(a: &Coord, b: &Coord) -> Self {
        Self::new(a.x(), b.x(), a.y(), b.y())
    }

    /// Zero-area rectangle at `c`.
    pub fn point(c: &Coord) -> Self {
        Self {
            min: c.xy,
            max: c.xy,
        }
    }

    /// The WGS84 longitude/latitude rectangle.
    pub fn wgs84() -> Self {
        Self::from_intervals(WGS84_X, WGS84_Y)
    }

    /// Envelope of a set of coordinates; `None` when empty.
    pub fn of_coords<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coord>,
    {
        let mut it = coords.into_iter();
        let first = it.next()?;
        let mut b = Self::point(first);
        for c in it {
            b.expand_to_include(c);
        }
        Some(b)
    }

    pub fn expand_to_include(&mut self, c: &Coord) {
        self.min = self.min.inf(&c.xy);
        self.max = self.max.sup(&c.xy);
    }

    pub fn merge(&self, other: &Bounds2) -> Bounds2 {
        Bounds2 {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min.x
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max.x
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min.y
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max.y
    }
    #[inline]
    pub fn x_interval(&self) -> Interval {
        Interval {
            lo: self.min.x,
            hi: self.max.x,
        }
    }
    #[inline]
    pub fn y_interval(&self) -> Interval {
        Interval {
            lo: self.min.y,
            hi: self.max.y,
        }
    }
    /// `(width, height)` as a vector.
    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.max - self.min
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }
    /// Finite corners and a finite extent, so uniform draws stay in range.
    #[inline]
    pub fn is_sampleable(&self) -> bool {
        self.x_interval().is_sampleable() && self.y_interval().is_sampleable()
    }
    #[inline]
    pub fn contains(&self, c: &Coord) -> bool {
        self.x_interval().contains(c.x()) && self.y_interval().contains(c.y())
    }
    /// `other ⊆ self`, with absolute slack `eps` on every side.
    pub fn contains_bounds_eps(&self, other: &Bounds2, eps: f64) -> bool {
        other.min.x >= self.min.x - eps
            && other.min.y >= self.min.y - eps
            && other.max.x <= self.max.x + eps
            && other.max.y <= self.max.y + eps
    }
}

/// Coordinate precision model (the "factory" a composite generator builds with).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Precision {
    /// Full `f64` precision; coordinates are left untouched.
    #[default]
    Floating,
    /// Round every ordinate to `round(v * scale) / scale`.
    Fixed { scale: f64 },
}

/// Shared, read-only default precision model.
pub const DEFAULT_PRECISION: Precision = Precision::Floating;

impl Precision {
    pub fn is_valid(&self) -> bool {
        match *self {
            Precision::Floating => true,
            Precision::Fixed { scale } => scale.is_finite() && scale > 0.0,
        }
    }

    #[inline]
    pub fn make_precise(&self, v: f64) -> f64 {
        match *self {
            Precision::Floating => v,
            Precision::Fixed { scale } => (v * scale).round() / scale,
        }
    }

    pub fn apply(&self, c: Coord) -> Coord {
        if matches!(self, Precision::Floating) {
            return c;
        }
        Coord {
            xy: c.xy.map(|v| self.make_precise(v)),
            z: c.z.map(|v| self.make_precise(v)),
            m: c.m.map(|v| self.make_precise(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_normalize_swapped_inputs() {
        let b = Bounds2::new(50.0, 0.0, 10.0, -10.0);
        assert_eq!(b.min_x(), 0.0);
        assert_eq!(b.max_x(), 50.0);
        assert_eq!(b.min_y(), -10.0);
        assert_eq!(b.max_y(), 10.0);
        assert_eq!(b.extent(), Vector2::new(50.0, 20.0));
    }

    #[test]
    fn envelope_of_coords() {
        let cs = [Coord::new(1.0, 5.0), Coord::new(-2.0, 3.0), Coord::new(4.0, -1.0)];
        let b = Bounds2::of_coords(cs.iter()).unwrap();
        assert_eq!(b, Bounds2::new(-2.0, 4.0, -1.0, 5.0));
        assert!(cs.iter().all(|c| b.contains(c)));
        assert!(Bounds2::of_coords(std::iter::empty()).is_none());
    }

    #[test]
    fn fixed_precision_rounds_all_ordinates() {
        let p = Precision::Fixed { scale: 100.0 };
        let c = p.apply(Coord::new(1.23456, -7.891).with_z(2.005).with_m(0.014));
        assert!((c.x() - 1.23).abs() < 1e-12);
        assert!((c.y() + 7.89).abs() < 1e-12);
        assert!((c.m.unwrap() - 0.01).abs() < 1e-12);
        assert!(!Precision::Fixed { scale: 0.0 }.is_valid());
        assert_eq!(DEFAULT_PRECISION.apply(c), c);
    }

    #[test]
    fn dims_follow_optional_ordinates() {
        assert_eq!(Coord::new(0.0, 0.0).dims(), Dims::Xy);
        assert_eq!(Coord::new(0.0, 0.0).with_m(1.0).dims(), Dims::Xym);
        assert!(Dims::Xyzm.has_z() && Dims::Xyzm.has_m());
    }
}
