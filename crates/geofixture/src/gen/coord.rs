//! Coordinate sampling.
//!
//! Model
//! - X uniform on `[min_x, max_x]`, Y uniform on `[min_y, max_y]` when a rectangle is
//!   given; otherwise the WGS84 domain `[-180, 180] x [-90, 90]`.
//! - Z and M are only drawn when the domain's `Dims` asks for them, from the configured
//!   range or `DEFAULT_ZM`.
//! - Draw order is X, Y, Z, M. Seeded runs depend on it.

use super::{check_bounds, Generator, GeneratorError};
use crate::geom::{Bounds2, Coord, Dims, Interval, DEFAULT_ZM, WGS84_X, WGS84_Y};
use rand::Rng;

/// Draw a 2D coordinate inside `bounds`, or inside WGS84 when absent.
pub fn sample_coord<R: Rng + ?Sized>(rng: &mut R, bounds: Option<&Bounds2>) -> Coord {
    let (xs, ys) = match bounds {
        Some(b) => (b.x_interval(), b.y_interval()),
        None => (WGS84_X, WGS84_Y),
    };
    let x = uniform(rng, xs);
    let y = uniform(rng, ys);
    Coord::new(x, y)
}

#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, iv: Interval) -> f64 {
    if iv.lo >= iv.hi {
        iv.lo
    } else {
        rng.gen_range(iv.lo..=iv.hi)
    }
}

/// Where coordinates may land and which ordinates they carry.
///
/// Shared by every generator; composite generators pass it down unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordDomain {
    pub bounds: Option<Bounds2>,
    pub dims: Dims,
    pub z_range: Option<Interval>,
    pub m_range: Option<Interval>,
}

impl CoordDomain {
    pub fn within(bounds: Bounds2) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        let mut c = sample_coord(rng, self.bounds.as_ref());
        if self.dims.has_z() {
            c.z = Some(uniform(rng, self.z_range.unwrap_or(DEFAULT_ZM)));
        }
        if self.dims.has_m() {
            c.m = Some(uniform(rng, self.m_range.unwrap_or(DEFAULT_ZM)));
        }
        c
    }

    /// Replace the X side of the rectangle, keeping Y (WGS84 if none yet).
    pub fn set_x_range(&mut self, min: f64, max: f64) {
        let y = self.bounds.map_or(WGS84_Y, |b| b.y_interval());
        self.bounds = Some(Bounds2::from_intervals(Interval::new(min, max), y));
    }

    /// Replace the Y side of the rectangle, keeping X (WGS84 if none yet).
    pub fn set_y_range(&mut self, min: f64, max: f64) {
        let x = self.bounds.map_or(WGS84_X, |b| b.x_interval());
        self.bounds = Some(Bounds2::from_intervals(x, Interval::new(min, max)));
    }

    pub(crate) fn check(&self) -> Result<(), GeneratorError> {
        check_bounds(self.bounds.as_ref())?;
        for (name, iv) in [("z_range", self.z_range), ("m_range", self.m_range)] {
            if let Some(iv) = iv {
                if !iv.is_finite() {
                    return Err(GeneratorError::invalid(format!("{name} must be finite")));
                }
                if !iv.is_sampleable() {
                    return Err(GeneratorError::invalid(format!("{name} width overflows f64")));
                }
            }
        }
        Ok(())
    }
}

/// Builder methods for specs that carry a `CoordDomain` at the given field path.
macro_rules! impl_domain_builders {
    ($ty:ty, $($field:ident).+) => {
        impl $ty {
            /// Restrict X and Y to `bounds`.
            pub fn within(mut self, bounds: $crate::geom::Bounds2) -> Self {
                self.$($field).+.bounds = Some(bounds);
                self
            }
            pub fn x_range(mut self, min: f64, max: f64) -> Self {
                self.$($field).+.set_x_range(min, max);
                self
            }
            pub fn y_range(mut self, min: f64, max: f64) -> Self {
                self.$($field).+.set_y_range(min, max);
                self
            }
            pub fn z_range(mut self, min: f64, max: f64) -> Self {
                self.$($field).+.z_range = Some($crate::geom::Interval::new(min, max));
                self
            }
            pub fn m_range(mut self, min: f64, max: f64) -> Self {
                self.$($field).+.m_range = Some($crate::geom::Interval::new(min, max));
                self
            }
            pub fn dims(mut self, dims: $crate::geom::Dims) -> Self {
                self.$($field).+.dims = dims;
                self
            }
            pub fn domain(&self) -> &$crate::gen::CoordDomain {
                &self.$($field).+
            }
            /// Replace the whole sampling domain.
            pub fn with_domain(mut self, domain: $crate::gen::CoordDomain) -> Self {
                self.$($field).+ = domain;
                self
            }
        }
    };
}
pub(crate) use impl_domain_builders;

/// Single-coordinate generator with optional pinned ordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordSpec {
    pub(crate) domain: CoordDomain,
    longitude: Option<f64>,
    latitude: Option<f64>,
    altitude: Option<f64>,
    measure: Option<f64>,
}

impl_domain_builders!(CoordSpec, domain);

impl CoordSpec {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn longitude(mut self, x: f64) -> Self {
        self.longitude = Some(x);
        self
    }
    pub fn latitude(mut self, y: f64) -> Self {
        self.latitude = Some(y);
        self
    }
    /// Pins Z; the coordinate carries Z even when `dims` does not ask for it.
    pub fn altitude(mut self, z: f64) -> Self {
        self.altitude = Some(z);
        self
    }
    /// Pins M; the coordinate carries M even when `dims` does not ask for it.
    pub fn measure(mut self, m: f64) -> Self {
        self.measure = Some(m);
        self
    }

    fn pinned_xy(&self) -> bool {
        self.longitude.is_some() || self.latitude.is_some()
    }
}

impl Generator for CoordSpec {
    type Output = Coord;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, GeneratorError> {
        self.domain.check()?;
        // Bounds only apply while neither X nor Y is pinned.
        let mut c = match (&self.domain.bounds, self.pinned_xy()) {
            (Some(b), false) => sample_coord(rng, Some(b)),
            _ => {
                let x = match self.longitude {
                    Some(x) => x,
                    None => uniform(rng, WGS84_X),
                };
                let y = match self.latitude {
                    Some(y) => y,
                    None => uniform(rng, WGS84_Y),
                };
                Coord::new(x, y)
            }
        };
        c.z = match self.altitude {
            Some(z) => Some(z),
            None if self.domain.dims.has_z() => {
                Some(uniform(rng, self.domain.z_range.unwrap_or(DEFAULT_ZM)))
            }
            None => None,
        };
        c.m = match self.measure {
            Some(m) => Some(m),
            None if self.domain.dims.has_m() => {
                Some(uniform(rng, self.domain.m_range.unwrap_or(DEFAULT_ZM)))
            }
            None => None,
        };
        Ok(c)
    }
}
