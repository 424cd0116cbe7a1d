//! Random geometry generators.
//!
//! Purpose
//! - Produce syntactically valid, randomly parameterized fixtures: points, lines, rings,
//!   polygons with holes, homogeneous multi-geometries and mixed collections.
//! - Every generator is an immutable spec value plus one pure `generate(rng)` call.
//!
//! Why this design
//! - Optional construction inputs are resolved in a fixed order by each spec's `source()`,
//!   which returns a small enum naming the branch taken (see `resolve`).
//! - The random source is threaded through explicitly. Callers without one use
//!   `generate_default`, which builds a single entropy-seeded `StdRng` at the boundary.
//! - `FixtureStream` pairs every sample with a `ReplayToken` so a failing fixture can be
//!   regenerated bit-for-bit.
//!
//! Code cross-refs: `sample_coord`, `build_sequence`, `hole_bounds`, `first_present`

mod collection;
mod coord;
mod envelope;
mod geometry;
mod holes;
mod multi;
mod polygon;
mod primitive;
mod resolve;
mod sequence;

pub use collection::{
    CollectionKind, CollectionSource, CollectionSpec, MemberKind, DEFAULT_MIXED_COUNT,
};
pub use coord::{sample_coord, CoordDomain, CoordSpec};
pub use envelope::{EnvelopeSource, EnvelopeSpec};
pub use geometry::{GeometrySource, GeometrySpec, ANY_KINDS};
pub use holes::{hole_bounds, HOLE_BASE_SCALE, HOLE_VARIATION_SCALE};
pub use multi::{
    MultiLineSpec, MultiPointSpec, MultiPolygonSpec, MultiSource, DEFAULT_MULTI_LINE_COUNT,
    DEFAULT_MULTI_POINT_COUNT, DEFAULT_MULTI_POLYGON_COUNT,
};
pub use polygon::{PolygonSource, PolygonSpec, DEFAULT_HOLE_VERTICES, DEFAULT_POLYGON_VERTICES};
pub use primitive::{
    LineSpec, PointSource, PointSpec, RingSource, RingSpec, SegmentSource, SegmentSpec,
    TriangleSource, TriangleSpec,
    DEFAULT_LINE_LENGTH, DEFAULT_RING_VERTICES, MIN_RING_VERTICES,
};
pub use resolve::first_present;
pub use sequence::{
    build_sequence, LengthRange, SequenceSource, SequenceSpec, DEFAULT_SEQUENCE_LENGTH,
};

use crate::geom::{Bounds2, Precision, RingError};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;

/// Configuration errors, raised by the builder call that introduces the conflict.
///
/// `Display` renders the exact compatibility messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    LengthBelowOne,
    MinBelowOne,
    MaxBelowMin,
    LengthWithCoordinates,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LengthBelowOne => "length must be >= 1",
            Self::MinBelowOne => "min must be >= 1",
            Self::MaxBelowMin => "max must be >= min",
            Self::LengthWithCoordinates => "can't specify length and coordinate list",
        })
    }
}

impl std::error::Error for ConfigError {}

/// Error type shared by all generators.
#[derive(Debug)]
pub enum GeneratorError {
    Config(ConfigError),
    Ring(RingError),
    InvalidParams { reason: String },
}

impl GeneratorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Ring(e) => write!(f, "{e}"),
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Ring(e) => Some(e),
            Self::InvalidParams { .. } => None,
        }
    }
}

impl From<ConfigError> for GeneratorError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RingError> for GeneratorError {
    fn from(e: RingError) -> Self {
        Self::Ring(e)
    }
}

/// Common trait for fixture generators.
pub trait Generator {
    type Output;

    /// Draw one value. Reads `self`, consumes entropy from `rng`, nothing else.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output, GeneratorError>;

    /// Draw from the RNG a replay token expands to.
    fn generate_seeded(&self, token: ReplayToken) -> Result<Self::Output, GeneratorError> {
        let mut rng = token.to_std_rng();
        self.generate(&mut rng)
    }

    /// Draw from a fresh entropy-seeded source.
    fn generate_default(&self) -> Result<Self::Output, GeneratorError> {
        let mut rng = StdRng::from_entropy();
        self.generate(&mut rng)
    }

    /// Use `rng` when present, otherwise fall back to `generate_default`.
    fn generate_or_default(
        &self,
        rng: Option<&mut dyn RngCore>,
    ) -> Result<Self::Output, GeneratorError> {
        match rng {
            Some(r) => self.generate(r),
            None => self.generate_default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A single fixture plus the token that regenerates it.
#[derive(Clone, Debug)]
pub struct FixtureSample<T> {
    pub value: T,
    pub replay: ReplayToken,
}

/// Indexed, replayable stream over one generator spec.
pub struct FixtureStream<G> {
    spec: G,
    seed: u64,
    next_index: u64,
}

impl<G: Generator> FixtureStream<G> {
    pub fn new(spec: G, seed: u64) -> Self {
        Self {
            spec,
            seed,
            next_index: 0,
        }
    }

    pub fn spec(&self) -> &G {
        &self.spec
    }

    pub fn generate_next(&mut self) -> Result<FixtureSample<G::Output>, GeneratorError> {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        let value = self.spec.generate_seeded(replay)?;
        Ok(FixtureSample { value, replay })
    }

    pub fn regenerate(&self, replay: &ReplayToken) -> Result<G::Output, GeneratorError> {
        self.spec.generate_seeded(*replay)
    }
}

/// Bounds must be finite, with a finite extent, to sample from them.
pub(crate) fn check_bounds(bounds: Option<&Bounds2>) -> Result<(), GeneratorError> {
    match bounds {
        Some(b) if !b.is_finite() => Err(GeneratorError::invalid(
            "bounding rectangle must have finite components",
        )),
        Some(b) if !b.is_sampleable() => Err(GeneratorError::invalid(
            "bounding rectangle extent overflows f64",
        )),
        _ => Ok(()),
    }
}

pub(crate) fn check_precision(p: &Precision) -> Result<(), GeneratorError> {
    if p.is_valid() {
        Ok(())
    } else {
        Err(GeneratorError::invalid(
            "fixed precision scale must be finite and positive",
        ))
    }
}

#[cfg(test)]
mod tests;
