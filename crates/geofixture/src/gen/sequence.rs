//! Sequence builder: ordered coordinate lists of bounded length.
//!
//! - A non-empty explicit list is returned verbatim; length and bounds are ignored.
//! - Otherwise `count` is drawn uniformly from the length range (or fixed) and the
//!   coordinate sampler is called `count` times. Draw order defines the path.
//! - Length validation happens in the builder, not at generation time.

use super::coord::{impl_domain_builders, CoordDomain};
use super::{ConfigError, Generator, GeneratorError};
use crate::geom::{Coord, CoordSeq};
use rand::Rng;

/// Inclusive `[min, max]` count range with `1 <= min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

/// Default length range for bare sequences.
pub const DEFAULT_SEQUENCE_LENGTH: LengthRange = LengthRange::new_unchecked(1, 10);

impl LengthRange {
    pub fn fixed(n: usize) -> Result<Self, ConfigError> {
        if n < 1 {
            return Err(ConfigError::LengthBelowOne);
        }
        Ok(Self { min: n, max: n })
    }

    pub fn between(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min < 1 {
            return Err(ConfigError::MinBelowOne);
        }
        if max < min {
            return Err(ConfigError::MaxBelowMin);
        }
        Ok(Self { min, max })
    }

    pub(crate) const fn new_unchecked(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
    #[inline]
    pub fn contains(&self, n: usize) -> bool {
        self.min <= n && n <= self.max
    }

    /// Fixed ranges consume no entropy.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.is_fixed() {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    /// Same range with both ends raised to at least `floor`.
    pub(crate) fn clamped_min(self, floor: usize) -> Self {
        let min = self.min.max(floor);
        Self {
            min,
            max: self.max.max(min),
        }
    }
}

/// Build a coordinate sequence.
///
/// A non-empty `overrides` wins outright; otherwise draws `range.sample()` coordinates
/// from `domain` in order.
pub fn build_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    range: LengthRange,
    domain: &CoordDomain,
    overrides: Option<&CoordSeq>,
) -> CoordSeq {
    if let Some(seq) = overrides.filter(|s| !s.is_empty()) {
        return seq.clone();
    }
    let count = range.sample(rng);
    let coords: Vec<Coord> = (0..count).map(|_| domain.sample(rng)).collect();
    CoordSeq::new(coords)
}

/// Which input a `SequenceSpec` builds from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequenceSource<'a> {
    Explicit(&'a CoordSeq),
    Random(LengthRange),
}

/// Coordinate-sequence generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceSpec {
    pub(crate) domain: CoordDomain,
    pub(crate) length: Option<LengthRange>,
    pub(crate) coordinates: Option<CoordSeq>,
}

impl_domain_builders!(SequenceSpec, domain);

impl SequenceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed length. Errors if `n < 1` or a non-empty coordinate list is set.
    pub fn length(self, n: usize) -> Result<Self, ConfigError> {
        let range = LengthRange::fixed(n)?;
        self.with_length(range)
    }

    /// Length range. Errors if `min < 1`, `max < min`, or a coordinate list is set.
    pub fn length_between(self, min: usize, max: usize) -> Result<Self, ConfigError> {
        let range = LengthRange::between(min, max)?;
        self.with_length(range)
    }

    fn with_length(mut self, range: LengthRange) -> Result<Self, ConfigError> {
        if self.has_coordinates() {
            return Err(ConfigError::LengthWithCoordinates);
        }
        self.length = Some(range);
        Ok(self)
    }

    /// Explicit coordinates. Errors if a length was already configured.
    pub fn coordinates(mut self, coords: impl Into<CoordSeq>) -> Result<Self, ConfigError> {
        let coords = coords.into();
        if self.length.is_some() && !coords.is_empty() {
            return Err(ConfigError::LengthWithCoordinates);
        }
        self.coordinates = Some(coords);
        Ok(self)
    }

    fn has_coordinates(&self) -> bool {
        self.coordinates.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn length_range(&self) -> LengthRange {
        self.length.unwrap_or(DEFAULT_SEQUENCE_LENGTH)
    }

    pub fn source(&self) -> SequenceSource<'_> {
        match self.coordinates.as_ref().filter(|c| !c.is_empty()) {
            Some(seq) => SequenceSource::Explicit(seq),
            None => SequenceSource::Random(self.length_range()),
        }
    }
}

impl Generator for SequenceSpec {
    type Output = CoordSeq;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CoordSeq, GeneratorError> {
        match self.source() {
            SequenceSource::Explicit(seq) => Ok(seq.clone()),
            SequenceSource::Random(range) => {
                self.domain.check()?;
                Ok(build_sequence(rng, range, &self.domain, None))
            }
        }
    }
}
