//! Ring closure: the only way to obtain a `Ring`.
//!
//! Rules
//! - Fewer than 3 coordinates, or fewer than 3 distinct leading coordinates, is degenerate.
//! - An already-closed input (first == last, component-wise) needs at least 4 coordinates
//!   and is kept as-is.
//! - An open input gets a copy of its first coordinate appended (Z and M included).
//!
//! The input slice is never modified; the ring owns a fresh vector.

use super::shapes::Ring;
use super::types::Coord;
use std::fmt;

/// Structural invariant violations raised while closing a ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingError {
    /// Fewer than 3 distinct leading coordinates.
    Degenerate { len: usize, distinct: usize },
    /// Closed, but shorter than the 4 coordinates a ring needs.
    TooShort { len: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { len, distinct } => write!(
                f,
                "degenerate ring: {distinct} distinct of {len} coordinates, need at least 3"
            ),
            Self::TooShort { len } => {
                write!(f, "ring too short: {len} coordinates, need at least 4")
            }
        }
    }
}

impl std::error::Error for RingError {}

/// Close `seq` into a ring.
pub fn close_ring(seq: &[Coord]) -> Result<Ring, RingError> {
    let len = seq.len();
    let (first, last) = match (seq.first(), seq.last()) {
        (Some(f), Some(l)) if len >= 3 => (f, l),
        _ => {
            return Err(RingError::Degenerate {
                len,
                distinct: distinct_prefix(seq, 3),
            })
        }
    };
    let closed = first == last;
    if closed && len < 4 {
        return Err(RingError::TooShort { len });
    }
    let open = if closed { &seq[..len - 1] } else { seq };
    let distinct = distinct_prefix(open, 3);
    if distinct < 3 {
        return Err(RingError::Degenerate { len, distinct });
    }
    let mut coords = Vec::with_capacity(open.len() + 1);
    coords.extend_from_slice(open);
    coords.push(*first);
    Ok(Ring { coords })
}

/// Number of distinct coordinates in `seq`, counting stops at `cap`.
fn distinct_prefix(seq: &[Coord], cap: usize) -> usize {
    let mut seen: Vec<&Coord> = Vec::with_capacity(cap);
    for c in seq {
        if !seen.iter().any(|s| *s == c) {
            seen.push(c);
            if seen.len() >= cap {
                break;
            }
        }
    }
    seen.len()
}
