//! Geometry value model.
//!
//! Purpose
//! - Plain, owned value types for everything the generators produce: coordinates,
//!   rectangles, sequences, rings, polygons and composite geometries.
//! - Structural invariants live here (ring closure); randomness does not.
//!
//! Code cross-refs: `close_ring`, `Geometry`, `Bounds2`

mod ring;
mod shapes;
mod types;

pub use ring::{close_ring, RingError};
pub use shapes::{CoordSeq, Geometry, GeometryKind, Polygon, Ring, Segment, Triangle};
pub use types::{
    Bounds2, Coord, Dims, Interval, Precision, DEFAULT_PRECISION, DEFAULT_ZM, WGS84_X, WGS84_Y,
};
