//! Random geometry fixtures for tests.
//!
//! Generates syntactically valid points, lines, rings, polygons with holes,
//! multi-geometries, collections and envelopes from small immutable spec values.
//!
//! Layout
//! - `geom`: owned value types and the ring closure invariant.
//! - `gen`: generators, input precedence, hole placement, replayable streams.
//! - `api`: curated re-exports for callers that want one import path.
//!
//! Example
//! ```
//! use geofixture::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let spec = PolygonSpec::new()
//!     .within(Bounds2::new(0.0, 50.0, 0.0, 50.0))
//!     .holes(2);
//! let poly = spec.generate(&mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(poly.holes().len(), 2);
//! ```

pub mod api;
pub mod geom;
pub mod gen;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        close_ring, Bounds2, Coord, CoordSeq, Dims, Geometry, GeometryKind, Polygon, Precision,
        Ring,
    };
    pub use crate::gen::{
        CollectionSpec, ConfigError, CoordSpec, EnvelopeSpec, FixtureStream, Generator,
        GeneratorError, GeometrySpec, LineSpec, MultiLineSpec, MultiPointSpec, MultiPolygonSpec,
        PointSpec, PolygonSpec, ReplayToken, RingSpec, SequenceSpec,
    };
}
