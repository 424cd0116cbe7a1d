//! Curated API surface.
//!
//! One flat import path for the CLI and integration tests. Breaking changes follow the
//! crate version.

// Value model
pub use crate::geom::{
    close_ring, Bounds2, Coord, CoordSeq, Dims, Geometry, GeometryKind, Interval, Polygon,
    Precision, Ring, RingError, Segment, Triangle, DEFAULT_PRECISION, DEFAULT_ZM, WGS84_X,
    WGS84_Y,
};
// Generator building blocks
pub use crate::gen::{
    build_sequence, first_present, hole_bounds, sample_coord, ConfigError, CoordDomain,
    FixtureSample, FixtureStream, Generator, GeneratorError, LengthRange, ReplayToken,
};
// Generators and their resolved sources
pub use crate::gen::{
    CollectionKind, CollectionSource, CollectionSpec, CoordSpec, EnvelopeSource, EnvelopeSpec,
    GeometrySource, GeometrySpec, LineSpec, MemberKind, MultiLineSpec, MultiPointSpec,
    MultiPolygonSpec, MultiSource, PointSource, PointSpec, PolygonSource, PolygonSpec,
    RingSource, RingSpec, SegmentSource, SegmentSpec, SequenceSource, SequenceSpec,
    TriangleSource, TriangleSpec,
};
