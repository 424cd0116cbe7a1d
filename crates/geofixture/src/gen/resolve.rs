//! Input precedence.
//!
//! Every generator that accepts more than one optional input lists its candidates in
//! priority order and takes the first present one. Lower-priority inputs set alongside a
//! higher-priority one are ignored: never merged, never an error.
//!
//! | generator         | order (highest first)                                                     |
//! |-------------------|---------------------------------------------------------------------------|
//! | `EnvelopeSpec`    | envelope, corner pair, scalar bounds, single coordinate, random           |
//! | `GeometrySpec`    | point, line string, linear ring, polygon, collection, random kind         |
//! | `CollectionSpec`  | collection, multi-point, multi-line, multi-polygon, members, length, random kind |
//! | `Multi*Spec`      | members, length, random count                                             |
//! | `PolygonSpec`     | exterior ring (+ holes), generated                                        |
//! | `RingSpec`        | coordinate sequence, generated                                            |
//! | `PointSpec`       | coordinate, bounds, default domain                                        |
//! | `SegmentSpec`     | both endpoints, generated                                                 |
//! | `TriangleSpec`    | all three vertices, generated                                             |
//!
//! Each spec exposes `source()` returning an enum that names the branch it resolved to.

/// First `Some` in priority order.
#[inline]
pub fn first_present<T, I>(candidates: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    candidates.into_iter().flatten().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_candidates_win() {
        assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_present([Some(1), Some(2)]), Some(1));
        assert_eq!(first_present::<u8, _>([None, None]), None);
    }
}
