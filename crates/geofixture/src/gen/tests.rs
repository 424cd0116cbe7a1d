use super::*;
use crate::geom::{Bounds2, Coord, Dims, Geometry, GeometryKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn replay_token_regenerates_stream_samples() {
    let spec = PolygonSpec::new()
        .within(Bounds2::new(0.0, 100.0, 0.0, 100.0))
        .holes(2);
    let mut stream = FixtureStream::new(spec, 42);
    let samples: Vec<_> = (0..5).map(|_| stream.generate_next().unwrap()).collect();
    assert_eq!(samples[3].replay, ReplayToken { seed: 42, index: 3 });
    for s in &samples {
        assert_eq!(stream.regenerate(&s.replay).unwrap(), s.value);
    }
    assert_ne!(samples[0].value, samples[1].value);
}

#[test]
fn different_seeds_give_different_streams() {
    let a = ReplayToken { seed: 1, index: 0 };
    let b = ReplayToken { seed: 2, index: 0 };
    let spec = LineSpec::new().length(5).unwrap();
    assert_ne!(
        spec.generate_seeded(a).unwrap(),
        spec.generate_seeded(b).unwrap()
    );
}

#[test]
fn absent_source_falls_back_to_default() {
    let spec = PointSpec::new().within(Bounds2::new(0.0, 50.0, 0.0, 50.0));
    let c = spec.generate_or_default(None).unwrap();
    assert!(spec.domain().bounds.unwrap().contains(&c));

    let mut rng = StdRng::seed_from_u64(9);
    let dyn_rng: &mut dyn rand::RngCore = &mut rng;
    let c = spec.generate_or_default(Some(dyn_rng)).unwrap();
    assert!(c.x() >= 0.0 && c.x() <= 50.0);
}

#[test]
fn same_spec_is_shared_across_threads() {
    let spec = std::sync::Arc::new(CollectionSpec::new().length(3).unwrap());
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let spec = std::sync::Arc::clone(&spec);
            std::thread::spawn(move || spec.generate_seeded(ReplayToken { seed, index: 0 }))
        })
        .collect();
    for h in handles {
        let g = h.join().unwrap().unwrap();
        assert_eq!(g.num_members(), 3);
    }
}

#[test]
fn error_messages_and_sources() {
    let e = GeneratorError::from(ConfigError::MaxBelowMin);
    assert_eq!(e.to_string(), "max must be >= min");
    assert!(std::error::Error::source(&e).is_some());

    let bad = PointSpec::new().within(Bounds2::new(f64::NEG_INFINITY, 1.0, 0.0, 1.0));
    let e = bad.generate(&mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(e.to_string().starts_with("invalid generator params"));

    let bad = LineSpec::new().precision(Precision::Fixed { scale: 0.0 });
    assert!(matches!(
        bad.generate(&mut StdRng::seed_from_u64(1)),
        Err(GeneratorError::InvalidParams { .. })
    ));
}

#[test]
fn overflowing_extents_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let wide = Bounds2::new(-f64::MAX, f64::MAX, 0.0, 1.0);
    let e = PointSpec::new().within(wide).generate(&mut rng).unwrap_err();
    assert_eq!(
        e.to_string(),
        "invalid generator params: bounding rectangle extent overflows f64"
    );

    let huge = Bounds2::new(-1e308, 1e308, -1e308, 1e308);
    let e = PolygonSpec::new().within(huge).holes(1).generate(&mut rng);
    assert!(matches!(e, Err(GeneratorError::InvalidParams { .. })));

    let e = PointSpec::new()
        .dims(Dims::Xyz)
        .z_range(-f64::MAX, f64::MAX)
        .generate(&mut rng)
        .unwrap_err();
    assert_eq!(
        e.to_string(),
        "invalid generator params: z_range width overflows f64"
    );

    let large = Bounds2::new(-1e307, 1e307, 0.0, 1.0);
    let c = PointSpec::new().within(large).generate(&mut rng).unwrap();
    assert!(large.contains(&c));
}

#[test]
fn nan_bounds_are_rejected_not_repaired() {
    let mut rng = StdRng::seed_from_u64(1);
    let b = Bounds2::new(f64::NAN, 10.0, 0.0, 10.0);
    assert!(!b.is_finite());
    let e = PointSpec::new().within(b).generate(&mut rng).unwrap_err();
    assert_eq!(
        e.to_string(),
        "invalid generator params: bounding rectangle must have finite components"
    );
    assert!(LineSpec::new().x_range(0.0, f64::NAN).generate(&mut rng).is_err());
    assert!(PointSpec::new()
        .dims(Dims::Xym)
        .m_range(f64::NAN, 1.0)
        .generate(&mut rng)
        .is_err());
}

#[test]
fn heterogeneous_default_run() {
    // Mixed collection with no directives: 2..=6 members, each point, line or polygon.
    let mut rng = StdRng::seed_from_u64(77);
    let mut mixed_seen = 0;
    for _ in 0..200 {
        let g = CollectionSpec::new().generate(&mut rng).unwrap();
        if let Geometry::Collection(members) = &*g {
            mixed_seen += 1;
            assert!((2..=6).contains(&members.len()));
            assert!(members.iter().all(|m| matches!(
                m.kind(),
                GeometryKind::Point | GeometryKind::LineString | GeometryKind::Polygon
            )));
        }
    }
    assert!(mixed_seen > 0);
}

#[test]
fn coord_spec_and_envelope_compose() {
    let mut rng = StdRng::seed_from_u64(5);
    let env = EnvelopeSpec::new()
        .corners(Coord::new(0.0, 0.0), Coord::new(-3.0, 3.0))
        .generate(&mut rng)
        .unwrap();
    let c = CoordSpec::new().within(env).generate(&mut rng).unwrap();
    assert!(env.contains(&c));
}
