use rand::rngs::StdRng;
use rand::SeedableRng;
use tagsheet_core::{
    arena_layout, build_requests, touches, ArenaParams, Canvas, ConfigError, LayoutError,
    LayoutOptions, LayoutStrategy, ParseError, PlacedTag, Point,
};

fn pairwise_min_distance(placed: &[PlacedTag]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            best = best.min(nalgebra::distance(&a.center, &b.center));
        }
    }
    best
}

#[test]
fn arena_invariants_hold_across_seeds() {
    let requests = build_requests(&["tag36h11:15:0-20", "tag16h5:10"]).expect("requests");
    let canvas = Canvas::default();
    let area = canvas.usable_area().expect("area");
    let separation = 15.0 * std::f64::consts::SQRT_2;

    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let placed =
            arena_layout(&requests, &canvas, &ArenaParams::new(30), &mut rng).expect("layout");
        assert_eq!(placed.len(), 30);
        assert!(
            pairwise_min_distance(&placed) >= separation,
            "seed {seed}: tags too close"
        );
        assert!(placed.iter().all(|t| area.contains(&t.center)));
        for (i, a) in placed.iter().enumerate() {
            assert!(placed[i + 1..].iter().all(|b| !a.overlaps(b)));
        }
    }
}

#[test]
fn huge_arena_request_reports_capacity_exceeded() {
    let requests = build_requests(&["tag36h11:100"]).expect("requests");
    let strategy = LayoutOptions {
        arena_number: 10_000,
        seed: Some(1),
        ..LayoutOptions::default()
    }
    .strategy()
    .expect("strategy");

    let err = strategy
        .layout(&requests, &Canvas::new(210.0, 297.0, 20.0))
        .unwrap_err();
    assert!(matches!(
        err,
        LayoutError::CapacityExceeded {
            requested: 10_000,
            ..
        }
    ));
}

#[test]
fn conflicting_layout_selection_fails_before_layout() {
    let opts = LayoutOptions {
        column_number: 4,
        arena_number: 10,
        ..LayoutOptions::default()
    };
    assert!(matches!(
        opts.strategy(),
        Err(ConfigError::BothLayouts { .. })
    ));
}

#[test]
fn column_layout_places_every_code_once() {
    let requests = build_requests(&["tag16h5:12", "tag36h11:12:100-140"]).expect("requests");
    let strategy = LayoutStrategy::Column(tagsheet_core::ColumnParams::new(3));
    let placed = strategy
        .layout(&requests, &Canvas::default())
        .expect("layout");
    assert_eq!(placed.len(), 70);

    let mut ids: Vec<(&str, usize)> = placed.iter().map(|t| (t.family.name, t.index)).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 70);
}

#[test]
fn touches_is_symmetric() {
    let p = Point::new(12.0, -4.0);
    let q = Point::new(15.5, 1.25);
    for r in [0.1, 5.0, 6.3, 6.4, 100.0] {
        assert_eq!(touches(&[p], q, r), touches(&[q], p, r));
    }
}

#[test]
fn parse_errors_surface_first_failure() {
    let err = build_requests(&["tag36h11:50:9999-"]).unwrap_err();
    assert!(matches!(err, ParseError::IndexOutOfRange { index: 9999, .. }));
    let err = build_requests(&["badfamily:10"]).unwrap_err();
    assert!(matches!(err, ParseError::UnknownFamily(_)));
}
