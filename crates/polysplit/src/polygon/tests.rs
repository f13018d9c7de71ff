use super::*;
use crate::line::Line;
use crate::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use crate::vector::Vec2;
use nalgebra::vector;
use proptest::prelude::*;

fn square() -> Polygon {
    Polygon::from(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ])
}

/// L-shaped hexagon, area 7, with the notch at (1, 1).
fn ell() -> Polygon {
    Polygon::from(vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 4.0],
        vector![0.0, 4.0],
    ])
}

fn approx(p: Vec2, q: Vec2) -> bool {
    (p - q).norm() < 1e-9
}

fn not_enough(operation: &'static str, required: usize, found: usize) -> PolygonError {
    PolygonError::NotEnoughPoints {
        operation,
        required,
        found,
    }
}

#[test]
fn area_and_winding() {
    let sq = square();
    assert_eq!(sq.signed_area(), -4.0);
    assert_eq!(sq.area(), 4.0);
    assert!(sq.is_clockwise().unwrap());

    let ccw = sq.reversed();
    assert_eq!(ccw.signed_area(), 4.0);
    assert!(!ccw.is_clockwise().unwrap());
    assert_eq!(ccw.to_clockwise().unwrap(), sq.reversed().reversed());

    assert_eq!(Polygon::new().signed_area(), 0.0);
    let segment = Polygon::from(vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
    assert_eq!(segment.signed_area(), 0.0);
}

#[test]
fn winding_needs_two_vertices() {
    let single = Polygon::from(vec![vector![1.0, 1.0]]);
    assert_eq!(
        single.is_clockwise().unwrap_err(),
        not_enough("is_clockwise", 2, 1)
    );
}

#[test]
fn distance_to_boundary() {
    let sq = square();
    assert!((sq.distance_to(vector![2.0, 3.0]).unwrap() - 1.0).abs() < 1e-12);
    assert!((sq.distance_to(vector![1.0, 1.0]).unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(
        Polygon::new().distance_to(vector![1.0, 1.0]).unwrap_err(),
        not_enough("distance_to", 2, 0)
    );
}

#[test]
fn nearest_boundary_point() {
    let sq = square();
    assert!(approx(sq.nearest_point(vector![3.0, 3.0]).unwrap(), vector![2.0, 2.0]));
    assert!(approx(sq.nearest_point(vector![1.0, 1.1]).unwrap(), vector![1.0, 2.0]));
    assert!(Polygon::new().nearest_point(vector![1.0, 1.0]).is_err());
}

#[test]
fn center_is_vertex_mean() {
    assert!(approx(square().center().unwrap(), vector![1.0, 1.0]));
    assert_eq!(
        Polygon::new().center().unwrap_err(),
        not_enough("center", 1, 0)
    );
}

#[test]
fn split_nearest_edge_inserts_projection() {
    let mut sq = square();
    assert_eq!(sq.split_nearest_edge(vector![4.0, 1.0]).unwrap(), Some(2));
    assert_eq!(sq.len(), 5);
    assert!(approx(sq[2], vector![2.0, 1.0]));
    assert!(approx(sq[3], vector![2.0, 2.0]));
}

#[test]
fn split_nearest_edge_skips_existing_vertex() {
    let mut sq = square();
    assert_eq!(sq.split_nearest_edge(vector![4.0, 4.0]).unwrap(), None);
    assert_eq!(sq, square());
}

#[test]
fn split_nearest_edge_on_closing_edge() {
    // Nearest edge is the wraparound (0,2) -> (0,0); the new vertex goes last.
    let mut sq = square();
    assert_eq!(sq.split_nearest_edge(vector![-1.0, 1.5]).unwrap(), Some(4));
    assert_eq!(sq.len(), 5);
    assert!(approx(sq[4], vector![0.0, 1.5]));
}

#[test]
fn point_containment() {
    let sq = square();
    assert!(sq.contains_point(vector![1.0, 1.0]).unwrap());
    assert!(!sq.contains_point(vector![-1.0, 1.0]).unwrap());
    assert!(!sq.contains_point(vector![1.0, 3.0]).unwrap());

    let l = ell();
    assert!(l.contains_point(vector![0.5, 3.0]).unwrap());
    assert!(!l.contains_point(vector![2.5, 2.5]).unwrap());

    let segment = Polygon::from(vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
    assert_eq!(
        segment.contains_point(vector![0.5, 0.5]).unwrap_err(),
        not_enough("contains_point", 3, 2)
    );
}

#[test]
fn segment_containment() {
    let sq = square();
    let inside = Line::new(vector![0.5, 0.5], vector![1.5, 1.5]);
    assert!(sq.contains_segment(&inside, 0, 2).unwrap());

    // Leaves through the right edge (index 1).
    let leaving = Line::new(vector![1.0, 1.0], vector![3.0, 1.0]);
    assert!(!sq.contains_segment(&leaving, 0, 2).unwrap());
    let outside = Line::new(vector![-1.0, 1.0], vector![-0.5, 1.0]);
    assert!(!sq.contains_segment(&outside, 0, 2).unwrap());

    // Across the notch of the L: both endpoints inside, the middle is not.
    let l = ell();
    let across = Line::new(vector![3.0, 0.5], vector![0.5, 3.0]);
    assert!(!l.contains_segment(&across, 0, 4).unwrap());

    // Touching another edge at its endpoint is allowed.
    let diagonal = Line::new(vector![2.0, 0.0], vector![0.0, 2.0]);
    assert!(sq.contains_segment(&diagonal, 0, 2).unwrap());
}

#[test]
fn split_square() {
    let outcome = square().split(3.0).unwrap();
    let split = outcome.into_split().expect("square splits");
    assert!((split.piece.area() - 3.0).abs() < 1e-6);
    assert!((split.remainder.area() - 1.0).abs() < 1e-6);
    assert!((split.piece.area() + split.remainder.area() - 4.0).abs() < 1e-9);
    // The cut is an edge of both parts.
    let pv = split.piece.vertices();
    let rv = split.remainder.vertices();
    for end in [split.cut.start(), split.cut.end()] {
        assert!(pv.iter().any(|v| approx(*v, end)));
        assert!(rv.iter().any(|v| approx(*v, end)));
    }
}

#[test]
fn split_square_in_half_is_straight() {
    let split = square().split(2.0).unwrap().into_split().expect("splits");
    assert!((split.piece.area() - 2.0).abs() < 1e-6);
    assert!((split.remainder.area() - 2.0).abs() < 1e-6);
    // Axis-parallel halves (length 2) beat the diagonal (length 2√2).
    assert!((split.cut.length() - 2.0).abs() < 1e-9);
}

#[test]
fn split_rejects_unreasonable_targets() {
    let sq = square();
    for target in [300.0, 4.0, 4.0 - 1e-7, 0.0, -1.0, f64::NAN] {
        match sq.split(target).unwrap() {
            SplitOutcome::Unsplit(p) => assert_eq!(p, sq),
            SplitOutcome::Split(_) => panic!("target {target} must not split"),
        }
    }
}

#[test]
fn split_needs_three_vertices() {
    let segment = Polygon::from(vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
    assert_eq!(segment.split(0.1).unwrap_err(), not_enough("split", 3, 2));
    assert!(Polygon::new().split(1.0).is_err());
}

#[test]
fn split_counter_clockwise_input() {
    let ccw = square().reversed();
    assert!(!ccw.is_clockwise().unwrap());
    let split = ccw.split(1.0).unwrap().into_split().expect("splits");
    assert!((split.piece.area() - 1.0).abs() < 1e-6);
    assert!((split.remainder.area() - 3.0).abs() < 1e-6);
    assert!(split.piece.is_clockwise().unwrap());
    assert!(split.remainder.is_clockwise().unwrap());
}

#[test]
fn split_concave_stays_inside() {
    let l = ell();
    let split = l.split(2.0).unwrap().into_split().expect("L splits");
    assert!((split.piece.area() - 2.0).abs() < 1e-6);
    assert!((split.remainder.area() - 5.0).abs() < 1e-6);
    assert!(l.contains_point(split.cut.midpoint()).unwrap());
    // A unit-length cut across one arm exists, so nothing longer may win.
    assert!(split.cut.length() <= 1.0 + 1e-9);
}

#[test]
fn split_triangle() {
    let tri = Polygon::from(vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![0.0, 4.0],
    ]);
    let split = tri.split(2.0).unwrap().into_split().expect("splits");
    assert!((split.piece.area() - 2.0).abs() < 1e-6);
    assert!((split.remainder.area() - 6.0).abs() < 1e-6);
}

#[test]
fn partition_square_into_quarters() {
    let part = square().partition(1.0).unwrap();
    assert_eq!(part.pieces.len(), 3);
    assert_eq!(part.cuts.len(), 3);
    for piece in &part.pieces {
        assert!((piece.area() - 1.0).abs() < 1e-6);
    }
    assert!((part.remainder.area() - 1.0).abs() < 1e-6);
}

#[test]
fn partition_with_oversized_piece_is_unsplit() {
    let part = square().partition(10.0).unwrap();
    assert!(part.pieces.is_empty());
    assert_eq!(part.remainder, square());
    assert!(square().partition(0.0).unwrap().pieces.is_empty());
}

#[test]
fn partition_with_tiny_piece_cuts_nothing() {
    for piece_area in [1e-12, 1e-6, f64::NAN] {
        let part = square().partition(piece_area).unwrap();
        assert!(part.pieces.is_empty());
        assert!(part.cuts.is_empty());
        assert_eq!(part.remainder, square());
    }
}

#[test]
fn edges_and_conversions() {
    let sq = square();
    let edges: Vec<Line> = sq.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3].start(), vector![0.0, 2.0]);
    assert_eq!(edges[3].end(), vector![0.0, 0.0]);

    let collected: Polygon = sq.vertices().iter().copied().collect();
    assert_eq!(collected, sq);
    assert_eq!(sq.clone().into_vertices().len(), 4);
}

fn convex_polygon(n: usize, seed: u64) -> Polygon {
    star_polygon(n, 0.0, seed)
}

fn star_polygon(n: usize, radial_jitter: f64, seed: u64) -> Polygon {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.4,
        radial_jitter,
        ..StarCfg::default()
    };
    draw_star_polygon(cfg, ReplayToken { seed, index: 0 })
}

/// Every field of a successful split agrees with `target`.
fn assert_exact_split(poly: &Polygon, target: f64, split: &Split) {
    let total = poly.area();
    assert!(
        (split.piece.area() - target).abs() <= 1e-6,
        "piece {} for target {target} of {poly:?}",
        split.piece.area()
    );
    assert!((split.remainder.area() - (total - target)).abs() <= 1e-6);
    assert!(poly.contains_point(split.cut.midpoint()).unwrap());
}

#[test]
fn deeply_concave_stars_split_to_exact_area() {
    // Deep notches give many edge pairs whose region is a single slanted
    // trapezoid with no corner triangles.
    let mut splits = 0;
    for seed in 0..60 {
        let poly = star_polygon(16, 0.9, seed);
        let total = poly.area();
        for k in 1..20u32 {
            let target = total * f64::from(k) / 20.0;
            if let SplitOutcome::Split(split) = poly.split(target).unwrap() {
                assert_exact_split(&poly, target, &split);
                splits += 1;
            }
        }
    }
    assert!(splits > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn convex_split_hits_target_area(
        n in 3usize..10,
        seed in any::<u64>(),
        frac in 0.05f64..0.95,
        reverse in any::<bool>(),
    ) {
        let mut poly = convex_polygon(n, seed);
        if reverse {
            poly = poly.reversed();
        }
        let total = poly.area();
        let target = frac * total;
        let split = poly.split(target).unwrap().into_split();
        prop_assert!(split.is_some(), "no cut for {:?} at {}", poly, target);
        let split = split.unwrap();
        prop_assert!((split.piece.area() - target).abs() < 1e-6);
        prop_assert!((split.piece.area() + split.remainder.area() - total).abs() < 1e-6);
        prop_assert!(poly.contains_point(split.cut.midpoint()).unwrap());
    }

    #[test]
    fn concave_split_hits_target_area(
        n in 8usize..16,
        radial_jitter in 0.5f64..0.9,
        seed in any::<u64>(),
        frac in 0.05f64..0.95,
        reverse in any::<bool>(),
    ) {
        let mut poly = star_polygon(n, radial_jitter, seed);
        if reverse {
            poly = poly.reversed();
        }
        let total = poly.area();
        let target = frac * total;
        if let SplitOutcome::Split(split) = poly.split(target).unwrap() {
            prop_assert!((split.piece.area() - target).abs() <= 1e-6);
            prop_assert!((split.remainder.area() - (total - target)).abs() <= 1e-6);
            prop_assert!((split.piece.area() + split.remainder.area() - total).abs() <= 2e-6);
            prop_assert!(poly.contains_point(split.cut.midpoint()).unwrap());
        }
    }

    #[test]
    fn winding_agrees_with_signed_area(
        n in 3usize..12,
        seed in any::<u64>(),
        reverse in any::<bool>(),
    ) {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            ..StarCfg::default()
        };
        let mut poly = draw_star_polygon(cfg, ReplayToken { seed, index: 1 });
        if reverse {
            poly = poly.reversed();
        }
        prop_assert_eq!(poly.is_clockwise().unwrap(), poly.signed_area() <= 0.0);
        prop_assert_eq!(poly.is_clockwise().unwrap(), !reverse);
    }

    #[test]
    fn nearest_point_is_no_farther_than_any_vertex(
        n in 3usize..10,
        seed in any::<u64>(),
        x in -3.0f64..3.0,
        y in -3.0f64..3.0,
    ) {
        let poly = convex_polygon(n, seed);
        let p = vector![x, y];
        let d = poly.distance_to(p).unwrap();
        prop_assert!((poly.nearest_point(p).unwrap() - p).norm() - d < 1e-12);
        for v in poly.vertices() {
            prop_assert!(d <= (v - p).norm() + 1e-12);
        }
    }
}
