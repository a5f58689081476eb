use super::*;
use crate::scene::{arrowhead, random_single_notch, regular_polygon, single_notch};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn sorted_coords(points: &[Point]) -> Vec<(f64, f64)> {
    let mut v: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    v.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    v
}

fn expect_split(d: Decomposition) -> Split {
    match d {
        Decomposition::Split(s) => s,
        Decomposition::Convex(_) => panic!("expected a split"),
    }
}

#[test]
fn arrowhead_reflex_vertex_is_index_3() {
    let p = arrowhead().unwrap();
    assert_eq!(find_reflex_vertex(&p, GeomCfg::default()), Some(3));
    assert_eq!(reflex_vertices(&p, GeomCfg::default()), vec![3]);
}

#[test]
fn reversed_arrowhead_flags_the_same_vertex() {
    let mut vs = arrowhead().unwrap().into_vertices();
    vs.reverse();
    let p = Polygon::new(vs).unwrap();
    // (150,150) sits at index 1 after reversal
    let r = find_reflex_vertex(&p, GeomCfg::default()).unwrap();
    assert_eq!(r, 1);
    assert_eq!(p.vertex(r), vector![150.0, 150.0]);
}

#[test]
fn convex_pentagon_has_no_reflex_vertex_and_passes_through() {
    let cfg = GeomCfg::default();
    let ccw = regular_polygon(5, Vector2::zeros(), 10.0, 0.0).unwrap();
    assert_eq!(find_reflex_vertex(&ccw, cfg), None);
    let mut vs = ccw.clone().into_vertices();
    vs.reverse();
    let cw = Polygon::new(vs).unwrap();
    assert_eq!(find_reflex_vertex(&cw, cfg), None);

    let out = split(&ccw, cfg).unwrap();
    assert_eq!(out, Decomposition::Convex(ccw.clone()));
    assert_eq!(out.diagonal(), None);
    assert_eq!(out.parts(), vec![&ccw]);
}

#[test]
fn collinear_vertex_is_not_reflex() {
    let p = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
        .unwrap();
    assert_eq!(find_reflex_vertex(&p, GeomCfg::default()), None);
}

#[test]
fn arrowhead_diagonal_and_parts() {
    let p = arrowhead().unwrap();
    let d = select_diagonal(&p, 3, GeomCfg::default()).unwrap();
    assert_eq!(d, Diagonal { reflex: 3, split: 0 });
    assert_eq!(d.endpoints(&p), (vector![150.0, 150.0], vector![100.0, 200.0]));

    let s = expect_split(split(&p, GeomCfg::default()).unwrap());
    assert_eq!(s.diagonal, d);
    assert_eq!(
        s.first.vertices(),
        &[vector![150.0, 150.0], vector![150.0, 100.0], vector![100.0, 200.0]]
    );
    assert_eq!(
        s.second.vertices(),
        &[
            vector![150.0, 150.0],
            vector![200.0, 200.0],
            vector![150.0, 250.0],
            vector![100.0, 200.0]
        ]
    );
    assert!((s.first.area() - 1250.0).abs() < 1e-9);
    assert!((s.second.area() - 5000.0).abs() < 1e-9);
    // both parts are convex
    assert_eq!(find_reflex_vertex(&s.first, GeomCfg::default()), None);
    assert_eq!(find_reflex_vertex(&s.second, GeomCfg::default()), None);
}

#[test]
fn adjacent_candidates_are_never_valid() {
    let p = arrowhead().unwrap();
    let cfg = GeomCfg::default();
    assert!(!is_valid_diagonal(&p, 3, 2, cfg));
    assert!(!is_valid_diagonal(&p, 3, 4, cfg));
    assert!(!is_valid_diagonal(&p, 3, 3, cfg));
}

#[test]
fn exterior_chord_is_rejected() {
    // 2–4 passes outside, through the notch
    let p = arrowhead().unwrap();
    assert!(!is_valid_diagonal(&p, 2, 4, GeomCfg::default()));
}

#[test]
fn round_trip_covers_every_vertex_once() {
    let p = arrowhead().unwrap();
    let s = expect_split(split(&p, GeomCfg::default()).unwrap());
    let mut joined: Vec<Point> = s.first.vertices().to_vec();
    // drop the shared endpoints from the second arc
    let inner = &s.second.vertices()[1..s.second.len() - 1];
    joined.extend_from_slice(inner);
    assert_eq!(sorted_coords(&joined), sorted_coords(p.vertices()));
}

#[test]
fn split_is_idempotent() {
    let p = arrowhead().unwrap();
    let cfg = GeomCfg::default();
    let a = split(&p, cfg).unwrap();
    let b = split(&p, cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn split_points_validates_input() {
    let cfg = GeomCfg::default();
    let err = split_points(&[vector![0.0, 0.0], vector![1.0, 1.0]], cfg).unwrap_err();
    assert!(matches!(err, SplitError::InvalidPolygon { .. }));
    let ok = split_points(arrowhead().unwrap().vertices(), cfg).unwrap();
    assert_eq!(ok.diagonal(), Some(Diagonal { reflex: 3, split: 0 }));
}

#[test]
fn no_valid_diagonal_is_an_error() {
    // Self-intersecting quadrilateral: vertex 0 turns against the winding and
    // its only candidate (vertex 2) runs outside the loop.
    let p = Polygon::from_xy(&[(0.0, 0.0), (3.0, 2.0), (3.0, 0.0), (0.0, 1.0)]).unwrap();
    let cfg = GeomCfg::default();
    assert_eq!(find_reflex_vertex(&p, cfg), Some(0));
    assert_eq!(
        split(&p, cfg),
        Err(SplitError::NoValidDiagonal { reflex: 0 })
    );
}

#[test]
fn out_of_range_reflex_index_is_rejected() {
    let p = arrowhead().unwrap();
    assert!(matches!(
        select_diagonal(&p, 7, GeomCfg::default()),
        Err(SplitError::InvalidPolygon { .. })
    ));
}

#[test]
fn partition_rejects_degenerate_parts() {
    let p = arrowhead().unwrap();
    let adjacent = Diagonal { reflex: 3, split: 4 };
    assert_eq!(
        partition(&p, Some(adjacent)),
        Err(SplitError::DegenerateSplit { reflex: 3, split: 4 })
    );
    let same = Diagonal { reflex: 2, split: 2 };
    assert!(partition(&p, Some(same)).is_err());
}

#[test]
fn partition_without_diagonal_passes_through() {
    let p = arrowhead().unwrap();
    assert_eq!(partition(&p, None), Ok(Decomposition::Convex(p.clone())));
}

#[test]
fn multiple_notches_use_the_first_reflex_vertex() {
    // square-ish outline with notches at vertices 2 and 5 (counterclockwise)
    let p = Polygon::from_xy(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (3.0, 2.0),
        (4.0, 4.0),
        (0.0, 4.0),
        (1.0, 2.0),
    ])
    .unwrap();
    let cfg = GeomCfg::default();
    assert_eq!(reflex_vertices(&p, cfg), vec![2, 5]);
    let s = expect_split(split(&p, cfg).unwrap());
    assert_eq!(s.diagonal.reflex, 2);
    assert!((s.first.area() + s.second.area() - p.area()).abs() < 1e-9);
}

#[test]
fn seeded_notch_polygons_split_at_the_notch() {
    for seed in 0..32u64 {
        let params = crate::scene::NotchParams::sample(seed);
        let p = random_single_notch(seed).unwrap();
        let d = split(&p, GeomCfg::default()).unwrap().diagonal();
        assert_eq!(d.map(|d| d.reflex), Some(params.notch), "seed {seed}");
    }
}

proptest! {
    #[test]
    fn single_notch_split_properties(
        n in 5usize..14,
        radius in 1.0f64..500.0,
        notch_frac in 0.0f64..1.0,
        depth in 0.05f64..0.25,
        phase in 0.0f64..std::f64::consts::TAU,
    ) {
        let notch = ((notch_frac * n as f64) as usize).min(n - 1);
        let p = single_notch(n, radius, notch, depth, phase).unwrap();
        let cfg = GeomCfg::default();
        prop_assert_eq!(find_reflex_vertex(&p, cfg), Some(notch));

        let out = split(&p, cfg).unwrap();
        prop_assert_eq!(&out, &split(&p, cfg).unwrap());
        let Decomposition::Split(s) = out else {
            panic!("expected a split");
        };
        prop_assert_eq!(s.diagonal.reflex, notch);
        prop_assert!(!p.are_adjacent(s.diagonal.reflex, s.diagonal.split));
        prop_assert!(s.first.len() >= 3 && s.second.len() >= 3);
        prop_assert_eq!(s.first.len() + s.second.len(), n + 2);

        let (r, t) = s.diagonal.endpoints(&p);
        for part in [&s.first, &s.second] {
            prop_assert_eq!(part.vertex(0), r);
            prop_assert_eq!(part.vertex(part.len() - 1), t);
        }
        let area_gap = (s.first.area() + s.second.area() - p.area()).abs();
        prop_assert!(area_gap <= 1e-9 * p.area().max(1.0));
    }
}
