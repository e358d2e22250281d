mod test_utils;

use polygon2d::{
    core::{Control, math::Vector2, traits::FuzzyEq},
    polygon,
    polygon::{
        IntersectionRecord, PolygonSource, SelfIntersectOptions, VertexTag,
        internal::poly_intersects::cmp_boundary_params,
    },
};
use std::cmp::Ordering;
use test_utils::{figure_eight, l_shape, nested_loops, pentagram, sibling_loops, square_4};

#[test]
fn simple_polygons_have_none() {
    for polygon in [square_4(), l_shape(), polygon![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]] {
        assert!(polygon.self_intersects().is_empty());
        assert!(!polygon.has_self_intersects());
    }
}

#[test]
fn figure_eight_crossing() {
    let polygon = figure_eight();
    let intersects = polygon.self_intersects();
    assert_eq!(intersects.len(), 1);

    let intr = intersects[0];
    assert!(intr.point.fuzzy_eq(Vector2::new(1.0, 1.0)));
    assert_eq!((intr.s, intr.b), (0.5, 2.5));
    assert_eq!((intr.start_edge, intr.far_edge), (0, 2));

    let v = intr.to_vertex();
    assert_eq!(v.tag, Some(VertexTag::SelfIntersection));
    assert_eq!(v.boundary.map(|p| (p.s, p.b)), Some((0.5, 2.5)));
}

#[test]
fn pentagram_crossings_are_sorted() {
    let polygon = pentagram(10.0);
    let intersects = polygon.self_intersects();
    assert_eq!(intersects.len(), 5);
    for pair in intersects.windows(2) {
        assert_ne!(cmp_boundary_params(&pair[0], &pair[1]), Ordering::Greater);
    }

    let n = polygon.vertex_count() as f64;
    for intr in intersects.iter() {
        assert!(intr.s < intr.b);
        assert!(intr.s >= 0.0 && intr.b < n);
        assert_eq!(intr.s.floor() as usize, intr.start_edge);
        assert_eq!(intr.b.floor() as usize, intr.far_edge);
        // boundary parameters map back onto the intersect point
        let start = polygon.at(intr.start_edge).pos();
        let end = polygon.at(polygon.next_wrapping_index(intr.start_edge)).pos();
        let t = intr.s - intr.start_edge as f64;
        assert!((start + (end - start).scale(t)).fuzzy_eq_eps(intr.point, 1e-9));
    }
}

#[test]
fn crossing_through_shared_vertex_is_recorded_once() {
    // (2, 2) is visited twice, edges meeting there only count at their start point
    let polygon = polygon![
        (0.0, 0.0),
        (2.0, 2.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (2.0, 2.0),
        (0.0, 4.0)
    ];
    let intersects = polygon.self_intersects();
    assert_eq!(intersects.len(), 1);
    assert!(intersects[0].point.fuzzy_eq(Vector2::new(2.0, 2.0)));
    assert_eq!((intersects[0].s, intersects[0].b), (1.0, 4.0));
}

#[test]
fn multiple_loops() {
    let nested = nested_loops().self_intersects();
    let params: Vec<_> = nested.iter().map(|i| (i.s, i.b)).collect();
    assert_eq!(params, vec![(0.5, 4.5), (1.5, 3.5)]);

    let siblings = sibling_loops().self_intersects();
    let params: Vec<_> = siblings.iter().map(|i| (i.s, i.b)).collect();
    assert_eq!(params, vec![(0.5, 2.5), (3.5, 5.5)]);
}

#[test]
fn visit_can_stop_early() {
    let polygon = pentagram(10.0);
    let mut count = 0;
    let result = polygon.visit_self_intersects(&mut |intr: IntersectionRecord<f64>| {
        count += 1;
        Control::Break(intr.point)
    });

    assert_eq!(count, 1);
    assert!(matches!(result, Control::Break(_)));

    let mut all = 0;
    let _: () = polygon.visit_self_intersects(&mut |_| all += 1);
    assert_eq!(all, 5);
}

#[test]
fn provided_spatial_index_is_used() {
    let polygon = pentagram(3.0);
    let index = polygon.create_aabb_index();
    let options = SelfIntersectOptions {
        aabb_index: Some(&index),
        ..Default::default()
    };

    assert_eq!(polygon.self_intersects_opt(&options), polygon.self_intersects());
}
