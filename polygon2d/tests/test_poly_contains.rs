mod test_utils;

use polygon2d::{
    core::math::Vector2,
    polygon,
    polygon::{Polygon, PolygonSource, PolygonSourceMut},
    shape::Shape,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use test_utils::{ModifiedPolygonSet, l_shape, plus_sign, regular_polygon, square_4, u_notch};

fn square_10() -> Polygon {
    polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
}

mod contains_point {
    use super::*;

    #[test]
    fn even_odd_agrees_with_winding_number() {
        let mut rng = StdRng::seed_from_u64(1234);
        let polygons = [
            square_4(),
            l_shape(),
            u_notch(),
            plus_sign(),
            regular_polygon(7, 3.0),
        ];

        for input in polygons.iter() {
            ModifiedPolygonSet::new(input, true, false).accept_closure(&mut |polygon, state| {
                let aabb = polygon.aabb();
                for _ in 0..1000 {
                    let point = Vector2::new(
                        rng.gen_range(aabb.min_x - 1.0..aabb.max_x + 1.0),
                        rng.gen_range(aabb.min_y - 1.0..aabb.max_y + 1.0),
                    );
                    let inside = polygon.contains_point(point);
                    let winding = polygon.winding_number(point);
                    assert_eq!(
                        inside,
                        winding != 0,
                        "{point:?} disagrees for {state:?} (winding number {winding})"
                    );
                    if inside {
                        let expected = if state.inverted_direction { -1 } else { 1 };
                        assert_eq!(winding, expected);
                    }
                }
            });
        }
    }

    #[test]
    fn notch_and_arms() {
        let u = u_notch();
        assert!(u.contains_point(Vector2::new(1.0, 5.0)));
        assert!(u.contains_point(Vector2::new(5.0, 5.0)));
        assert!(u.contains_point(Vector2::new(3.0, 1.0)));
        assert!(!u.contains_point(Vector2::new(3.0, 4.0)));
        assert!(!u.contains_point(Vector2::new(7.0, 1.0)));

        let plus = plus_sign();
        assert!(plus.contains_point(Vector2::new(0.0, 0.0)));
        assert!(plus.contains_point(Vector2::new(2.5, 0.5)));
        assert!(!plus.contains_point(Vector2::new(2.0, 2.0)));
    }

    #[test]
    fn winding_number_of_self_intersecting_polygon() {
        // both lobes of a figure eight wind in opposite directions
        let bowtie = polygon![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
        let right = bowtie.winding_number(Vector2::new(1.5, 1.0));
        let left = bowtie.winding_number(Vector2::new(0.5, 1.0));
        assert_eq!(right.abs(), 1);
        assert_eq!(left, -right);
        assert!(bowtie.contains_point(Vector2::new(1.5, 1.0)));
        assert!(bowtie.contains_point(Vector2::new(0.5, 1.0)));
    }
}

mod contains_polygon {
    use super::*;

    #[test]
    fn nested_and_disjoint() {
        let outer = square_10();
        let inner = polygon![(2.0, 2.0), (8.0, 2.0), (5.0, 8.0)];
        assert!(outer.contains_polygon(&inner));
        assert!(!inner.contains_polygon(&outer));

        let mut reversed = outer.clone();
        reversed.invert_direction_mut();
        assert!(reversed.contains_polygon(&inner));

        let disjoint = polygon![(20.0, 20.0), (21.0, 20.0), (21.0, 21.0)];
        assert!(!outer.contains_polygon(&disjoint));
    }

    #[test]
    fn vertexes_inside_but_edge_crosses_notch() {
        let u = u_notch();
        let spanning = polygon![(1.0, 4.0), (5.0, 4.0), (5.0, 5.0), (1.0, 5.0)];
        assert!(
            spanning
                .iter_vertexes()
                .all(|v| u.contains_point(v.pos()))
        );
        assert!(!u.contains_polygon(&spanning));

        let in_base = polygon![(0.5, 0.5), (5.5, 0.5), (5.5, 1.5), (0.5, 1.5)];
        assert!(u.contains_polygon(&in_base));
    }

    #[test]
    fn vertexes_inside_but_edges_cut_corners() {
        let plus = plus_sign();
        let diamond = polygon![(0.0, -2.5), (2.5, 0.0), (0.0, 2.5), (-2.5, 0.0)];
        assert!(
            diamond
                .iter_vertexes()
                .all(|v| plus.contains_point(v.pos()))
        );
        assert!(!plus.contains_polygon(&diamond));

        let center = polygon![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
        assert!(plus.contains_polygon(&center));
    }

    #[test]
    fn touching_the_boundary_is_not_contained() {
        let u = u_notch();
        // top edge runs along the notch bottom and touches both notch walls
        let touching = polygon![(1.0, 1.0), (5.0, 1.0), (5.0, 2.0), (1.0, 2.0)];
        assert!(
            touching
                .iter_vertexes()
                .all(|v| u.contains_point(v.pos()))
        );
        assert!(!u.contains_polygon(&touching));

        let square = square_10();
        assert!(!square.contains_polygon(&square.clone()));
    }

    #[test]
    fn degenerate_inputs() {
        let square = square_10();
        let empty: Polygon = Polygon::new();
        assert!(!square.contains_polygon(&empty));

        let segment = polygon![(0.0, 0.0), (10.0, 10.0)];
        assert!(!segment.contains_polygon(&polygon![(5.0, 5.0)]));

        // a single point candidate only needs its vertex inside
        assert!(square.contains_polygon(&polygon![(5.0, 5.0)]));
    }
}

mod contains_shape {
    use super::*;

    #[test]
    fn circles() {
        let square = square_10();
        assert!(square.contains(&Shape::circle((5.0, 5.0), 2.0)));
        // tangent to all four sides
        assert!(square.contains(&Shape::circle((5.0, 5.0), 5.0)));
        assert!(!square.contains(&Shape::circle((5.0, 5.0), 5.0001)));
        assert!(!square.contains(&Shape::circle((15.0, 5.0), 1.0)));
        assert!(square.contains(&Shape::circle_with([1.0, 1.0], || 0.5 + 0.5)));

        let u = u_notch();
        assert!(!u.contains(&Shape::circle((3.0, 4.0), 0.1)));
        assert!(u.contains(&Shape::circle((1.0, 1.0), 0.9)));
        assert!(!u.contains(&Shape::circle((1.0, 1.0), 1.1)));
    }

    #[test]
    fn rectangles() {
        let plus = plus_sign();
        assert!(plus.contains(&Shape::rect(-0.5, -0.5, 0.5, 0.5)));
        assert!(plus.contains(&Shape::rect(0.5, 0.5, -0.5, -0.5)));
        assert!(plus.contains(&Shape::rect_xywh(-2.5, -0.5, 5.0, 1.0)));
        // corners land outside the arms
        assert!(!plus.contains(&Shape::rect(-2.0, -2.0, 2.0, 2.0)));
    }

    #[test]
    fn polygons() {
        let square = square_10();
        let triangle = polygon![(1.0, 1.0), (2.0, 1.0), (1.5, 2.0)];
        assert!(square.contains(&Shape::from(&triangle)));
        assert!(square.contains(&Shape::from(vec![(1.0, 1.0), (2.0, 1.0), (1.5, 2.0)])));
        assert!(!square.contains(&Shape::Polygon(square.clone())));
        assert_eq!(
            Shape::rect(0.0, 0.0, 10.0, 10.0).to_polygon(),
            Some(square_10())
        );
        assert_eq!(Shape::circle((0.0, 0.0), 1.0).to_polygon(), None);
    }
}
