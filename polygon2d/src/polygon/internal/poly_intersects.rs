use crate::{
    core::{
        math::{SegSegIntr, seg_seg_intr},
        traits::{ControlFlow, Real},
    },
    polygon::{IntersectionRecord, PolygonSource, SelfIntersectOptions},
};
use static_aabb2d_index as aabb_index;
use static_aabb2d_index::StaticAABB2DIndex;
use std::cmp::Ordering;

/// Visits all self intersects of the polygon.
///
/// Each unordered pair of non adjacent edges `(i, j)` with `i < j` is tested exactly once, the
/// closing edge pair `(0, n - 1)` counts as adjacent. Candidate pairs come from querying the
/// `aabb_index` (which must hold the edge bounding boxes keyed by edge start index) with each
/// edge's own box.
///
/// Edges are treated as half open: an intersect located at the end point of either edge is
/// skipped because the following edge records it at its start point. Collinear overlapping edges
/// are skipped.
///
/// Boundary parameters are `s = i + |p_i - X| / |p_{i+1} - p_i|` and
/// `b = j + |p_j - X| / |p_{j+1} - p_j|`.
pub fn visit_self_intersects<P, T, C, V>(
    polygon: &P,
    aabb_index: &StaticAABB2DIndex<T>,
    visitor: &mut V,
    pos_equal_eps: T,
) -> C
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
    C: ControlFlow,
    V: FnMut(IntersectionRecord<T>) -> C,
{
    let n = polygon.vertex_count();
    // a triangle only has adjacent edge pairs
    if n < 4 {
        return C::continuing();
    }

    let mut query_stack = Vec::with_capacity(8);
    let fuzz = T::fuzzy_epsilon();

    let mut cf = C::continuing();
    for (box_index, aabb) in aabb_index.item_boxes().iter().enumerate() {
        let i = aabb_index.all_box_indices()[box_index];
        let v1 = polygon.at(i).pos();
        let v2 = polygon.at(polygon.next_wrapping_index(i)).pos();
        let mut query_visitor = |j: usize| {
            // only visit each pair once, skip local edges
            if j <= i + 1 || (i == 0 && j == n - 1) {
                return aabb_index::Control::Continue;
            }

            let u1 = polygon.at(j).pos();
            let u2 = polygon.at(polygon.next_wrapping_index(j)).pos();

            if let SegSegIntr::Intersect { point, .. } = seg_seg_intr(v1, v2, u1, u2, pos_equal_eps)
            {
                if point.fuzzy_eq_eps(v2, pos_equal_eps) || point.fuzzy_eq_eps(u2, pos_equal_eps) {
                    return aabb_index::Control::Continue;
                }

                let s = T::from(i).unwrap() + (v1 - point).length() / (v2 - v1).length();
                let b = T::from(j).unwrap() + (u1 - point).length() / (u2 - u1).length();
                debug_assert!(s < b, "bug: boundary parameters out of order");

                cf = visitor(IntersectionRecord {
                    point,
                    s,
                    b,
                    start_edge: i,
                    far_edge: j,
                });

                if cf.should_break() {
                    return aabb_index::Control::Break(());
                }
            }

            aabb_index::Control::Continue
        };

        aabb_index.visit_query_with_stack(
            aabb.min_x - fuzz,
            aabb.min_y - fuzz,
            aabb.max_x + fuzz,
            aabb.max_y + fuzz,
            &mut query_visitor,
            &mut query_stack,
        );

        if cf.should_break() {
            break;
        }
    }

    cf
}

/// Order intersect records by `s` then `b`.
pub fn cmp_boundary_params<T>(a: &IntersectionRecord<T>, b: &IntersectionRecord<T>) -> Ordering
where
    T: Real,
{
    a.s.partial_cmp(&b.s)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.b.partial_cmp(&b.b).unwrap_or(Ordering::Equal))
}

/// Find all self intersects of the polygon sorted by boundary parameters `(s, b)`.
pub fn all_self_intersects<P, T>(
    polygon: &P,
    options: &SelfIntersectOptions<T>,
) -> Vec<IntersectionRecord<T>>
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
{
    let constructed_index;
    let index = if let Some(x) = options.aabb_index {
        x
    } else {
        constructed_index = polygon.create_aabb_index();
        &constructed_index
    };

    let mut result = Vec::new();
    let _: () = visit_self_intersects(
        polygon,
        index,
        &mut |intr: IntersectionRecord<T>| result.push(intr),
        options.pos_equal_eps,
    );

    result.sort_unstable_by(cmp_boundary_params);
    result
}
