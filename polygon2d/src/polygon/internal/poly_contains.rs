use crate::{
    core::{
        math::{SegSegIntr, Vector2, min_max, seg_seg_intr},
        traits::Real,
    },
    polygon::PolygonSource,
};

/// Determine if `container` fully contains `candidate`.
///
/// Every candidate vertex must pass the even-odd point test and no candidate edge may meet a
/// container edge at a point, touching counts as meeting. Collinear overlapping edges are not
/// treated as intersecting. Container edges are looked up through its spatial index.
///
/// Caution: containers with self intersects may generate unexpected results.
pub fn polygon_contains_polygon<P, R, T>(container: &P, candidate: &R) -> bool
where
    P: PolygonSource<Num = T> + ?Sized,
    R: PolygonSource<Num = T> + ?Sized,
    T: Real,
{
    if candidate.is_empty() || container.vertex_count() < 3 {
        return false;
    }

    if !candidate
        .iter_vertexes()
        .all(|v| container.contains_point(v.pos()))
    {
        return false;
    }

    let eps = T::fuzzy_epsilon();
    let index = container.create_aabb_index();
    for (u1, u2) in candidate.iter_edges() {
        let (min_x, max_x) = min_max(u1.x, u2.x);
        let (min_y, max_y) = min_max(u1.y, u2.y);
        let query_results = index.query(min_x - eps, min_y - eps, max_x + eps, max_y + eps);

        for i in query_results {
            let v1 = container.at(i);
            let v2 = container.at(container.next_wrapping_index(i));
            if let SegSegIntr::Intersect { .. } =
                seg_seg_intr(v1.pos(), v2.pos(), u1.pos(), u2.pos(), eps)
            {
                return false;
            }
        }
    }

    true
}

/// Determine if `container` fully contains the circle at `center` with `radius`.
///
/// The center must pass the even-odd point test and the closest point on the container boundary
/// must be at least `radius` away from the center.
pub fn polygon_contains_circle<P, T>(container: &P, center: Vector2<T>, radius: T) -> bool
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
{
    if !container.contains_point(center) {
        return false;
    }

    container
        .closest_point(center)
        .is_some_and(|cp| cp.distance >= radius)
}
