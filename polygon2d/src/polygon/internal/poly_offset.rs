use crate::{
    core::{
        math::{Line2, SegSegIntr, Vector2, normalize_radians, seg_seg_intr},
        traits::Real,
    },
    error::OffsetError,
    polygon::{
        OffsetOptions, OffsetResult, PolyVertex, PolygonCreation, PolygonSource, VertexTag,
        Winding,
    },
};

/// Prepare a polygon for offsetting: adjacent repeat positions removed, rewound to
/// [Winding::Forward], then [simplified](PolygonSource::simplify).
pub fn canonicalize<P, T, O>(polygon: &P, pos_equal_eps: T) -> O
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
    O: PolygonCreation<Num = T>,
{
    let mut result = O::create_from_remove_repeat(polygon, pos_equal_eps);
    result.rewind(Winding::Forward);
    O::create_from(&result.simplify())
}

/// Create the raw (unrepaired) miter offset vertex for every vertex of `polygon`.
///
/// For vertex `c` with neighbours `p` and `n`: `e1 = normalize(c - p)`, `e2 = normalize(c - n)`,
/// the miter distance is `delta / sin(acos(e1 . e2) / 2)` along `normalize(e1 + e2)`, added to `c`
/// for a convex corner and subtracted for a reflex corner. For a forward wound polygon a positive
/// `delta` moves vertexes outward.
///
/// Every output vertex references the source vertex it came from. Vertexes whose turn magnitude
/// (angle from `e1` to `e2` mapped to `[0, 2PI)`) is above `3PI/2` or below `PI/2` are tagged
/// [VertexTag::SharpCorner].
///
/// The polygon is assumed to be canonicalized (see [canonicalize]), zero length edges, spikes and
/// collinear vertexes return [OffsetError::DegenerateCorner].
pub fn raw_offset_vertexes<P, T>(polygon: &P, delta: T) -> Result<Vec<PolyVertex<T>>, OffsetError>
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
{
    let n = polygon.vertex_count();
    let mut result = Vec::with_capacity(n);
    let eps = T::fuzzy_epsilon();
    let half_pi = T::pi() / T::two();
    let three_half_pi = T::pi() + half_pi;

    for i in 0..n {
        let p = polygon.at(polygon.prev_wrapping_index(i)).pos();
        let c = polygon.at(i).pos();
        let nx = polygon.at(polygon.next_wrapping_index(i)).pos();

        let to_c_from_p = c - p;
        let to_c_from_n = c - nx;
        if to_c_from_p.length().fuzzy_eq_zero() || to_c_from_n.length().fuzzy_eq_zero() {
            return Err(OffsetError::DegenerateCorner { index: i });
        }

        let e1 = to_c_from_p.normalize();
        let e2 = to_c_from_n.normalize();
        let cos_theta = num_traits::clamp(e1.dot(e2), -T::one(), T::one());
        let half_sin = (cos_theta.acos() / T::two()).sin();
        let bisector = e1 + e2;
        if half_sin.fuzzy_eq_zero() || bisector.length().fuzzy_eq_zero() {
            return Err(OffsetError::DegenerateCorner { index: i });
        }

        let d = bisector.normalize().scale(delta / half_sin);
        let o = if e1.perp_dot(e2) < T::zero() { c + d } else { c - d };

        let mut vertex = PolyVertex::from_vector2(o).with_source(i, c);
        let turn_angle = normalize_radians(e1.angle_to(e2));
        if turn_angle - three_half_pi > eps || half_pi - turn_angle > eps {
            vertex = vertex.with_tag(VertexTag::SharpCorner { turn_angle });
        }

        result.push(vertex);
    }

    Ok(result)
}

/// Returns true if the spoke `o_i -> c_i` crosses the spoke `o_j -> c_j`, meaning the offset edge
/// from `o_i` to `o_j` has inverted relative to its source edge.
#[inline]
fn spokes_cross<T>(o_i: Vector2<T>, c_i: Vector2<T>, o_j: Vector2<T>, c_j: Vector2<T>) -> bool
where
    T: Real,
{
    matches!(
        seg_seg_intr(o_i, c_i, o_j, c_j, T::fuzzy_epsilon()),
        SegSegIntr::Intersect { .. }
    )
}

/// Collapsed flag per offset edge, `result[i]` is true when the edge from offset vertex `i` to
/// offset vertex `i + 1` has inverted.
pub fn find_collapsed_edges<T>(raw_offset: &[PolyVertex<T>]) -> Vec<bool>
where
    T: Real,
{
    let n = raw_offset.len();
    (0..n)
        .map(|i| {
            let curr = raw_offset[i];
            let next = raw_offset[(i + 1) % n];
            match (curr.source, next.source) {
                (Some(s1), Some(s2)) => spokes_cross(curr.pos(), s1.pos, next.pos(), s2.pos),
                _ => false,
            }
        })
        .collect()
}

/// Replace each collapsed offset edge (both of its end vertexes) with one corrected corner.
///
/// The corrected corner for a collapsed edge `(o_i, o_{i+1})` is the intersect of the offset lines
/// of the source edges `(c_{i-1}, c_i)` and `(c_{i+1}, c_{i+2})`, tagged
/// [VertexTag::RepairedCorner] and referencing `c_i`. Only isolated collapsed edges are handled,
/// when consecutive edges collapse the vertexes between them are dropped.
///
/// Returns the repaired vertexes and the source indexes that were repaired.
pub fn repair_collapsed_edges<P, T>(
    source: &P,
    raw_offset: &[PolyVertex<T>],
    delta: T,
) -> Result<(Vec<PolyVertex<T>>, Vec<usize>), OffsetError>
where
    P: PolygonSource<Num = T> + ?Sized,
    T: Real,
{
    let n = raw_offset.len();
    debug_assert_eq!(n, source.vertex_count(), "bug: offset/source vertex count mismatch");

    let collapsed = find_collapsed_edges(raw_offset);
    let mut result = Vec::with_capacity(n);
    let mut repaired = Vec::new();
    if collapsed.iter().all(|&c| c) {
        log::debug!("every offset edge collapsed, offset by {delta:?} is empty");
        return Ok((result, repaired));
    }

    let src = |i: usize| source.at(i % n).pos();
    for i in 0..n {
        if collapsed[(i + n - 1) % n] {
            continue;
        }

        if !collapsed[i] {
            result.push(raw_offset[i]);
            continue;
        }

        let before = Line2::from_points(src(i + n - 1), src(i)).offset_right(delta);
        let after = Line2::from_points(src(i + 1), src(i + 2)).offset_right(delta);
        let corner = before
            .intersect(&after)
            .ok_or(OffsetError::ParallelOffsetLines { index: i })?;

        log::debug!("offset edge {i} collapsed, replaced with corner at {corner:?}");
        result.push(
            PolyVertex::from_vector2(corner)
                .with_source(i, src(i))
                .with_tag(VertexTag::RepairedCorner),
        );
        repaired.push(i);
    }

    Ok((result, repaired))
}

/// Offset a polygon by `delta`, see [PolygonSource::offset](crate::polygon::PolygonSource::offset).
pub fn offset<P, T, O>(
    polygon: &P,
    delta: T,
    options: &OffsetOptions<T>,
) -> Result<OffsetResult<O>, OffsetError>
where
    P: PolygonSource<Num = T, OutputPolygon = O> + ?Sized,
    T: Real,
    O: PolygonCreation<Num = T>,
{
    let canonical: O = canonicalize(polygon, options.pos_equal_eps);
    let vertex_count = canonical.vertex_count();
    if vertex_count < 3 {
        return Err(OffsetError::DegenerateInput { vertex_count });
    }

    let raw_offset = raw_offset_vertexes(&canonical, delta)?;
    if !options.repair_self_intersects {
        return Ok(OffsetResult {
            polygon: O::from_vertexes(raw_offset.into_iter()),
            repaired_indexes: Vec::new(),
        });
    }

    let (vertexes, repaired_indexes) = repair_collapsed_edges(&canonical, &raw_offset, delta)?;
    Ok(OffsetResult {
        polygon: O::from_vertexes(vertexes.into_iter()),
        repaired_indexes,
    })
}
