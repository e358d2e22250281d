use super::{Vector2, point_from_parametric};
use crate::core::traits::Real;

/// Result of intersecting two line segments with [seg_seg_intr].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// Segments do not touch (includes parallel non collinear segments).
    NoIntersect,
    /// Segments cross or touch at a single point.
    Intersect {
        point: Vector2<T>,
        /// Parametric value of `point` on the first segment.
        seg1_t: T,
        /// Parametric value of `point` on the second segment.
        seg2_t: T,
    },
    /// Segments are collinear and share more than a single point.
    Overlapping {
        /// Parametric start of the shared span along the second segment.
        seg2_t0: T,
        /// Parametric end of the shared span along the second segment.
        seg2_t1: T,
    },
}

/// Intersect the segments `v1 -> v2` and `u1 -> u2`.
///
/// Uses the parametric form `P(t) = p0 + t * (p1 - p0)` for both segments and perpendicular dot
/// products to solve for `t`. Parametric values are scaled by segment length before being fuzzy
/// compared against `epsilon` so the tolerance applies in position units regardless of segment
/// length. End points are inclusive.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::math::*;
/// let cross = seg_seg_intr(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
///     Vector2::new(2.0, 0.0),
///     1e-5,
/// );
/// match cross {
///     SegSegIntr::Intersect { point, seg1_t, seg2_t } => {
///         assert!(point.fuzzy_eq(Vector2::new(1.0, 1.0)));
///         assert_eq!(seg1_t, 0.5);
///         assert_eq!(seg2_t, 0.5);
///     }
///     _ => unreachable!("segments cross at (1, 1)"),
/// }
///
/// let collinear = seg_seg_intr(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(3.0, 0.0),
///     1e-5,
/// );
/// assert!(matches!(collinear, SegSegIntr::Overlapping { .. }));
/// ```
pub fn seg_seg_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    let seg1_length = v.length();
    let seg2_length = u.length();

    if !v_pdot_u.fuzzy_eq_zero_eps(epsilon) {
        // not parallel, single solution for the infinite lines
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, epsilon)
            && (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, epsilon)
        {
            return Intersect {
                point: point_from_parametric(v1, v2, seg1_t),
                seg1_t,
                seg2_t,
            };
        }

        return NoIntersect;
    }

    // parallel, test if collinear
    if !v.perp_dot(w).fuzzy_eq_zero_eps(epsilon) || !u.perp_dot(w).fuzzy_eq_zero_eps(epsilon) {
        return NoIntersect;
    }

    let v_is_point = v1.fuzzy_eq_eps(v2, epsilon);
    let u_is_point = u1.fuzzy_eq_eps(u2, epsilon);

    if v_is_point && u_is_point {
        if v1.fuzzy_eq_eps(u1, epsilon) {
            return Intersect {
                point: v1,
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }

        return NoIntersect;
    }

    if v_is_point || u_is_point {
        // one segment is a point lying on the other segment's line
        let (p0, p1, point) = if v_is_point { (u1, u2, v1) } else { (v1, v2, u1) };
        let len = (p1 - p0).length();
        let t = (point - p0).dot(p1 - p0) / (len * len);
        if !(t * len).fuzzy_in_range_eps(T::zero(), len, epsilon) {
            return NoIntersect;
        }

        let (seg1_t, seg2_t) = if v_is_point {
            (T::zero(), t)
        } else {
            (t, T::zero())
        };

        return Intersect {
            point,
            seg1_t,
            seg2_t,
        };
    }

    // collinear segments, find the span of the first segment along the second segment
    let u_len_squared = seg2_length * seg2_length;
    let mut seg2_t0 = (v1 - u1).dot(u) / u_len_squared;
    let mut seg2_t1 = (v2 - u1).dot(u) / u_len_squared;
    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, epsilon)
        || !(seg2_t1 * seg2_length).fuzzy_gt_eps(T::zero(), epsilon)
    {
        return NoIntersect;
    }

    seg2_t0 = num_traits::real::Real::max(seg2_t0, T::zero());
    seg2_t1 = num_traits::real::Real::min(seg2_t1, T::one());

    if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(epsilon) {
        // segments touch end to end
        let point = point_from_parametric(u1, u2, seg2_t0);
        let seg1_t = if v1.fuzzy_eq_eps(point, epsilon) {
            T::zero()
        } else {
            T::one()
        };

        return Intersect {
            point,
            seg1_t,
            seg2_t: seg2_t0,
        };
    }

    Overlapping { seg2_t0, seg2_t1 }
}
