use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::math::*;
/// assert_eq!(min_max(8, 4), (4, 8));
/// assert_eq!(min_max(-1.0, 3.0), (-1.0, 3.0));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Normalize radians to the half open range `[0, 2PI)`, e.g. `-PI/2` becomes `3PI/2`.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::math::*;
/// # use polygon2d::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(-PI / 2.0).fuzzy_eq(3.0 * PI / 2.0));
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(0.0));
/// assert!(normalize_radians(PI).fuzzy_eq(PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle < T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Parametric value of the projection of `point` onto the segment `p0 -> p1`, clamped to `[0, 1]`.
///
/// A zero length segment always returns 0.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 0.0);
/// assert_eq!(line_seg_projection_t(p0, p1, Vector2::new(1.0, 3.0)), 0.25);
/// assert_eq!(line_seg_projection_t(p0, p1, Vector2::new(-1.0, 3.0)), 0.0);
/// assert_eq!(line_seg_projection_t(p0, p1, Vector2::new(9.0, 3.0)), 1.0);
/// assert_eq!(line_seg_projection_t(p0, p0, Vector2::new(9.0, 3.0)), 0.0);
/// ```
#[inline]
pub fn line_seg_projection_t<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    let len_squared = v.length_squared();
    if len_squared == T::zero() {
        return T::zero();
    }

    let t = (point - p0).dot(v) / len_squared;
    num_traits::real::Real::min(num_traits::real::Real::max(t, T::zero()), T::one())
}

/// Helper function to avoid repeating code for is_left and is_right checks.
#[inline]
fn perp_dot_test_value<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns true if `point` is left of the direction vector `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    perp_dot_test_value(p0, p1, point) > T::zero()
}

/// Twice the signed area of the triangle `p0, p1, p2`, rounded to 4 decimal places before
/// testing for zero. Used to decide if three vertexes are collinear.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::math::*;
/// assert!(is_collinear(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.00001)));
/// assert!(!is_collinear(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.001)));
/// ```
#[inline]
pub fn is_collinear<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> bool
where
    T: Real,
{
    let r = p0.x * (p1.y - p2.y) + p1.x * (p2.y - p0.y) + p2.x * (p0.y - p1.y);
    r.round_to(4) == T::zero()
}
