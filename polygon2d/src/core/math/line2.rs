use super::Vector2;
use crate::core::traits::Real;

/// Infinite 2D line through `origin` running along `dir`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line2<T = f64> {
    pub origin: Vector2<T>,
    pub dir: Vector2<T>,
}

impl<T> Line2<T>
where
    T: Real,
{
    /// Line passing through `p0` and `p1` (direction `p1 - p0`).
    #[inline]
    pub fn from_points(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        Line2 {
            origin: p0,
            dir: p1 - p0,
        }
    }

    #[inline]
    pub fn from_point_dir(origin: Vector2<T>, dir: Vector2<T>) -> Self {
        Line2 { origin, dir }
    }

    /// Intersection point of two infinite lines, `None` if the lines are parallel (or either
    /// direction is zero length).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::core::math::*;
    /// let l1 = Line2::from_points(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    /// let l2 = Line2::from_point_dir(Vector2::new(4.0, 0.0), Vector2::new(0.0, 1.0));
    /// assert!(l1.intersect(&l2).unwrap().fuzzy_eq(Vector2::new(4.0, 4.0)));
    ///
    /// let l3 = Line2::from_point_dir(Vector2::new(0.0, 1.0), Vector2::new(2.0, 2.0));
    /// assert!(l1.intersect(&l3).is_none());
    /// ```
    pub fn intersect(&self, other: &Line2<T>) -> Option<Vector2<T>> {
        let denom = self.dir.perp_dot(other.dir);
        if denom.fuzzy_eq_zero() {
            return None;
        }

        let t = (other.origin - self.origin).perp_dot(other.dir) / denom;
        Some(self.origin + self.dir.scale(t))
    }

    /// Line shifted sideways by `distance` along the right hand normal of `dir`.
    ///
    /// For an edge of a counter clockwise polygon the right hand normal points outward.
    pub fn offset_right(&self, distance: T) -> Self {
        let normal = -self.dir.unit_perp();
        Line2 {
            origin: self.origin + normal.scale(distance),
            dir: self.dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_right_moves_away_from_ccw_interior() {
        // bottom edge of a ccw square, outward is -y
        let edge = Line2::from_points(Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0));
        let shifted = edge.offset_right(1.5);
        assert!(shifted.origin.fuzzy_eq(Vector2::new(0.0, -1.5)));
        assert!(shifted.dir.fuzzy_eq(edge.dir));
    }

    #[test]
    fn perpendicular_offset_lines_meet_at_corner() {
        let bottom =
            Line2::from_points(Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0)).offset_right(-1.0);
        let right =
            Line2::from_points(Vector2::new(4.0, 0.0), Vector2::new(4.0, 4.0)).offset_right(-1.0);
        let corner = bottom.intersect(&right).unwrap();
        assert!(corner.fuzzy_eq(Vector2::new(3.0, 1.0)));
    }
}
