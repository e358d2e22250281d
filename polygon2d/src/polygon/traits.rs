use static_aabb2d_index::{
    AABB, IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};

use crate::{
    core::{
        math::{
            Vector2, dist_squared, is_collinear, is_left, line_seg_projection_t, midpoint,
            point_from_parametric,
        },
        traits::{ControlFlow, FuzzyEq, Real},
    },
    error::{DecomposeError, OffsetError},
    shape::Shape,
};

use super::{
    ClosestPointResult, DecomposeOptions, DecomposeResult, IntersectionRecord, OffsetOptions,
    OffsetResult, PolyVertex, SelfIntersectOptions, Winding,
    internal::{
        poly_contains::{polygon_contains_circle, polygon_contains_polygon},
        poly_decompose::decompose,
        poly_intersects::{all_self_intersects, visit_self_intersects},
        poly_offset::offset,
    },
};
use num_traits::{One, Zero};

/// Trait representing a readonly source of polygon data. This trait has all the methods and
/// operations that can be performed on a readonly polygon.
///
/// A polygon is an ordered sequence of vertexes interpreted as a closed loop: the last vertex
/// forms an edge with the first. Vertex lookups through [PolygonSource::point_at] are circular,
/// index `i` and `i + n` denote the same vertex and negative indexes wrap backward. Polygons with
/// 0, 1, or 2 vertexes are valid, queries on them return well defined degenerate values.
///
/// For related traits see [PolygonSourceMut] and [PolygonCreation].
pub trait PolygonSource {
    /// Numeric type used for the polygon.
    type Num: Real;

    /// Type used for output when invoking methods that return a new polygon.
    type OutputPolygon: PolygonCreation<Num = Self::Num>;

    /// Total number of vertexes.
    fn vertex_count(&self) -> usize;

    /// Get the vertex at given `index` position. Returns `None` if `index` out of bounds.
    fn get(&self, index: usize) -> Option<PolyVertex<Self::Num>>;

    /// Same as [PolygonSource::get] but panics if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn at(&self, index: usize) -> PolyVertex<Self::Num>;

    /// Return iterator to iterate over all the polygon vertexes.
    #[inline]
    fn iter_vertexes(&self) -> VertexIter<'_, Self> {
        VertexIter::new(self)
    }

    /// Return iterator to iterate over all the polygon edges (including the closing edge from the
    /// last vertex to the first).
    #[inline]
    fn iter_edges(&self) -> EdgeIter<'_, Self> {
        EdgeIter::new(self)
    }

    /// Returns true if vertex count is 0.
    #[inline]
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Total number of edges, equal to the vertex count when there are at least 2 vertexes.
    #[inline]
    fn edge_count(&self) -> usize {
        let vc = self.vertex_count();
        if vc < 2 { 0 } else { vc }
    }

    /// Fuzzy compare vertex positions index by index with another polygon using `eps`.
    #[inline]
    fn fuzzy_eq_eps<P>(&self, other: &P, eps: Self::Num) -> bool
    where
        P: PolygonSource<Num = Self::Num> + ?Sized,
    {
        self.vertex_count() == other.vertex_count()
            && self
                .iter_vertexes()
                .zip(other.iter_vertexes())
                .all(|(v1, v2)| v1.fuzzy_eq_eps(v2, eps))
    }

    /// Same as [PolygonSource::fuzzy_eq_eps] but uses default `Self::Num::fuzzy_epsilon()`.
    #[inline]
    fn fuzzy_eq<P>(&self, other: &P) -> bool
    where
        P: PolygonSource<Num = Self::Num> + ?Sized,
    {
        self.fuzzy_eq_eps(other, Self::Num::fuzzy_epsilon())
    }

    /// Returns the next wrapping vertex index for the polygon.
    ///
    /// If `i + 1 >= self.vertex_count()` then 0 is returned, otherwise `i + 1` is returned.
    #[inline]
    fn next_wrapping_index(&self, i: usize) -> usize {
        let next = i + 1;
        if next >= self.vertex_count() { 0 } else { next }
    }

    /// Returns the previous wrapping vertex index for the polygon.
    ///
    /// If `i == 0` then `self.vertex_count() - 1` is returned, otherwise `i - 1` is returned.
    #[inline]
    fn prev_wrapping_index(&self, i: usize) -> usize {
        if i == 0 {
            self.vertex_count() - 1
        } else {
            i - 1
        }
    }

    /// Map a circular (possibly negative) index onto `[0, n)`, `None` if the polygon is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let triangle: Polygon = Polygon::from_points([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    /// assert_eq!(triangle.wrap_index(4), Some(1));
    /// assert_eq!(triangle.wrap_index(-1), Some(2));
    /// assert_eq!(Polygon::<f64>::new().wrap_index(0), None);
    /// ```
    #[inline]
    fn wrap_index(&self, i: isize) -> Option<usize> {
        let n = self.vertex_count();
        if n == 0 {
            return None;
        }

        Some(i.rem_euclid(n as isize) as usize)
    }

    /// Circular vertex lookup, `point_at(i)` and `point_at(i + n)` return the same vertex.
    ///
    /// Returns `None` only for an empty polygon.
    #[inline]
    fn point_at(&self, i: isize) -> Option<PolyVertex<Self::Num>> {
        self.wrap_index(i).map(|i| self.at(i))
    }

    /// Edge starting at circular index `i`: `(point_at(i), point_at(i + 1))`.
    #[inline]
    fn edge_at(&self, i: isize) -> Option<(PolyVertex<Self::Num>, PolyVertex<Self::Num>)> {
        let start = self.wrap_index(i)?;
        Some((self.at(start), self.at(self.next_wrapping_index(start))))
    }

    /// Visit every vertex as `(prev, current, next, index)` with circular neighbours, in index
    /// order. The visitor may stop early by returning a breaking control flow value which is then
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let square: Polygon = Polygon::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// let mut prev_of_first = None;
    /// square.visit_vertexes(&mut |prev: PolyVertex, _curr, _next, i| {
    ///     if i == 0 {
    ///         prev_of_first = Some(prev);
    ///     }
    /// });
    /// assert_eq!(prev_of_first, Some(PolyVertex::new(0.0, 1.0)));
    /// ```
    fn visit_vertexes<C, V>(&self, visitor: &mut V) -> C
    where
        C: ControlFlow,
        V: FnMut(
            PolyVertex<Self::Num>,
            PolyVertex<Self::Num>,
            PolyVertex<Self::Num>,
            usize,
        ) -> C,
    {
        let n = self.vertex_count();
        for i in 0..n {
            let prev = self.at(self.prev_wrapping_index(i));
            let next = self.at(self.next_wrapping_index(i));
            try_cf!(visitor(prev, self.at(i), next, i));
        }

        C::continuing()
    }

    /// Signed area of the polygon, computed as a triangle fan from vertex 0.
    ///
    /// Positive for counter clockwise (forward) winding with the y axis pointing up, negative for
    /// clockwise. Polygons with fewer than 3 vertexes have zero area.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::core::traits::*;
    /// let mut square: Polygon = Polygon::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// assert!(square.area().fuzzy_eq(1.0));
    /// square.invert_direction_mut();
    /// assert!(square.area().fuzzy_eq(-1.0));
    /// ```
    fn area(&self) -> Self::Num {
        let n = self.vertex_count();
        if n < 3 {
            return Self::Num::zero();
        }

        let first = self.at(0).pos();
        let mut double_area = Self::Num::zero();
        for i in 2..n {
            let e1 = self.at(i - 1).pos() - first;
            let e2 = self.at(i).pos() - first;
            double_area = double_area + e1.perp_dot(e2);
        }

        double_area / Self::Num::two()
    }

    /// Winding of the polygon, [Winding::Forward] if and only if [PolygonSource::area] is positive.
    #[inline]
    fn winding(&self) -> Winding {
        if self.area() > Self::Num::zero() {
            Winding::Forward
        } else {
            Winding::Reversed
        }
    }

    /// Axis aligned bounding box of all the vertexes.
    ///
    /// A polygon with fewer than 2 vertexes returns a zero sized box at the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let triangle: Polygon = Polygon::from_points([(1.0, -1.0), (4.0, 2.0), (0.0, 3.0)]);
    /// let aabb = triangle.aabb();
    /// assert_eq!((aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y), (0.0, -1.0, 4.0, 3.0));
    /// ```
    fn aabb(&self) -> AABB<Self::Num> {
        if self.vertex_count() < 2 {
            return AABB::new(
                Self::Num::zero(),
                Self::Num::zero(),
                Self::Num::zero(),
                Self::Num::zero(),
            );
        }

        let v1 = self.at(0);
        let mut result = AABB::new(v1.x, v1.y, v1.x, v1.y);
        for v in self.iter_vertexes().skip(1) {
            result.min_x = num_traits::real::Real::min(result.min_x, v.x);
            result.min_y = num_traits::real::Real::min(result.min_y, v.y);
            result.max_x = num_traits::real::Real::max(result.max_x, v.x);
            result.max_y = num_traits::real::Real::max(result.max_y, v.y);
        }

        result
    }

    /// Approximate centroid: the center of [PolygonSource::aabb].
    ///
    /// This is not the area centroid, for non symmetric polygons the two differ.
    #[inline]
    fn approx_centroid(&self) -> Vector2<Self::Num> {
        let aabb = self.aabb();
        midpoint(
            Vector2::new(aabb.min_x, aabb.min_y),
            Vector2::new(aabb.max_x, aabb.max_y),
        )
    }

    /// Creates a spatial index of all the polygon edge bounding boxes.
    ///
    /// The edge start vertex index is used as the key to the edge bounding box in the
    /// `StaticAABB2DIndex`.
    ///
    /// # Panics
    ///
    /// Panics if `Self::Num` type fails to cast to/from a `u16`.
    fn create_aabb_index(&self) -> StaticAABB2DIndex<Self::Num> {
        let mut builder = StaticAABB2DIndexBuilder::new(self.edge_count());

        for (v1, v2) in self.iter_edges() {
            let (min_x, max_x) = crate::core::math::min_max(v1.x, v2.x);
            let (min_y, max_y) = crate::core::math::min_max(v1.y, v2.y);
            builder.add(min_x, min_y, max_x, max_y);
        }

        unwrap_spatial_index(builder)
    }

    /// Find the closest point on the polygon boundary to the `point` given.
    ///
    /// Each edge is projected onto with the parametric value clamped to `[0, 1]`, the global
    /// minimum squared distance wins (first edge wins ties). Returns `None` only for an empty
    /// polygon, a single vertex polygon returns that vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::core::math::*;
    /// # use polygon2d::core::traits::*;
    /// let square: Polygon = Polygon::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    /// let result = square.closest_point(Vector2::new(2.0, 1.0)).unwrap();
    /// assert_eq!(result.edge_start_index, 0);
    /// assert!(result.point.fuzzy_eq(Vector2::new(2.0, 0.0)));
    /// assert!(result.distance.fuzzy_eq(1.0));
    /// assert_eq!(result.on_vertex, None);
    ///
    /// let corner = square.closest_point(Vector2::new(5.0, 5.0)).unwrap();
    /// assert_eq!(corner.on_vertex, Some(2));
    /// ```
    fn closest_point(&self, point: Vector2<Self::Num>) -> Option<ClosestPointResult<Self::Num>> {
        use num_traits::real::Real;
        if self.is_empty() {
            return None;
        }

        let first = self.at(0).pos();
        let mut result = ClosestPointResult {
            point: first,
            edge_start_index: 0,
            edge_start: first,
            edge_end: first,
            distance: Real::max_value(),
            on_vertex: Some(0),
        };

        if self.vertex_count() == 1 {
            result.distance = (first - point).length();
            return Some(result);
        }

        let mut min_dist_squared = Real::max_value();
        for i in 0..self.vertex_count() {
            let j = self.next_wrapping_index(i);
            let v1 = self.at(i).pos();
            let v2 = self.at(j).pos();
            let t = line_seg_projection_t(v1, v2, point);
            let cp = point_from_parametric(v1, v2, t);
            let dist2 = dist_squared(point, cp);
            if dist2 < min_dist_squared {
                min_dist_squared = dist2;
                result.point = cp;
                result.edge_start_index = i;
                result.edge_start = v1;
                result.edge_end = v2;
                result.on_vertex = if t == Self::Num::zero() {
                    Some(i)
                } else if t == Self::Num::one() {
                    Some(j)
                } else {
                    None
                };
            }
        }

        result.distance = min_dist_squared.sqrt();
        Some(result)
    }

    /// Test if `point` is inside the polygon using the even-odd (ray casting) rule.
    ///
    /// Polygons with fewer than 3 vertexes contain nothing. Points exactly on the boundary may go
    /// either way.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::core::math::*;
    /// let square: Polygon = Polygon::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    /// assert!(square.contains_point(Vector2::new(1.0, 1.0)));
    /// assert!(!square.contains_point(Vector2::new(5.0, 1.0)));
    /// ```
    fn contains_point(&self, point: Vector2<Self::Num>) -> bool {
        let n = self.vertex_count();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        for i in 0..n {
            let prev = self.at(self.prev_wrapping_index(i));
            let curr = self.at(i);
            let straddles = (prev.y <= point.y && point.y < curr.y)
                || (curr.y <= point.y && point.y < prev.y);
            if straddles
                && point.x < (curr.x - prev.x) * (point.y - prev.y) / (curr.y - prev.y) + prev.x
            {
                inside = !inside;
            }
        }

        inside
    }

    /// Calculate the winding number for a `point` relative to the polygon.
    ///
    /// For a polygon without self intersects the result is 1 (forward winding around the point),
    /// -1 (reversed winding around the point) or 0 (point outside). If the point lies directly on
    /// an edge the result is not defined.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::core::math::*;
    /// let mut square: Polygon = Polygon::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    /// assert_eq!(square.winding_number(Vector2::new(1.0, 1.0)), 1);
    /// assert_eq!(square.winding_number(Vector2::new(-1.0, 1.0)), 0);
    /// square.invert_direction_mut();
    /// assert_eq!(square.winding_number(Vector2::new(1.0, 1.0)), -1);
    /// ```
    fn winding_number(&self, point: Vector2<Self::Num>) -> i32 {
        if self.vertex_count() < 3 {
            return 0;
        }

        let mut winding = 0;
        for (v1, v2) in self.iter_edges() {
            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1.pos(), v2.pos(), point) {
                    // left and upward crossing
                    winding += 1;
                }
            } else if v2.y <= point.y && !is_left(v1.pos(), v2.pos(), point) {
                // right and downward crossing
                winding -= 1;
            }
        }

        winding
    }

    /// Test if `other` lies entirely inside this polygon.
    ///
    /// Every vertex of `other` must pass [PolygonSource::contains_point] and no edge of `other`
    /// may intersect an edge of this polygon at a point (collinear overlaps are ignored). An empty
    /// `other` or a container with fewer than 3 vertexes returns false.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let outer: Polygon = Polygon::from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    /// let inner: Polygon = Polygon::from_points([(2.0, 2.0), (8.0, 2.0), (5.0, 8.0)]);
    /// assert!(outer.contains_polygon(&inner));
    /// assert!(!inner.contains_polygon(&outer));
    /// ```
    #[inline]
    fn contains_polygon<P>(&self, other: &P) -> bool
    where
        P: PolygonSource<Num = Self::Num> + ?Sized,
    {
        polygon_contains_polygon(self, other)
    }

    /// Test if a [Shape] lies entirely inside this polygon.
    ///
    /// Rectangles and polygons dispatch to [PolygonSource::contains_polygon]. A circle is
    /// contained when its center is inside and the closest boundary point is at least `radius`
    /// away from the center.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::shape::*;
    /// let square: Polygon = Polygon::from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    /// assert!(square.contains(&Shape::circle((5.0, 5.0), 2.0)));
    /// assert!(!square.contains(&Shape::circle((5.0, 5.0), 6.0)));
    /// assert!(square.contains(&Shape::rect_xywh(1.0, 1.0, 3.0, 3.0)));
    /// ```
    fn contains(&self, shape: &Shape<Self::Num>) -> bool {
        match shape {
            Shape::Circle { center, radius } => polygon_contains_circle(self, *center, *radius),
            Shape::Rect { min, max } => {
                let corners: super::Polygon<Self::Num> =
                    super::Polygon::from_points(Shape::rect_corners(*min, *max));
                self.contains_polygon(&corners)
            }
            Shape::Polygon(polygon) => self.contains_polygon(polygon),
        }
    }

    /// Remove all adjacent repeat position vertexes (including the last vertex repeating the
    /// first), keeping the first of each run.
    ///
    /// Returns `None` to avoid allocation and copy in the case that no vertexes are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let polygon: Polygon = Polygon::from_points([(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
    /// let result = polygon.remove_repeat_pos(1e-5).expect("repeat position vertexes were removed");
    /// assert_eq!(result.vertex_count(), 3);
    /// assert!(Polygon::<f64>::new().remove_repeat_pos(1e-5).is_none());
    /// ```
    fn remove_repeat_pos(&self, pos_equal_eps: Self::Num) -> Option<Self::OutputPolygon> {
        let n = self.vertex_count();
        if n < 2 {
            return None;
        }

        let has_repeat = (0..n).any(|i| {
            self.at(i)
                .fuzzy_eq_eps(self.at(self.next_wrapping_index(i)), pos_equal_eps)
        });

        if !has_repeat {
            return None;
        }

        Some(Self::OutputPolygon::create_from_remove_repeat(
            self,
            pos_equal_eps,
        ))
    }

    /// Remove every repeated position anywhere in the polygon, keeping the first occurrence.
    fn dedupe(&self, pos_equal_eps: Self::Num) -> Self::OutputPolygon {
        let mut result = Self::OutputPolygon::with_capacity(self.vertex_count());
        for v in self.iter_vertexes() {
            if !result
                .iter_vertexes()
                .any(|kept| kept.fuzzy_eq_eps(v, pos_equal_eps))
            {
                result.add_vertex(v);
            }
        }

        result
    }

    /// Remove collinear vertexes and zero angle spikes.
    ///
    /// A vertex is removed when twice the signed area of the triangle it forms with its
    /// neighbours rounds to zero at 4 decimal places, or when the angle between the vectors from
    /// its neighbours rounds to zero at 4 decimal places. Every vertex is tested against its
    /// neighbours in the unmodified input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let polygon: Polygon = Polygon::from_points([(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    /// let simplified = polygon.simplify();
    /// assert_eq!(simplified.vertex_count(), 4);
    /// ```
    fn simplify(&self) -> Self::OutputPolygon {
        let mut result = Self::OutputPolygon::with_capacity(self.vertex_count());
        let _: () = self.visit_vertexes(&mut |prev, curr, next, _| {
            let (p, c, n) = (prev.pos(), curr.pos(), next.pos());
            let angle = (c - p).angle_to(c - n);
            if !is_collinear(p, c, n) && angle.round_to(4) != Self::Num::zero() {
                result.add_vertex(curr);
            }
        });

        result
    }

    /// Offset the polygon by the signed distance `delta` (positive grows the polygon), using
    /// default [OffsetOptions].
    ///
    /// The receiver is not modified: the offset is computed on a copy rewound to forward winding
    /// and simplified (see [PolygonSource::simplify]). Each vertex is moved along its corner
    /// bisector to the miter position, then any offset edge that inverted (the segments joining
    /// its end points back to their source vertexes cross) is replaced by one corrected corner.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let square: Polygon = Polygon::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    /// let inset = square.offset(-1.0).unwrap();
    /// let expected: Polygon = Polygon::from_points([(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
    /// assert!(inset.fuzzy_eq(&expected));
    /// ```
    #[inline]
    fn offset(&self, delta: Self::Num) -> Result<Self::OutputPolygon, OffsetError> {
        self.offset_opt(delta, &Default::default())
            .map(|r| r.polygon)
    }

    /// Same as [PolygonSource::offset] but with options given and the repaired corners reported.
    #[inline]
    fn offset_opt(
        &self,
        delta: Self::Num,
        options: &OffsetOptions<Self::Num>,
    ) -> Result<OffsetResult<Self::OutputPolygon>, OffsetError> {
        offset(self, delta, options)
    }

    /// Find all self intersects of the polygon, sorted by boundary parameters `(s, b)`.
    ///
    /// Every unordered pair of non adjacent edges is tested once. Intersects located at the end
    /// vertex of either edge are attributed to the following edge, so a crossing through a vertex
    /// is recorded once. Collinear overlapping edges are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::core::math::*;
    /// let bowtie: Polygon = Polygon::from_points([(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    /// let intersects = bowtie.self_intersects();
    /// assert_eq!(intersects.len(), 1);
    /// assert!(intersects[0].point.fuzzy_eq(Vector2::new(1.0, 1.0)));
    /// assert_eq!((intersects[0].s, intersects[0].b), (0.5, 2.5));
    /// ```
    #[inline]
    fn self_intersects(&self) -> Vec<IntersectionRecord<Self::Num>> {
        self.self_intersects_opt(&Default::default())
    }

    #[inline]
    fn self_intersects_opt(
        &self,
        options: &SelfIntersectOptions<Self::Num>,
    ) -> Vec<IntersectionRecord<Self::Num>> {
        all_self_intersects(self, options)
    }

    /// Visit self intersects (unordered) with the `visitor` given, stopping early if the visitor
    /// breaks.
    #[inline]
    fn visit_self_intersects<C, V>(&self, visitor: &mut V) -> C
    where
        C: ControlFlow,
        V: FnMut(IntersectionRecord<Self::Num>) -> C,
    {
        self.visit_self_intersects_opt(visitor, &Default::default())
    }

    #[inline]
    fn visit_self_intersects_opt<C, V>(
        &self,
        visitor: &mut V,
        options: &SelfIntersectOptions<Self::Num>,
    ) -> C
    where
        C: ControlFlow,
        V: FnMut(IntersectionRecord<Self::Num>) -> C,
    {
        let constructed_index;
        let index = if let Some(x) = options.aabb_index {
            x
        } else {
            constructed_index = self.create_aabb_index();
            &constructed_index
        };

        visit_self_intersects(self, index, visitor, options.pos_equal_eps)
    }

    /// Returns true if the polygon has at least one self intersect, stops at the first one found.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let bowtie: Polygon = Polygon::from_points([(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    /// assert!(bowtie.has_self_intersects());
    /// let square: Polygon = Polygon::from_points([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    /// assert!(!square.has_self_intersects());
    /// ```
    fn has_self_intersects(&self) -> bool {
        use crate::core::Control;
        let result: Control<()> = self.visit_self_intersects(&mut |_| Control::Break(()));
        result.should_break()
    }

    /// Decompose a self intersecting polygon into simple regions using default
    /// [DecomposeOptions].
    ///
    /// Self intersects are arranged in a tree by nesting of their `[s, b]` boundary intervals.
    /// Every tree node emits the loop it encloses minus its children's loops. Regions of even
    /// depth nodes are [RegionKind::Kept](super::RegionKind::Kept), odd depth regions are
    /// [RegionKind::Excised](super::RegionKind::Excised).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let bowtie: Polygon = Polygon::from_points([(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    /// let result = bowtie.decompose().unwrap();
    /// assert_eq!(result.regions.len(), 2);
    /// assert!(result.unresolved.is_empty());
    /// ```
    #[inline]
    fn decompose(&self) -> Result<DecomposeResult<Self::OutputPolygon>, DecomposeError> {
        self.decompose_opt(&Default::default())
    }

    #[inline]
    fn decompose_opt(
        &self,
        options: &DecomposeOptions<Self::Num>,
    ) -> Result<DecomposeResult<Self::OutputPolygon>, DecomposeError> {
        decompose(self, options)
    }

    /// Decompose and return only the kept regions.
    #[inline]
    fn prune_self_intersections(&self) -> Result<Vec<Self::OutputPolygon>, DecomposeError> {
        self.decompose().map(|r| r.into_kept())
    }
}

/// Trait representing a mutable source of polygon data.
///
/// See other core polygon traits: [PolygonSource] and [PolygonCreation] for more information.
pub trait PolygonSourceMut: PolygonSource {
    /// Set the vertex at given `index` position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn set_vertex(&mut self, index: usize, vertex: PolyVertex<Self::Num>);

    /// Set the position of the vertex at `index`, keeping its annotations.
    #[inline]
    fn set(&mut self, index: usize, x: Self::Num, y: Self::Num) {
        let mut v = self.at(index);
        v.x = x;
        v.y = y;
        self.set_vertex(index, v);
    }

    /// Insert a new vertex into the polygon at the given `index`.
    fn insert_vertex(&mut self, index: usize, vertex: PolyVertex<Self::Num>);

    /// Remove vertex at `index`.
    fn remove(&mut self, index: usize) -> PolyVertex<Self::Num>;

    /// Remove the last vertex.
    ///
    /// # Panics
    ///
    /// Panics if polygon is empty.
    #[inline]
    fn remove_last(&mut self) -> PolyVertex<Self::Num> {
        self.remove(self.vertex_count() - 1)
    }

    /// Clear all vertexes.
    fn clear(&mut self);

    /// Add a vertex to the end of the polygon.
    fn add_vertex(&mut self, vertex: PolyVertex<Self::Num>);

    /// Add a vertex at `(x, y)` with no annotations.
    #[inline]
    fn add(&mut self, x: Self::Num, y: Self::Num) {
        self.add_vertex(PolyVertex::new(x, y))
    }

    /// Copy all vertexes from an iterator onto the end of this polygon.
    fn extend_vertexes<I>(&mut self, vertexes: I)
    where
        I: IntoIterator<Item = PolyVertex<Self::Num>>;

    /// Reserve capacity for at least `additional` more vertexes.
    fn reserve(&mut self, additional: usize);

    /// Add a vertex if it's position is not fuzzy equal to the last vertex in the polygon.
    #[inline]
    fn add_or_replace_vertex(&mut self, vertex: PolyVertex<Self::Num>, pos_equal_eps: Self::Num) {
        let n = self.vertex_count();
        if n > 0 && self.at(n - 1).fuzzy_eq_eps(vertex, pos_equal_eps) {
            return;
        }

        self.add_vertex(vertex);
    }

    /// Translate the polygon (mutably) by some `x` and `y` offset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let mut polygon: Polygon = Polygon::from_points([(2.0, 2.0), (4.0, 4.0), (2.0, 4.0)]);
    /// polygon.translate_mut(-3.0, 1.0);
    /// let expected: Polygon = Polygon::from_points([(-1.0, 3.0), (1.0, 5.0), (-1.0, 5.0)]);
    /// assert!(polygon.fuzzy_eq(&expected));
    /// ```
    fn translate_mut(&mut self, x: Self::Num, y: Self::Num) {
        for i in 0..self.vertex_count() {
            let v = self.at(i);
            self.set(i, v.x + x, v.y + y);
        }
    }

    /// Uniformly scale the polygon (mutably) by `scale_factor` about `origin`, the
    /// [approximate centroid](PolygonSource::approx_centroid) when `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let mut square: Polygon = Polygon::from_points([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    /// square.scale_mut(2.0, None);
    /// let expected: Polygon = Polygon::from_points([(-1.0, -1.0), (3.0, -1.0), (3.0, 3.0), (-1.0, 3.0)]);
    /// assert!(square.fuzzy_eq(&expected));
    /// ```
    fn scale_mut(&mut self, scale_factor: Self::Num, origin: Option<Vector2<Self::Num>>) {
        let origin = origin.unwrap_or_else(|| self.approx_centroid());
        for i in 0..self.vertex_count() {
            let p = origin + (self.at(i).pos() - origin).scale(scale_factor);
            self.set(i, p.x, p.y);
        }
    }

    /// Rotate the polygon (mutably) by `angle` radians (counter clockwise for positive values)
    /// about `origin`, the [approximate centroid](PolygonSource::approx_centroid) when `None`.
    fn rotate_mut(&mut self, angle: Self::Num, origin: Option<Vector2<Self::Num>>) {
        let origin = origin.unwrap_or_else(|| self.approx_centroid());
        for i in 0..self.vertex_count() {
            let p = self.at(i).pos().rotate_about(origin, angle);
            self.set(i, p.x, p.y);
        }
    }

    /// Invert/reverse the direction of the polygon in place (mutably) by reversing the vertex
    /// order.
    fn invert_direction_mut(&mut self) {
        let vc = self.vertex_count();
        if vc < 2 {
            return;
        }

        let mut start = 0;
        let mut end = vc - 1;
        while start < end {
            let s = self.at(start);
            let e = self.at(end);
            self.set_vertex(start, e);
            self.set_vertex(end, s);
            start += 1;
            end -= 1;
        }
    }

    /// Reverse the vertex order if the current [winding](PolygonSource::winding) is not
    /// `winding`. Calling it twice with the same argument is the same as calling it once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// let mut square: Polygon = Polygon::from_points([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    /// assert_eq!(square.winding(), Winding::Reversed);
    /// square.rewind(Winding::Forward);
    /// assert_eq!(square.winding(), Winding::Forward);
    /// assert_eq!(square[0], PolyVertex::new(1.0, 0.0));
    /// ```
    fn rewind(&mut self, winding: Winding) {
        if self.winding() != winding {
            self.invert_direction_mut();
        }
    }
}

/// Trait representing a creatable source of polygon data. This trait acts as a mutable polygon
/// source and also exposes associated functions for construction. This trait is used when new
/// polygons need to be returned from a function.
///
/// See other core polygon traits: [PolygonSource] and [PolygonSourceMut] for more information.
pub trait PolygonCreation: PolygonSourceMut + Sized {
    /// Create a new empty polygon with `capacity` given.
    fn with_capacity(capacity: usize) -> Self;

    /// Create a new polygon by constructing from vertexes given by an iterator.
    fn from_vertexes<I>(iter: I) -> Self
    where
        I: Iterator<Item = PolyVertex<Self::Num>>;

    /// Create a new polygon by cloning from an existing polygon.
    #[inline]
    fn create_from<P>(polygon: &P) -> Self
    where
        P: PolygonSource<Num = Self::Num> + ?Sized,
    {
        Self::from_vertexes(polygon.iter_vertexes())
    }

    /// Same as [PolygonCreation::create_from] but removes any adjacent repeat position vertexes
    /// in the process using `pos_equal_eps` for positional comparisons.
    #[inline]
    fn create_from_remove_repeat<P>(polygon: &P, pos_equal_eps: Self::Num) -> Self
    where
        P: PolygonSource<Num = Self::Num> + ?Sized,
    {
        let mut result = Self::with_capacity(polygon.vertex_count());
        for v in polygon.iter_vertexes() {
            result.add_or_replace_vertex(v, pos_equal_eps);
        }

        // catch last position overlapping first
        while result.vertex_count() >= 2
            && result
                .at(result.vertex_count() - 1)
                .fuzzy_eq_eps(result.at(0), pos_equal_eps)
        {
            result.remove_last();
        }

        result
    }

    /// Create empty polygon.
    #[inline]
    fn empty() -> Self {
        Self::with_capacity(0)
    }
}

/// An iterator that traverses polygon vertexes.
#[derive(Debug)]
pub struct VertexIter<'a, P>
where
    P: ?Sized,
{
    polygon: &'a P,
    pos: usize,
    end: usize,
}

impl<'a, P> VertexIter<'a, P>
where
    P: PolygonSource + ?Sized,
{
    #[inline]
    pub fn new(polygon: &'a P) -> Self {
        Self {
            polygon,
            pos: 0,
            end: polygon.vertex_count(),
        }
    }
}

impl<P> Clone for VertexIter<'_, P>
where
    P: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            polygon: self.polygon,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<P> Iterator for VertexIter<'_, P>
where
    P: PolygonSource + ?Sized,
{
    type Item = PolyVertex<P::Num>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }
        let r = self.polygon.get(self.pos);
        self.pos += 1;
        r
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<P> ExactSizeIterator for VertexIter<'_, P> where P: PolygonSource + ?Sized {}

impl<P> DoubleEndedIterator for VertexIter<'_, P>
where
    P: PolygonSource + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }

        let r = self.polygon.get(self.end - 1);
        self.end -= 1;
        r
    }
}

/// An iterator that traverses polygon edges as `(start, end)` vertex pairs, ending with the
/// closing edge `(last, first)`.
#[derive(Debug)]
pub struct EdgeIter<'a, P>
where
    P: ?Sized,
{
    polygon: &'a P,
    pos: usize,
    end: usize,
}

impl<'a, P> EdgeIter<'a, P>
where
    P: PolygonSource + ?Sized,
{
    #[inline]
    pub fn new(polygon: &'a P) -> Self {
        Self {
            polygon,
            pos: 0,
            end: polygon.edge_count(),
        }
    }
}

impl<P> Clone for EdgeIter<'_, P>
where
    P: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            polygon: self.polygon,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<P> Iterator for EdgeIter<'_, P>
where
    P: PolygonSource + ?Sized,
{
    type Item = (PolyVertex<P::Num>, PolyVertex<P::Num>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }

        let i = self.pos;
        self.pos += 1;
        Some((
            self.polygon.at(i),
            self.polygon.at(self.polygon.next_wrapping_index(i)),
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<P> ExactSizeIterator for EdgeIter<'_, P> where P: PolygonSource + ?Sized {}

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
pub(crate) fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast Self::Num type: {e}")
            }
        },
    }
}
