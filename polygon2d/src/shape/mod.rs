//! Shapes a polygon can be tested for containing, see
//! [PolygonSource::contains](crate::polygon::PolygonSource::contains).
use crate::{
    core::{
        math::{Vector2, min_max},
        traits::Real,
    },
    polygon::{PolyVertex, Polygon},
};

/// Tagged union of the shapes accepted by the containment dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T = f64>
where
    T: Real,
{
    Circle { center: Vector2<T>, radius: T },
    /// Axis aligned rectangle from its minimum to its maximum corner.
    Rect { min: Vector2<T>, max: Vector2<T> },
    Polygon(Polygon<T>),
}

impl<T> Shape<T>
where
    T: Real,
{
    /// Circle at `center` with `radius`.
    #[inline]
    pub fn circle<V>(center: V, radius: T) -> Self
    where
        V: Into<Vector2<T>>,
    {
        Shape::Circle {
            center: center.into(),
            radius,
        }
    }

    /// Circle whose radius is produced by `radius` once, at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::shape::*;
    /// let base = 1.5;
    /// let shape = Shape::circle_with((0.0, 0.0), || base * 2.0);
    /// assert!(matches!(shape, Shape::Circle { radius, .. } if radius == 3.0));
    /// ```
    #[inline]
    pub fn circle_with<V, F>(center: V, radius: F) -> Self
    where
        V: Into<Vector2<T>>,
        F: FnOnce() -> T,
    {
        Shape::circle(center, radius())
    }

    /// Rectangle from two opposite corners `(x1, y1)` and `(x2, y2)`, given in any order.
    #[inline]
    pub fn rect(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (min_x, max_x) = min_max(x1, x2);
        let (min_y, max_y) = min_max(y1, y2);
        Shape::Rect {
            min: Vector2::new(min_x, min_y),
            max: Vector2::new(max_x, max_y),
        }
    }

    /// Rectangle from an origin corner plus width and height.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::shape::*;
    /// assert_eq!(Shape::rect_xywh(1.0, 2.0, 3.0, 4.0), Shape::rect(1.0, 2.0, 4.0, 6.0));
    /// assert_eq!(Shape::rect_xywh(1.0, 2.0, -1.0, 4.0), Shape::rect(0.0, 2.0, 1.0, 6.0));
    /// ```
    #[inline]
    pub fn rect_xywh(x: T, y: T, width: T, height: T) -> Self {
        Shape::rect(x, y, x + width, y + height)
    }

    /// Corners of the rectangle `min`, `max` in forward (counter clockwise) order starting at
    /// `min`.
    #[inline]
    pub fn rect_corners(min: Vector2<T>, max: Vector2<T>) -> [Vector2<T>; 4] {
        [
            min,
            Vector2::new(max.x, min.y),
            max,
            Vector2::new(min.x, max.y),
        ]
    }

    /// Polygon form of the shape, `None` for a circle.
    pub fn to_polygon(&self) -> Option<Polygon<T>> {
        match self {
            Shape::Circle { .. } => None,
            Shape::Rect { min, max } => Some(Polygon::from_points(Shape::rect_corners(*min, *max))),
            Shape::Polygon(polygon) => Some(polygon.clone()),
        }
    }
}

impl<T> From<Polygon<T>> for Shape<T>
where
    T: Real,
{
    #[inline]
    fn from(polygon: Polygon<T>) -> Self {
        Shape::Polygon(polygon)
    }
}

impl<T> From<&Polygon<T>> for Shape<T>
where
    T: Real,
{
    #[inline]
    fn from(polygon: &Polygon<T>) -> Self {
        Shape::Polygon(polygon.clone())
    }
}

impl<T, V> From<Vec<V>> for Shape<T>
where
    T: Real,
    V: Into<PolyVertex<T>>,
{
    #[inline]
    fn from(points: Vec<V>) -> Self {
        Shape::Polygon(Polygon::from_points(points))
    }
}
