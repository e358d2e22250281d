use super::{PolyVertex, PolygonCreation, PolygonSource, PolygonSourceMut};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Basic polygon data representation that implements the core polygon traits:
/// [PolygonSource], [PolygonSourceMut], and [PolygonCreation]. See the traits documentation for
/// all the polygon methods/operations available.
///
/// `Clone` produces an independent deep copy of the vertexes.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    /// Contiguous sequence of vertexes, the last vertex connects back to the first.
    pub vertex_data: Vec<PolyVertex<T>>,
}

impl<T> Default for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new empty [Polygon].
    #[inline]
    pub fn new() -> Self {
        Polygon {
            vertex_data: Vec::new(),
        }
    }

    /// Create a polygon from anything point like: `[x, y]` arrays, `(x, y)` tuples,
    /// [Vector2](crate::core::math::Vector2) or [PolyVertex].
    ///
    /// # Examples
    ///
    /// ```
    /// # use polygon2d::polygon::*;
    /// # use polygon2d::core::math::*;
    /// let a: Polygon = Polygon::from_points([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    /// let b: Polygon = Polygon::from_points(vec![
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(1.0, 0.0),
    ///     Vector2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub fn from_points<I, V>(points: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PolyVertex<T>>,
    {
        Polygon {
            vertex_data: points.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }
}

impl<T, V> FromIterator<V> for Polygon<T>
where
    T: Real,
    V: Into<PolyVertex<T>>,
{
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Polygon::from_points(iter)
    }
}

impl<T, V> From<Vec<V>> for Polygon<T>
where
    T: Real,
    V: Into<PolyVertex<T>>,
{
    #[inline]
    fn from(points: Vec<V>) -> Self {
        Polygon::from_points(points)
    }
}

impl<T> Index<usize> for Polygon<T> {
    type Output = PolyVertex<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Polygon<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

impl<T> PolygonSource for Polygon<T>
where
    T: Real,
{
    type Num = T;
    type OutputPolygon = Polygon<T>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<PolyVertex<Self::Num>> {
        self.vertex_data.get(index).copied()
    }

    #[inline]
    fn at(&self, index: usize) -> PolyVertex<Self::Num> {
        self[index]
    }
}

impl<T> PolygonSourceMut for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn set_vertex(&mut self, index: usize, vertex: PolyVertex<Self::Num>) {
        self.vertex_data[index] = vertex;
    }

    #[inline]
    fn insert_vertex(&mut self, index: usize, vertex: PolyVertex<Self::Num>) {
        self.vertex_data.insert(index, vertex);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> PolyVertex<Self::Num> {
        self.vertex_data.remove(index)
    }

    #[inline]
    fn clear(&mut self) {
        self.vertex_data.clear()
    }

    #[inline]
    fn add_vertex(&mut self, vertex: PolyVertex<Self::Num>) {
        self.vertex_data.push(vertex)
    }

    #[inline]
    fn extend_vertexes<I>(&mut self, vertexes: I)
    where
        I: IntoIterator<Item = PolyVertex<Self::Num>>,
    {
        self.vertex_data.extend(vertexes);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.vertex_data.reserve(additional);
    }

    #[inline]
    fn invert_direction_mut(&mut self) {
        self.vertex_data.reverse();
    }
}

impl<T> PolygonCreation for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Polygon {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn from_vertexes<I>(iter: I) -> Self
    where
        I: Iterator<Item = PolyVertex<Self::Num>>,
    {
        Polygon {
            vertex_data: iter.collect(),
        }
    }
}
