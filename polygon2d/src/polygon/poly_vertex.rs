use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Back reference from a derived vertex to the vertex it was computed from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SourceRef<T = f64> {
    /// Index of the source vertex in the polygon the vertex was derived from.
    pub index: usize,
    /// Position of the source vertex.
    pub pos: Vector2<T>,
}

/// Boundary parameter pair of a self intersection point.
///
/// A boundary parameter `t` lies in `[0, n)`, the integer part is the edge start vertex index and
/// the fractional part is the normalized distance along that edge. `s` is always the smaller of
/// the two.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundaryParams<T = f64> {
    pub s: T,
    pub b: T,
}

/// Classification attached to vertexes produced by offsetting or decomposing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum VertexTag<T = f64> {
    /// Offset vertex whose turn magnitude (in `[0, 2PI)`) fell outside `[PI/2, 3PI/2]`.
    SharpCorner { turn_angle: T },
    /// Offset vertex substituted for a collapsed offset edge.
    RepairedCorner,
    /// Point where the boundary crosses itself.
    SelfIntersection,
}

/// A polygon vertex: 2D position plus optional annotations carried through offset and
/// decomposition.
///
/// Equality through [PolyVertex::fuzzy_eq] only looks at the position, annotations are ignored.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PolyVertex<T = f64> {
    /// X coordinate position for the vertex.
    pub x: T,
    /// Y coordinate position for the vertex.
    pub y: T,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub source: Option<SourceRef<T>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tag: Option<VertexTag<T>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub boundary: Option<BoundaryParams<T>>,
}

impl<T> PolyVertex<T>
where
    T: Real,
{
    /// Plain vertex at `(x, y)` with no annotations.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        PolyVertex {
            x,
            y,
            source: None,
            tag: None,
            boundary: None,
        }
    }

    #[inline]
    pub fn from_vector2(v: Vector2<T>) -> Self {
        PolyVertex::new(v.x, v.y)
    }

    /// Return the position as a 2D vector.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Same vertex with the source back reference set.
    #[inline]
    pub fn with_source(mut self, index: usize, pos: Vector2<T>) -> Self {
        self.source = Some(SourceRef { index, pos });
        self
    }

    #[inline]
    pub fn with_tag(mut self, tag: VertexTag<T>) -> Self {
        self.tag = Some(tag);
        self
    }

    #[inline]
    pub fn with_boundary(mut self, s: T, b: T) -> Self {
        self.boundary = Some(BoundaryParams { s, b });
        self
    }

    /// Same position with every annotation removed.
    #[inline]
    pub fn plain(&self) -> Self {
        PolyVertex::new(self.x, self.y)
    }

    /// Fuzzy equal comparison of positions using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison of positions using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    #[inline]
    pub fn is_sharp_corner(&self) -> bool {
        matches!(self.tag, Some(VertexTag::SharpCorner { .. }))
    }
}

impl<T> From<Vector2<T>> for PolyVertex<T>
where
    T: Real,
{
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        PolyVertex::from_vector2(v)
    }
}

impl<T> From<[T; 2]> for PolyVertex<T>
where
    T: Real,
{
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        PolyVertex::new(x, y)
    }
}

impl<T> From<(T, T)> for PolyVertex<T>
where
    T: Real,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        PolyVertex::new(x, y)
    }
}

impl<T> From<PolyVertex<T>> for Vector2<T>
where
    T: Real,
{
    #[inline]
    fn from(v: PolyVertex<T>) -> Self {
        v.pos()
    }
}
