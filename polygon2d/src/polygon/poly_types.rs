//! Supporting public types used in the core polygon trait methods.

use super::{PolyVertex, PolygonCreation, VertexTag};
use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::StaticAABB2DIndex;

/// Orientation of a polygon's vertex sequence, decided by the sign of its signed area.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area (counter clockwise with the y axis pointing up).
    Forward,
    /// Zero or negative signed area.
    Reversed,
}

impl Winding {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Winding::Forward => Winding::Reversed,
            Winding::Reversed => Winding::Forward,
        }
    }
}

/// Result from calling [PolygonSource::closest_point](super::PolygonSource::closest_point).
#[derive(Debug, Copy, Clone)]
pub struct ClosestPointResult<T>
where
    T: Real,
{
    /// The closest point on the polygon boundary.
    pub point: Vector2<T>,
    /// The start vertex index of the closest edge.
    pub edge_start_index: usize,
    /// Start position of the closest edge.
    pub edge_start: Vector2<T>,
    /// End position of the closest edge.
    pub edge_end: Vector2<T>,
    /// Distance between the query point and [ClosestPointResult::point].
    pub distance: T,
    /// Index of the vertex the closest point coincides with, set when the projection landed
    /// exactly on an edge end point.
    pub on_vertex: Option<usize>,
}

/// A point where the polygon boundary crosses itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionRecord<T>
where
    T: Real,
{
    pub point: Vector2<T>,
    /// Boundary parameter of the point along the first (lower index) edge.
    pub s: T,
    /// Boundary parameter of the point along the second edge, always greater than `s`.
    pub b: T,
    /// Start vertex index of the first edge (integer part of `s`).
    pub start_edge: usize,
    /// Start vertex index of the second edge (integer part of `b`).
    pub far_edge: usize,
}

impl<T> IntersectionRecord<T>
where
    T: Real,
{
    /// Vertex at the intersect point tagged as a self intersection and carrying its boundary
    /// parameters.
    #[inline]
    pub fn to_vertex(&self) -> PolyVertex<T> {
        PolyVertex::from_vector2(self.point)
            .with_tag(VertexTag::SelfIntersection)
            .with_boundary(self.s, self.b)
    }
}

/// Options for finding polygon self intersects.
#[derive(Debug, Clone)]
pub struct SelfIntersectOptions<'a, T>
where
    T: Real,
{
    /// Spatial index of the polygon edge bounding boxes, computed internally when `None`.
    pub aabb_index: Option<&'a StaticAABB2DIndex<T>>,
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<T> SelfIntersectOptions<'_, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            aabb_index: None,
            pos_equal_eps: T::from(1e-5).unwrap(),
        }
    }
}

impl<T> Default for SelfIntersectOptions<'_, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options for offsetting a polygon.
#[derive(Debug, Clone)]
pub struct OffsetOptions<T>
where
    T: Real,
{
    /// Replace collapsed (inverted) offset edges by a single corrected corner.
    pub repair_self_intersects: bool,
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
}

impl<T> OffsetOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            repair_self_intersects: true,
            pos_equal_eps: T::from(1e-5).unwrap(),
        }
    }
}

impl<T> Default for OffsetOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [PolygonSource::offset_opt](super::PolygonSource::offset_opt).
#[derive(Debug, Clone)]
pub struct OffsetResult<P>
where
    P: PolygonCreation,
{
    /// The offset polygon.
    pub polygon: P,
    /// Source vertex indexes (in the canonicalized source) where a collapsed offset edge was
    /// replaced by a corrected corner.
    pub repaired_indexes: Vec<usize>,
}

/// Options for decomposing a self intersecting polygon into simple regions.
#[derive(Debug, Clone)]
pub struct DecomposeOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
    /// Return [DecomposeError::UnresolvedTopology](crate::error::DecomposeError) instead of a
    /// result when any intersect could not be placed in the nesting tree.
    pub fail_on_unresolved: bool,
}

impl<T> DecomposeOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
            fail_on_unresolved: false,
        }
    }
}

impl<T> Default for DecomposeOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Classification of a decomposed region by the depth of its nesting tree node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegionKind {
    /// Even depth, part of the pruned polygon.
    Kept,
    /// Odd depth, a loop cut out of its parent region.
    Excised,
}

impl RegionKind {
    #[inline]
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            RegionKind::Kept
        } else {
            RegionKind::Excised
        }
    }
}

/// One simple polygon emitted by the decomposition.
#[derive(Debug, Clone)]
pub struct Region<P> {
    pub polygon: P,
    pub kind: RegionKind,
    /// Depth of the emitting node in the nesting tree (root is 0).
    pub depth: usize,
}

/// Why an intersect could not be placed in the nesting tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The intersect interferes with the current node and no ancestor contains it.
    NoContainingAncestor,
    /// The intersect interval does not relate to the current node at all (e.g. a disjoint
    /// sibling loop).
    Unrelated,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnresolvedIntersection<T>
where
    T: Real,
{
    pub intersect: IntersectionRecord<T>,
    pub reason: UnresolvedReason,
}

/// Event recorded while building and walking the nesting tree.
///
/// Node ids are arena indexes: the root is node 0 and the intersect at position `k` of the sorted
/// intersect list is node `k + 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Attached { node: usize, parent: usize },
    Reparented { node: usize, new_parent: usize },
    Unresolved { node: usize, reason: UnresolvedReason },
    RegionEmitted { node: usize, kind: RegionKind, vertex_count: usize },
}

/// Ordered diagnostic events of one decomposition call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposeTrace {
    pub events: Vec<TraceEvent>,
}

impl DecomposeTrace {
    #[inline]
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter()
    }
}

/// Result of decomposing a polygon into simple regions.
#[derive(Debug, Clone)]
pub struct DecomposeResult<P>
where
    P: PolygonCreation,
{
    /// Every emitted region in post order (a node's region follows its subtree's regions).
    pub regions: Vec<Region<P>>,
    pub unresolved: Vec<UnresolvedIntersection<P::Num>>,
    pub trace: DecomposeTrace,
}

impl<P> DecomposeResult<P>
where
    P: PolygonCreation,
{
    /// Iterate over the regions kept by pruning.
    #[inline]
    pub fn kept(&self) -> impl Iterator<Item = &P> + '_ {
        self.regions
            .iter()
            .filter(|r| r.kind == RegionKind::Kept)
            .map(|r| &r.polygon)
    }

    #[inline]
    pub fn into_kept(self) -> Vec<P> {
        self.regions
            .into_iter()
            .filter(|r| r.kind == RegionKind::Kept)
            .map(|r| r.polygon)
            .collect()
    }
}
