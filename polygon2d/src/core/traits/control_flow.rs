use static_aabb2d_index as aabb_index;

/// Control flow returned by visitor closures (vertex traversal, self intersect visiting) to either
/// keep going or stop early.
///
/// `()` always continues, [Control](crate::core::Control) can break with a value.
///
/// # Examples
///
/// ```
/// # use polygon2d::core::*;
/// # use polygon2d::polygon::*;
/// let square: Polygon = Polygon::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let mut visited = 0;
/// square.visit_vertexes(&mut |_prev, _curr, _next, i| {
///     visited += 1;
///     if i == 1 { Control::Break(()) } else { Control::Continue }
/// });
/// assert_eq!(visited, 2);
/// ```
pub trait ControlFlow {
    /// State indicating to continue visiting.
    fn continuing() -> Self;

    /// Returns `true` if visiting should stop.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        C::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        self.should_break()
    }
}
