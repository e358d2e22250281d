//! Error types returned by the polygon operations that can fail.
use thiserror::Error;

/// Errors from [PolygonSource::offset](crate::polygon::PolygonSource::offset).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetError {
    /// Fewer than 3 vertexes remain after rewinding and simplifying.
    #[error("offset requires at least 3 vertexes after simplifying, got {vertex_count}")]
    DegenerateInput { vertex_count: usize },
    /// Miter direction at the vertex is undefined (zero half angle or opposing edge directions).
    #[error("degenerate miter corner at vertex {index}")]
    DegenerateCorner { index: usize },
    /// Offset lines meeting at a collapsed edge are parallel, no corrected corner exists.
    #[error("offset lines around collapsed edge at vertex {index} are parallel")]
    ParallelOffsetLines { index: usize },
}

/// Errors from [PolygonSource::decompose](crate::polygon::PolygonSource::decompose).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    #[error("decomposition requires at least 3 vertexes, got {vertex_count}")]
    DegenerateInput { vertex_count: usize },
    /// Some self intersects could not be placed in the nesting tree.
    #[error("{count} self intersect(s) could not be placed in the nesting tree")]
    UnresolvedTopology { count: usize },
}
