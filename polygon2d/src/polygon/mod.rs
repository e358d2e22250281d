//! This module has all the types and functions associated with polygons and polygon vertexes.
pub mod internal;
mod poly_types;
mod poly_vertex;
#[allow(clippy::module_inception)]
mod polygon;
mod traits;

pub use poly_types::*;
pub use poly_vertex::*;
pub use polygon::*;
pub use traits::*;
