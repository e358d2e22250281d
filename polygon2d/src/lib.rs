//! 2D polygon library for containment queries, inward and outward offsetting, self intersect
//! detection, and decomposition of self intersecting polygons into simple regions.
//!
//! Polygons are closed chains of straight edges; the last vertex implicitly connects back to the
//! first. All algorithms are implemented on the [polygon::PolygonSource] trait so they work with
//! any vertex storage that implements it.
//!
//! # Examples
//!
//! ```
//! # use polygon2d::polygon::*;
//! # use polygon2d::core::{math::*, traits::*};
//! let square: Polygon = Polygon::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//! assert!(square.area().fuzzy_eq(16.0));
//! assert!(square.contains_point(Vector2::new(2.0, 2.0)));
//!
//! let inset = square.offset(-1.0).unwrap();
//! assert!(inset.area().fuzzy_eq(4.0));
//! ```
#[macro_use]
mod macros;
#[macro_use]
pub mod core;
pub mod error;
pub mod polygon;
pub mod shape;

pub use static_aabb2d_index::AABB;
