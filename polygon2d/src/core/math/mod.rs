//! Core math: vectors, infinite lines, segment intersects, and angle/parametric helpers.
mod base_math;
mod line2;
mod seg_seg_intersect;
mod vector2;

pub use base_math::*;
pub use line2::Line2;
pub use seg_seg_intersect::{SegSegIntr, seg_seg_intr};
pub use vector2::{Vector2, vec2};
