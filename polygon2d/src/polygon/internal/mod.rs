//! Internal polygon algorithm modules made public for visualization, benchmarking, and testing
//! purposes.
//!
//! Not expected to be used directly as part of the library but may be used to help learn about the
//! algorithms.
pub mod poly_contains;
pub mod poly_decompose;
pub mod poly_intersects;
pub mod poly_offset;
