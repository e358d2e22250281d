#![allow(dead_code)]
mod debug;
mod poly_fixtures;
mod poly_modifiers;
mod poly_test_properties;

pub use debug::*;
pub use poly_fixtures::*;
pub use poly_modifiers::*;
pub use poly_test_properties::*;
