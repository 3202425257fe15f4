// Geometry primitives module

pub mod angles;

pub use angles::*;
