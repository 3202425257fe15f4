// Dubins single-pair path-length solver module

pub mod path_length;

pub use path_length::*;
