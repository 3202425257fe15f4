//! Utility modules for dubins_routing

pub mod visualization;

pub use visualization::{colors, PointStyle, TourStyle, Visualizer};
