//! DubinsRouting - Dubins path-length costs for asymmetric tour optimization
//!
//! This crate computes the shortest Dubins path length between oriented
//! planar configurations for a vehicle with a minimum turning radius, and
//! aggregates those lengths into tour costs and dense pairwise cost
//! matrices consumed by an external asymmetric tour optimizer.

// Core modules
pub mod common;
pub mod utils;

// Computation modules
pub mod geometry;
pub mod dubins;
pub mod routing;

// Re-export common types for convenience
pub use common::{Configuration, Point2D};
pub use common::{DubinsError, DubinsResult};
pub use dubins::{
    dubins_path_length, feasible_dubins_paths, shortest_dubins_path, PathCandidate, PathType,
    MIN_DISTANCE_RATIO,
};
pub use routing::{build_cost_matrix, tour_cost, CostMatrix, InfeasibleEdge, MAX_EDGE_COST};
