// Tour-cost and cost-matrix aggregation module

pub mod tour;
pub mod cost_matrix;

pub use tour::*;
pub use cost_matrix::*;
