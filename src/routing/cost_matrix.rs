//! Dense pairwise Dubins cost matrix for an asymmetric tour optimizer.

use std::ops::Index;

use itertools::iproduct;
use nalgebra::DMatrix;

use crate::common::{DubinsResult, Point2D};
use crate::dubins::dubins_path_length;
use crate::routing::tour::configuration_at;

/// Cost assigned to edges a tour search must never take: the diagonal
/// self-edges and, under [`InfeasibleEdge::Sentinel`], infeasible pairs.
pub const MAX_EDGE_COST: f64 = 999_999.0;

/// Policy for off-diagonal pose pairs whose path computation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleEdge {
    /// Propagate the first failing edge and abort the build.
    Fail,
    /// Substitute [`MAX_EDGE_COST`] so a downstream minimum-cost search
    /// avoids the edge without the build failing.
    Sentinel,
}

/// Dense square matrix of pairwise edge costs, indexed `(from, to)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    costs: DMatrix<f64>,
}

impl CostMatrix {
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[(from, to)]
    }

    /// Number of nodes (the matrix is `len x len`).
    pub fn len(&self) -> usize {
        self.costs.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.nrows() == 0
    }

    /// The underlying adjacency matrix, for consumers that operate on it
    /// directly.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.costs
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        &self.costs[(from, to)]
    }
}

/// Build the full pairwise Dubins cost matrix over the parallel
/// `points`/`headings` collections.
///
/// Every diagonal entry is [`MAX_EDGE_COST`] regardless of the pose
/// values, so a minimum-cost tour search never selects a self-loop.
pub fn build_cost_matrix(
    points: &[Point2D],
    headings: &[f64],
    r: f64,
    on_infeasible: InfeasibleEdge,
) -> DubinsResult<CostMatrix> {
    assert_eq!(points.len(), headings.len());

    let n = points.len();
    let mut costs = DMatrix::from_element(n, n, MAX_EDGE_COST);
    for (i, j) in iproduct!(0..n, 0..n) {
        if i == j {
            continue; // the diagonal keeps the sentinel
        }
        let start = configuration_at(i, points, headings);
        let end = configuration_at(j, points, headings);
        match dubins_path_length(&start, &end, r) {
            Ok(length) => costs[(i, j)] = length,
            Err(err) => match on_infeasible {
                InfeasibleEdge::Fail => return Err(err),
                InfeasibleEdge::Sentinel => {} // entry stays MAX_EDGE_COST
            },
        }
    }
    Ok(CostMatrix { costs })
}
