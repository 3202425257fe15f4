//! Tour cost aggregation.

use crate::common::{Configuration, DubinsResult, Point2D};
use crate::dubins::dubins_path_length;

/// Total Dubins path length along `tour`, an ordered sequence of
/// identifiers into the parallel `points`/`headings` collections.
///
/// With `include_return_edge` set, the edge from the last node back to
/// the first is added, closing the loop. Tours of fewer than two nodes
/// cost exactly zero. Any failing edge aborts the whole aggregate; a
/// partial or zero-filled total is never returned.
pub fn tour_cost(
    tour: &[usize],
    points: &[Point2D],
    headings: &[f64],
    r: f64,
    include_return_edge: bool,
) -> DubinsResult<f64> {
    assert_eq!(points.len(), headings.len());

    if tour.len() < 2 {
        return Ok(0.0);
    }

    let mut cost = 0.0;
    for window in tour.windows(2) {
        cost += edge_cost(window[0], window[1], points, headings, r)?;
    }
    if include_return_edge {
        cost += edge_cost(tour[tour.len() - 1], tour[0], points, headings, r)?;
    }
    Ok(cost)
}

pub(crate) fn configuration_at(id: usize, points: &[Point2D], headings: &[f64]) -> Configuration {
    Configuration::new(points[id].x, points[id].y, headings[id])
}

fn edge_cost(
    from: usize,
    to: usize,
    points: &[Point2D],
    headings: &[f64],
    r: f64,
) -> DubinsResult<f64> {
    let start = configuration_at(from, points, headings);
    let end = configuration_at(to, points, headings);
    dubins_path_length(&start, &end, r)
}
