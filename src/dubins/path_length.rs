//! Shortest Dubins path length between two oriented configurations.
//!
//! By Dubins' theorem the shortest bounded-curvature path between two
//! oriented poses (when the poses are far enough apart) is one of four
//! curvature sequences: RSR, RSL, LSR, LSL, where R/L are maximal right/
//! left turns of radius `r` and S is a straight tangent segment between
//! the two turning circles. Each candidate is constructed independently
//! and the feasible minimum wins.
//!
//! All headings follow the crate convention: 0 at the +y axis,
//! counter-clockwise positive. On a right (clockwise) turning circle the
//! travel direction at position angle `phi` is `phi - pi/2`; on a left
//! (counter-clockwise) circle it is `phi + pi/2`. The arc sweeps below
//! fall out of those two identities.

use std::f64::consts::FRAC_PI_2;

use ordered_float::OrderedFloat;

use crate::common::{Configuration, DubinsError, DubinsResult, Point2D};
use crate::geometry::{heading_between, heading_to_angle, sweep_angle};

/// Minimum pose separation for a guaranteed tangent construction, as a
/// multiple of the turn radius. Pairs closer than this are rejected.
pub const MIN_DISTANCE_RATIO: f64 = 3.0;

/// Slack accepted on inverse-trigonometric arguments before the circle
/// configuration is reported as degenerate.
const TRIG_DOMAIN_EPS: f64 = 1e-9;

/// Curvature sequence of a Dubins path candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    LSL,
    LSR,
    RSL,
    RSR,
}

/// One feasible Dubins path candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCandidate {
    pub path_type: PathType,
    pub length: f64,
}

/// Shortest Dubins path length from `start` to `end` with turn radius `r`.
///
/// Fails when `r` is not positive, when the poses are closer than
/// `MIN_DISTANCE_RATIO * r` (boundary inclusive), or when no candidate
/// admits a valid construction.
pub fn dubins_path_length(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> DubinsResult<f64> {
    shortest_dubins_path(start, end, r).map(|candidate| candidate.length)
}

/// Shortest Dubins path candidate (curvature sequence plus length).
pub fn shortest_dubins_path(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> DubinsResult<PathCandidate> {
    let [(first_type, first_length), rest @ ..] = candidate_lengths(start, end, r)?;
    let mut shortest = first_length.map(|length| PathCandidate {
        path_type: first_type,
        length,
    });
    for (path_type, length) in rest {
        shortest = match (shortest, length) {
            (Ok(best), Ok(length)) if OrderedFloat(best.length) <= OrderedFloat(length) => Ok(best),
            (_, Ok(length)) => Ok(PathCandidate { path_type, length }),
            // a failed candidate is ignored unless every candidate fails,
            // in which case the first failure surfaces
            (previous, Err(_)) => previous,
        };
    }
    shortest
}

/// All candidates that admit a valid construction for this pose pair.
///
/// Fails on the shared preconditions, or when every candidate fails (the
/// first candidate failure is reported).
pub fn feasible_dubins_paths(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> DubinsResult<Vec<PathCandidate>> {
    let mut feasible = Vec::with_capacity(4);
    let mut first_failure = None;
    for (path_type, length) in candidate_lengths(start, end, r)? {
        match length {
            Ok(length) => feasible.push(PathCandidate { path_type, length }),
            Err(err) => first_failure = first_failure.or(Some(err)),
        }
    }
    match first_failure {
        Some(err) if feasible.is_empty() => Err(err),
        _ => Ok(feasible),
    }
}

/// Check preconditions and evaluate all four candidate constructions.
fn candidate_lengths(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> DubinsResult<[(PathType, DubinsResult<f64>); 4]> {
    if r <= 0.0 {
        return Err(DubinsError::InvalidTurnRadius { radius: r });
    }
    let distance = start.position().distance(&end.position());
    let required = MIN_DISTANCE_RATIO * r;
    if distance < required {
        return Err(DubinsError::DistanceTooShort { distance, required });
    }

    let (start_right, start_left) = turn_centers(start, r);
    let (end_right, end_left) = turn_centers(end, r);

    Ok([
        (PathType::RSR, rsr(start.heading, end.heading, &start_right, &end_right, r)),
        (PathType::RSL, rsl(start.heading, end.heading, &start_right, &end_left, r)),
        (PathType::LSR, lsr(start.heading, end.heading, &start_left, &end_right, r)),
        (PathType::LSL, lsl(start.heading, end.heading, &start_left, &end_left, r)),
    ])
}

/// Centers of the right-turn and left-turn circles tangent to a pose.
fn turn_centers(pose: &Configuration, r: f64) -> (Point2D, Point2D) {
    let angle = heading_to_angle(pose.heading);
    let right = Point2D::new(
        pose.x + r * (angle - FRAC_PI_2).cos(),
        pose.y + r * (angle - FRAC_PI_2).sin(),
    );
    let left = Point2D::new(
        pose.x + r * (angle + FRAC_PI_2).cos(),
        pose.y + r * (angle + FRAC_PI_2).sin(),
    );
    (right, left)
}

/// Length of the internal (crossing) tangent between two circles of
/// radius `r` whose centers are `d` apart. The radicand is clamped at
/// zero against floating-point error near `d == 2r`.
fn crossing_tangent_length(d: f64, r: f64) -> f64 {
    (d * d - 4.0 * r * r).max(0.0).sqrt()
}

/// Validate an inverse-trigonometric argument, clamping floating-point
/// slack and rejecting genuinely out-of-range values.
fn checked_trig_ratio(ratio: f64) -> DubinsResult<f64> {
    if ratio > 1.0 + TRIG_DOMAIN_EPS || ratio < -1.0 - TRIG_DOMAIN_EPS {
        return Err(DubinsError::DegenerateAngle { ratio });
    }
    Ok(ratio.clamp(-1.0, 1.0))
}

/// Right-straight-right: external tangent between the two right-turn
/// circles, parallel to the center-to-center line.
fn rsr(
    start_heading: f64,
    end_heading: f64,
    start_center: &Point2D,
    end_center: &Point2D,
    r: f64,
) -> DubinsResult<f64> {
    let tangent = heading_between(start_center, end_center)?;
    Ok(start_center.distance(end_center)
        + r * sweep_angle(start_heading, tangent)
        + r * sweep_angle(tangent, end_heading))
}

/// Left-straight-left: mirror of RSR on the left-turn circles.
fn lsl(
    start_heading: f64,
    end_heading: f64,
    start_center: &Point2D,
    end_center: &Point2D,
    r: f64,
) -> DubinsResult<f64> {
    let tangent = heading_between(start_center, end_center)?;
    Ok(start_center.distance(end_center)
        + r * sweep_angle(tangent, start_heading)
        + r * sweep_angle(end_heading, tangent))
}

/// Right-straight-left: crossing tangent from the start right-turn circle
/// to the end left-turn circle, rotated `asin(2r/d)` off the center line.
fn rsl(
    start_heading: f64,
    end_heading: f64,
    start_center: &Point2D,
    end_center: &Point2D,
    r: f64,
) -> DubinsResult<f64> {
    let d = start_center.distance(end_center);
    let center_heading = heading_between(start_center, end_center)?;
    let ratio = checked_trig_ratio(2.0 * r / d)?;
    let tangent = center_heading - ratio.asin();
    Ok(crossing_tangent_length(d, r)
        + r * sweep_angle(start_heading, tangent)
        + r * sweep_angle(end_heading, tangent))
}

/// Left-straight-right: crossing tangent from the start left-turn circle
/// to the end right-turn circle, placed via `acos(2r/d)`.
fn lsr(
    start_heading: f64,
    end_heading: f64,
    start_center: &Point2D,
    end_center: &Point2D,
    r: f64,
) -> DubinsResult<f64> {
    let d = start_center.distance(end_center);
    let center_heading = heading_between(start_center, end_center)?;
    let ratio = checked_trig_ratio(2.0 * r / d)?;
    let tangent = center_heading + FRAC_PI_2 - ratio.acos();
    Ok(crossing_tangent_length(d, r)
        + r * sweep_angle(tangent, start_heading)
        + r * sweep_angle(tangent, end_heading))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_lateral_offset_closed_form() {
        // Both poses face up, separated laterally by 4r: the winning path
        // is RSL, two half-circle arcs joined by a zero-length crossing
        // tangent, for a total of 2*pi.
        let start = Configuration::new(0.0, 0.0, 0.0);
        let end = Configuration::new(4.0, 0.0, 0.0);
        let best = shortest_dubins_path(&start, &end, 1.0).unwrap();
        assert_eq!(best.path_type, PathType::RSL);
        assert!((best.length - 2.0 * PI).abs() < TOL);

        // the same-sense candidates are a straight tangent of 4 plus one
        // full circle of turning split across the two arcs
        let feasible = feasible_dubins_paths(&start, &end, 1.0).unwrap();
        assert_eq!(feasible.len(), 4);
        for candidate in feasible {
            match candidate.path_type {
                PathType::RSR | PathType::LSL => {
                    assert!((candidate.length - (4.0 + 2.0 * PI)).abs() < TOL);
                }
                PathType::RSL => assert!((candidate.length - 2.0 * PI).abs() < TOL),
                PathType::LSR => assert!(candidate.length > 2.0 * PI),
            }
        }
    }

    #[test]
    fn test_antiparallel_closed_form() {
        // Start facing up at the origin, end facing down at lateral offset
        // -(4 + 2r): a quarter arc, a tangent of length 4, and another
        // quarter arc, all on the left-turn circles.
        let start = Configuration::new(0.0, 0.0, 0.0);
        let end = Configuration::new(-6.0, 0.0, PI);
        let best = shortest_dubins_path(&start, &end, 1.0).unwrap();
        assert_eq!(best.path_type, PathType::LSL);
        assert!((best.length - (4.0 + PI)).abs() < TOL);
    }

    #[test]
    fn test_straight_ahead_collapses_to_distance() {
        // Same heading, offset along the facing direction: no turning is
        // needed and the length equals the Euclidean distance.
        let start = Configuration::new(0.0, 0.0, 0.0);
        let end = Configuration::new(0.0, 5.0, 0.0);
        let length = dubins_path_length(&start, &end, 1.0).unwrap();
        assert!((length - 5.0).abs() < TOL);
    }

    #[test]
    fn test_length_bounded_below_by_distance() {
        let pairs = [
            (Configuration::new(0.0, 0.0, 0.0), Configuration::new(7.0, 2.0, 1.3)),
            (Configuration::new(-3.0, 4.0, 2.9), Configuration::new(5.0, -1.0, -0.7)),
            (Configuration::new(1.0, 1.0, 5.5), Configuration::new(1.0, 9.0, 0.1)),
            (Configuration::new(0.0, 0.0, PI), Configuration::new(-6.0, -6.0, PI / 3.0)),
        ];
        for (start, end) in &pairs {
            let distance = start.position().distance(&end.position());
            let length = dubins_path_length(start, end, 1.0).unwrap();
            assert!(length >= distance - 1e-12, "length {} < distance {}", length, distance);
            assert!(length >= 0.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let start = Configuration::new(0.3, -1.7, 0.9);
        let end = Configuration::new(6.1, 4.2, -2.4);
        let a = dubins_path_length(&start, &end, 1.5).unwrap();
        let b = dubins_path_length(&start, &end, 1.5).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_distance_boundary_inclusive() {
        let start = Configuration::new(0.0, 0.0, 0.0);
        // exactly 3r succeeds
        let end = Configuration::new(3.0, 0.0, 0.0);
        assert!(dubins_path_length(&start, &end, 1.0).is_ok());
        // just below 3r fails
        let end = Configuration::new(2.999, 0.0, 0.0);
        assert!(matches!(
            dubins_path_length(&start, &end, 1.0),
            Err(DubinsError::DistanceTooShort { .. })
        ));
    }

    #[test]
    fn test_identical_poses_rejected() {
        let pose = Configuration::new(2.0, 3.0, 1.0);
        let result = dubins_path_length(&pose, &pose, 0.5);
        assert!(matches!(result, Err(DubinsError::DistanceTooShort { .. })));
    }

    #[test]
    fn test_invalid_turn_radius() {
        let start = Configuration::new(0.0, 0.0, 0.0);
        let end = Configuration::new(10.0, 0.0, 0.0);
        assert!(matches!(
            dubins_path_length(&start, &end, 0.0),
            Err(DubinsError::InvalidTurnRadius { .. })
        ));
        assert!(matches!(
            dubins_path_length(&start, &end, -1.0),
            Err(DubinsError::InvalidTurnRadius { .. })
        ));
    }

    #[test]
    fn test_heading_wrap_invariance() {
        let end = Configuration::new(5.0, 7.0, 1.1);
        let base = Configuration::new(0.0, 0.0, 0.7);
        let reference = dubins_path_length(&base, &end, 1.0).unwrap();
        for &offset in &[2.0 * PI, -2.0 * PI, 4.0 * PI] {
            let start = Configuration::new(0.0, 0.0, 0.7 + offset);
            let length = dubins_path_length(&start, &end, 1.0).unwrap();
            assert!((length - reference).abs() < 1e-9);
        }
    }

    #[test]
    fn test_asymmetric_in_general() {
        let a = Configuration::new(0.0, 0.0, 0.0);
        let b = Configuration::new(8.0, 1.0, 2.0);
        let forward = dubins_path_length(&a, &b, 1.0).unwrap();
        let backward = dubins_path_length(&b, &a, 1.0).unwrap();
        assert!((forward - backward).abs() > 1e-6);
    }

    #[test]
    fn test_crossing_candidates_can_fail_alone() {
        // Close to the 3r limit with circles arranged so a crossing
        // tangent does not exist; the same-sense candidates still carry
        // the computation.
        let start = Configuration::new(0.0, 0.0, 0.0);
        let end = Configuration::new(-3.05, 0.0, 0.0);
        let feasible = feasible_dubins_paths(&start, &end, 1.0).unwrap();
        assert!(!feasible.is_empty());
        assert!(feasible.len() < 4);
        assert!(feasible.iter().any(|c| c.path_type == PathType::RSR));
        assert!(dubins_path_length(&start, &end, 1.0).is_ok());
    }
}
