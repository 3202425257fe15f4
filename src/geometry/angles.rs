//! Angle and heading primitives.
//!
//! Two angle conventions coexist here. A *heading* is measured from the
//! +y ("up") axis, counter-clockwise positive; a *math angle* is measured
//! from the +x axis, counter-clockwise positive. All wrapped angles live
//! in the half-open interval [0, 2*pi).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::common::{DubinsError, DubinsResult, Point2D};

/// Normalize an angle into [0, 2*pi). Idempotent.
pub fn wrap_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2*pi for tiny negative inputs
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

/// Convert a heading into the equivalent math angle.
pub fn heading_to_angle(heading: f64) -> f64 {
    wrap_angle(heading + FRAC_PI_2)
}

/// Heading of the vector from `a` to `b`.
///
/// Fails with [`DubinsError::CoincidentPoses`] when the points are equal,
/// since the direction is undefined there.
pub fn heading_between(a: &Point2D, b: &Point2D) -> DubinsResult<f64> {
    if a == b {
        return Err(DubinsError::CoincidentPoses);
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    Ok(wrap_angle((-dx).atan2(dy)))
}

/// Forward (non-negative) sweep from directional angle `b` to `a`.
///
/// The double wrap guarantees a value in [0, 2*pi) regardless of the raw
/// sign of `a - b`. Callers pick the argument order according to the
/// turning sense of the arc being measured.
pub fn sweep_angle(a: f64, b: f64) -> f64 {
    wrap_angle(2.0 * PI + wrap_angle(a) - wrap_angle(b))
}
