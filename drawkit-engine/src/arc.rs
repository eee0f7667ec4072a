//! Arc operations using bezier curve approximation.
//!
//! tiny-skia does not support arc primitives directly, so arcs are
//! approximated with one cubic bezier per quarter turn (or less).

use crate::path::PathSegment;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Arcs spanning more turns than this are folded back to this many.
const MAX_FULL_CIRCLES: f64 = 65536.0;

/// A circular arc in user space: the point it starts at and the curves that
/// sweep it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arc {
    pub start: (f64, f64),
    pub curves: Vec<PathSegment>,
}

/// Build the arc from `angle1` to `angle2` around `(xc, yc)`, or `None` when
/// any argument is not finite.
///
/// With `negative == false` the sweep runs in the direction of increasing
/// angle, and `angle2` is taken as advanced by full turns until it is not
/// less than `angle1`. With `negative == true` the sweep decreases and
/// `angle2` is taken as reduced by full turns until it is not greater than
/// `angle1`.
pub(crate) fn arc(
    xc: f64,
    yc: f64,
    radius: f64,
    angle1: f64,
    angle2: f64,
    negative: bool,
) -> Option<Arc> {
    if ![xc, yc, radius, angle1, angle2].iter().all(|v| v.is_finite()) {
        return None;
    }
    // Curves are generated from the reduced start angle so that huge angles
    // keep full precision in the step between segments.
    let base = angle1.rem_euclid(TAU);
    let span = sweep(angle1, angle2, negative);
    let point = |angle: f64| (xc + radius * angle.cos(), yc + radius * angle.sin());

    let num_segments = (span.abs() / FRAC_PI_2).ceil() as usize;
    let step = if num_segments == 0 {
        0.0
    } else {
        span / num_segments as f64
    };

    let mut curves = Vec::with_capacity(num_segments);
    for i in 0..num_segments {
        let a = base + i as f64 * step;
        let b = if i + 1 == num_segments {
            base + span
        } else {
            a + step
        };
        curves.push(arc_segment(xc, yc, radius, a, b));
    }

    Some(Arc {
        start: point(base),
        curves,
    })
}

/// Signed sweep from `angle1` to the wrapped `angle2`. Sweeps of more than
/// `MAX_FULL_CIRCLES` turns keep their remainder plus that many turns.
fn sweep(angle1: f64, angle2: f64, negative: bool) -> f64 {
    let limit = TAU * MAX_FULL_CIRCLES;
    let (from, to) = if negative {
        (angle2, angle1)
    } else {
        (angle1, angle2)
    };
    let diff = to - from;
    let turns = if diff == f64::INFINITY {
        (to.rem_euclid(TAU) - from.rem_euclid(TAU)).rem_euclid(TAU) + limit
    } else if diff == f64::NEG_INFINITY {
        (to.rem_euclid(TAU) - from.rem_euclid(TAU)).rem_euclid(TAU)
    } else if diff < 0.0 {
        diff.rem_euclid(TAU)
    } else if diff > limit {
        diff % TAU + limit
    } else {
        diff
    };
    if negative {
        -turns
    } else {
        turns
    }
}

/// A single arc segment (at most a quarter turn) as a cubic bezier curve.
fn arc_segment(cx: f64, cy: f64, r: f64, angle1: f64, angle2: f64) -> PathSegment {
    // Calculate bezier control point factor
    let k = 4.0 / 3.0 * ((angle2 - angle1) / 4.0).tan();

    // Points on the unit circle
    let (y1, x1) = angle1.sin_cos();
    let (y2, x2) = angle2.sin_cos();

    // Control points on the unit circle
    let cp1x = x1 - k * y1;
    let cp1y = y1 + k * x1;
    let cp2x = x2 + k * y2;
    let cp2y = y2 - k * x2;

    PathSegment::CurveTo(
        cx + r * cp1x,
        cy + r * cp1y,
        cx + r * cp2x,
        cy + r * cp2y,
        cx + r * x2,
        cy + r * y2,
    )
}
