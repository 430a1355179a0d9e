//! Dense closest-point search along a range of segments.

use loopline_core::traits::Validate;
use loopline_core::{LoopError, Result, SamplingConfig};
use loopline_math::Point2;
use serde::{Deserialize, Serialize};

use crate::basis::point_unchecked;
use crate::eval::ensure_evaluable;
use crate::point::ControlPoint;

/// Result of a closest-point search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestPoint {
    /// Parameter of the closest sample.
    pub t: f64,
    /// Curve position at `t`.
    pub point: Point2,
    /// Euclidean distance from the query to `point`.
    pub distance: f64,
}

/// Parameter range scanned for a cursor `(node, next_node)`.
///
/// When `node < next_node` the range is `[node, next_node)`. Otherwise it is
/// `[node, len)`: the scan stops at the end of the sequence and does not
/// continue from index 0 up to `next_node`.
pub fn scan_range(node: usize, next_node: usize, len: usize) -> (f64, f64) {
    if node < next_node {
        (node as f64, next_node as f64)
    } else {
        (node as f64, len as f64)
    }
}

/// Find the sample on the curve closest to `query`, scanning the range given
/// by [`scan_range`] every `config.step` in `t`.
///
/// Ties resolve to the lowest `t`. The result is only as accurate as the step.
pub fn closest_point(
    points: &[ControlPoint],
    node: usize,
    next_node: usize,
    query: Point2,
    config: &SamplingConfig,
) -> Result<ClosestPoint> {
    config.validate()?;
    ensure_evaluable(points)?;
    let len = points.len();
    for index in [node, next_node] {
        if index >= len {
            return Err(LoopError::IndexOutOfRange { index, len });
        }
    }

    log::debug!(
        "Closest search: node {} next {} query ({}, {})",
        node,
        next_node,
        query.x,
        query.y
    );

    let (start, end) = scan_range(node, next_node, len);
    let mut best = ClosestPoint {
        t: start,
        point: point_unchecked(points, start),
        distance: f64::INFINITY,
    };

    let mut i = 0usize;
    loop {
        let t = start + i as f64 * config.step;
        if t >= end {
            break;
        }
        let p = point_unchecked(points, t);
        let distance = query.distance(p);
        if distance < best.distance {
            best = ClosestPoint { t, point: p, distance };
        }
        i += 1;
    }

    Ok(best)
}

/// Parameter of the closest sample; see [`closest_point`].
pub fn closest_parameter(
    points: &[ControlPoint],
    node: usize,
    next_node: usize,
    query: Point2,
    config: &SamplingConfig,
) -> Result<f64> {
    closest_point(points, node, next_node, query, config).map(|c| c.t)
}
