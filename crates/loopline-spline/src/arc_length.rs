//! Arc-length measurement and arc-length to parameter conversion.

use loopline_core::traits::Validate;
use loopline_core::{LoopError, OffsetPolicy, Result, SamplingConfig, Tolerance};

use crate::basis::point_unchecked;
use crate::eval::ensure_evaluable;
use crate::point::ControlPoint;

/// Polyline length of segment `[node, node + 1]` sampled at `samples` evenly
/// spaced parameters. `points` must hold at least four entries.
pub(crate) fn segment_length_unchecked(points: &[ControlPoint], node: usize, samples: usize) -> f64 {
    let start = node as f64;
    let mut length = 0.0;
    let mut previous = point_unchecked(points, start);

    for i in 1..=samples {
        let t = start + i as f64 / samples as f64;
        let current = point_unchecked(points, t);
        length += previous.distance(current);
        previous = current;
    }

    length
}

/// Approximate the arc length of the segment starting at control point `node`.
///
/// The segment is cut into [`SamplingConfig::samples_per_segment`] equal
/// parameter steps, endpoint included, and the distances between consecutive
/// samples are summed. A step that does not divide 1 evenly is rounded to the
/// nearest one that does, so `step = 0.3` samples every third of the segment.
pub fn segment_length(points: &[ControlPoint], node: usize, config: &SamplingConfig) -> Result<f64> {
    config.validate()?;
    ensure_evaluable(points)?;
    if node >= points.len() {
        return Err(LoopError::IndexOutOfRange {
            index: node,
            len: points.len(),
        });
    }
    Ok(segment_length_unchecked(points, node, config.samples_per_segment()))
}

/// Sum of the cached segment lengths.
pub fn total_length(points: &[ControlPoint]) -> f64 {
    points.iter().map(|cp| cp.length).sum()
}

/// Convert an arc-length offset along the closed path into a parameter `t`.
///
/// Walks the cached segment lengths until the offset falls inside a segment
/// and interpolates linearly within it. Offsets outside `[0, total]` are
/// wrapped or rejected depending on `config.offset_policy`.
pub fn normalized_offset(points: &[ControlPoint], offset: f64, config: &SamplingConfig) -> Result<f64> {
    ensure_evaluable(points)?;

    let total = total_length(points);
    if !offset.is_finite() {
        return Err(LoopError::OffsetOutOfRange { offset, total });
    }

    let tolerance = Tolerance::default();
    if tolerance.is_zero(total) {
        // Every point coincides; the whole loop collapses onto t = 0.
        return Ok(0.0);
    }

    let mut remaining = offset;
    if offset < 0.0 || offset > total {
        match config.offset_policy {
            OffsetPolicy::Reject => {
                return Err(LoopError::OffsetOutOfRange { offset, total });
            }
            OffsetPolicy::Wrap => {
                remaining = offset.rem_euclid(total);
                log::warn!(
                    "Offset {} outside path length {}, wrapped to {}",
                    offset,
                    total,
                    remaining
                );
            }
        }
    }

    let last = points.len() - 1;
    for (i, cp) in points.iter().enumerate() {
        // The last segment absorbs rounding residue from the subtractions.
        if remaining > cp.length && i < last {
            remaining -= cp.length;
            continue;
        }
        if tolerance.is_zero(cp.length) {
            return Ok(i as f64);
        }
        return Ok(i as f64 + (remaining / cp.length).min(1.0));
    }

    Ok(last as f64)
}
