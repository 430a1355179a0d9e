//! Position and tangent evaluation over a control point slice.

use loopline_core::{LoopError, Result};
use loopline_math::{Point2, Vector2};

use crate::basis::{point_unchecked, tangent_unchecked};
use crate::point::ControlPoint;
use crate::MIN_EVAL_POINTS;

/// Fail with `InsufficientPoints` unless `points` can be evaluated.
pub fn ensure_evaluable(points: &[ControlPoint]) -> Result<()> {
    if points.len() < MIN_EVAL_POINTS {
        return Err(LoopError::InsufficientPoints {
            required: MIN_EVAL_POINTS,
            actual: points.len(),
        });
    }
    Ok(())
}

fn ensure_finite(t: f64) -> Result<()> {
    if !t.is_finite() {
        return Err(LoopError::Geometry(format!("parameter must be finite, got {}", t)));
    }
    Ok(())
}

/// Evaluate the closed spline at parameter `t`.
///
/// Passes exactly through control point `i` at `t = i`. Any finite `t` is
/// accepted; the curve is periodic with period `points.len()`.
pub fn evaluate(points: &[ControlPoint], t: f64) -> Result<Point2> {
    ensure_evaluable(points)?;
    ensure_finite(t)?;
    Ok(point_unchecked(points, t))
}

/// Evaluate the (unnormalized) tangent of the closed spline at `t`.
pub fn gradient(points: &[ControlPoint], t: f64) -> Result<Vector2> {
    ensure_evaluable(points)?;
    ensure_finite(t)?;
    Ok(tangent_unchecked(points, t))
}
