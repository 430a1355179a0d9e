//! Uniform Catmull-Rom basis functions and segment index selection.

use loopline_math::{wrap, wrap_signed, DVec2, Point2, Vector2};

use crate::point::ControlPoint;

/// Position basis `[q1, q2, q3, q4]` at local parameter `u`.
///
/// The caller applies the `0.5` normalization.
pub fn position_weights(u: f64) -> [f64; 4] {
    let uu = u * u;
    let uuu = uu * u;
    [
        -uuu + 2.0 * uu - u,
        3.0 * uuu - 5.0 * uu + 2.0,
        -3.0 * uuu + 4.0 * uu + u,
        uuu - uu,
    ]
}

/// Analytic derivative of [`position_weights`].
pub fn derivative_weights(u: f64) -> [f64; 4] {
    let uu = u * u;
    [
        -3.0 * uu + 4.0 * u - 1.0,
        9.0 * uu - 10.0 * u,
        -9.0 * uu + 8.0 * u + 1.0,
        3.0 * uu - 2.0 * u,
    ]
}

/// Find the four control point indices around parameter `t` and the local
/// parameter `u ∈ [0, 1)`.
///
/// Returns `([p0, p1, p2, p3], u)` with `p1 = floor(t) mod n`.
pub fn segment_indices(t: f64, n: usize) -> ([usize; 4], f64) {
    let base = t.floor();
    let u = t - base;
    let p1 = wrap_signed(base as i64, n);
    let p0 = if p1 == 0 { n - 1 } else { p1 - 1 };
    let p2 = wrap(p1 + 1, n);
    let p3 = wrap(p2 + 1, n);
    ([p0, p1, p2, p3], u)
}

fn blend(points: &[ControlPoint], indices: [usize; 4], weights: [f64; 4]) -> DVec2 {
    let mut acc = DVec2::ZERO;
    for (&i, &w) in indices.iter().zip(weights.iter()) {
        acc += points[i].position * w;
    }
    acc * 0.5
}

/// Curve point at `t`. `points` must hold at least four entries.
pub(crate) fn point_unchecked(points: &[ControlPoint], t: f64) -> Point2 {
    let (indices, u) = segment_indices(t, points.len());
    blend(points, indices, position_weights(u))
}

/// Curve tangent at `t`. `points` must hold at least four entries.
pub(crate) fn tangent_unchecked(points: &[ControlPoint], t: f64) -> Vector2 {
    let (indices, u) = segment_indices(t, points.len());
    blend(points, indices, derivative_weights(u))
}
