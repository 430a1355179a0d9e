//! Tessellation utilities for turning curves into polylines a renderer can draw.

use loopline_core::{LoopError, Result};
use loopline_math::Point2;

use crate::curve::{CatmullRomLoop, Curve};
use crate::point::ControlPoint;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint deviation
/// from the chord exceeds the given `tolerance`.
///
/// # Arguments
/// * `curve` - The curve to tessellate
/// * `tolerance` - Maximum allowed deviation from the true curve
///
/// # Returns
/// A vector of points approximating the curve. For a closed curve the last
/// point repeats the first.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    let mut points = Vec::new();
    points.push(curve.point_at(t_min));
    subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    points
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Depth below which a closed curve is always split, so a loop whose start
/// and end coincide is never mistaken for a flat chord.
const MIN_DEPTH: u32 = 2;

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point2>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    // Chord midpoint
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    let force_split = curve.is_closed() && depth < MIN_DEPTH;
    if force_split || deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(curve.point_at(t1));
    }
}

/// Sample a closed spline uniformly, `samples_per_segment` points per segment.
///
/// Returns `n * samples_per_segment + 1` points; the last repeats the first.
pub fn sample_loop(points: &[ControlPoint], samples_per_segment: usize) -> Result<Vec<Point2>> {
    if samples_per_segment == 0 {
        return Err(LoopError::InvalidConfig(
            "samples per segment must be positive".into(),
        ));
    }
    let curve = CatmullRomLoop::new(points)?;
    let count = points.len() * samples_per_segment;

    let mut polyline = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let t = i as f64 / samples_per_segment as f64;
        polyline.push(curve.point_at(t));
    }
    Ok(polyline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Path;
    use loopline_math::dvec2;

    fn square_path() -> Path {
        Path::from_points(&[
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ])
    }

    #[test]
    fn test_sample_loop_counts_and_closure() {
        let path = square_path();
        let polyline = sample_loop(path.points(), 8).unwrap();
        assert_eq!(polyline.len(), 4 * 8 + 1);
        assert!((polyline[0] - polyline[32]).length() < 1e-12);
        // Every eighth sample is a control point
        for (i, cp) in path.points().iter().enumerate() {
            assert!((polyline[i * 8] - cp.position).length() < 1e-12);
        }
    }

    #[test]
    fn test_sample_loop_errors() {
        let path = square_path();
        assert!(matches!(
            sample_loop(path.points(), 0),
            Err(LoopError::InvalidConfig(_))
        ));
        assert!(matches!(
            sample_loop(&path.points()[..2], 4),
            Err(LoopError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_curve_to_polyline_closed_loop() {
        let path = square_path();
        let curve = path.as_curve().unwrap();
        let points = curve_to_polyline(&curve, 0.01);
        assert!(
            points.len() > 16,
            "loop should produce many points, got {}",
            points.len()
        );
        assert!((points[0] - *points.last().unwrap()).length() < 1e-12);

        // Polyline length approaches the integrated arc length from below
        let poly_len: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
        let arc_len = path.total_length();
        assert!(poly_len <= arc_len * 1.001);
        assert!(poly_len > 0.99 * arc_len, "{} vs {}", poly_len, arc_len);
    }
}
