//! Closed uniform Catmull-Rom spline borrowed from a control point slice.

use loopline_math::{Point2, Vector2};

use super::Curve;
use crate::basis::{point_unchecked, tangent_unchecked};
use crate::eval::ensure_evaluable;
use crate::point::ControlPoint;
use loopline_core::Result;

/// A closed Catmull-Rom spline over `[0, n)`, where `n` is the number of
/// control points.
///
/// Construction checks the four-point minimum once, so evaluation through the
/// [`Curve`] trait is infallible.
#[derive(Debug, Clone, Copy)]
pub struct CatmullRomLoop<'a> {
    points: &'a [ControlPoint],
}

impl<'a> CatmullRomLoop<'a> {
    pub fn new(points: &'a [ControlPoint]) -> Result<Self> {
        ensure_evaluable(points)?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &'a [ControlPoint] {
        self.points
    }
}

impl Curve for CatmullRomLoop<'_> {
    fn point_at(&self, t: f64) -> Point2 {
        point_unchecked(self.points, t)
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        tangent_unchecked(self.points, t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.points.len() as f64)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
