//! Curve trait and the closed Catmull-Rom implementation.

mod catmull_rom;

use loopline_math::{Point2, Vector2};

pub use catmull_rom::CatmullRomLoop;

/// Trait for parametric curves in the plane.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
