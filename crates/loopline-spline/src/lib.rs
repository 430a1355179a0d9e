//! Loopline curve engine: closed uniform Catmull-Rom splines through an
//! ordered loop of control points.
//!
//! The free functions in [`eval`], [`arc_length`] and [`closest`] are pure
//! functions of a control point slice. [`Path`] owns the slice, keeps the
//! per-segment length caches fresh and delegates to them.

pub mod arc_length;
pub mod basis;
pub mod closest;
pub mod curve;
pub mod eval;
pub mod path;
pub mod point;
pub mod tessellate;

pub use closest::ClosestPoint;
pub use curve::{CatmullRomLoop, Curve};
pub use path::Path;
pub use point::ControlPoint;

/// Minimum number of control points for curve evaluation: one before the
/// current segment, the segment itself, and one after.
pub const MIN_EVAL_POINTS: usize = 4;
