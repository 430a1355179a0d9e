//! Progress of an agent travelling along the closed track.

use loopline_core::{LoopError, Result, Tolerance};
use loopline_math::{Point2, Vector2};
use loopline_spline::Path;
use serde::{Deserialize, Serialize};

/// Position and orientation on the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub t: f64,
    pub position: Point2,
    pub tangent: Vector2,
    /// Facing direction in radians, measured from the +x axis.
    pub heading: f64,
}

/// Arc-length progress along a closed path.
///
/// `distance` always stays within `[0, total_length)`; whole loops are
/// counted in `laps` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackFollower {
    distance: f64,
    laps: i64,
}

impl TrackFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Completed laps; driving backwards past the start counts down.
    pub fn laps(&self) -> i64 {
        self.laps
    }

    /// Travel `delta` along `path`. Returns the number of laps completed by
    /// this move (negative when moving backwards past the start).
    pub fn advance(&mut self, path: &Path, delta: f64) -> Result<i64> {
        let total = track_length(path)?;
        if !delta.is_finite() {
            return Err(LoopError::OffsetOutOfRange {
                offset: delta,
                total,
            });
        }

        let travelled = self.distance + delta;
        let completed = travelled.div_euclid(total) as i64;
        self.distance = travelled.rem_euclid(total);
        // rem_euclid can round up to `total` for tiny negative inputs.
        if self.distance >= total {
            self.distance = 0.0;
        }
        self.laps += completed;
        if completed != 0 {
            log::debug!("Follower completed {} lap(s), now at {}", completed, self.laps);
        }
        Ok(completed)
    }

    /// Position and heading at the current distance.
    pub fn pose(&self, path: &Path) -> Result<Pose> {
        track_length(path)?;
        let t = path.normalized_offset(self.distance)?;
        let position = path.evaluate(t)?;
        let tangent = path.gradient(t)?;
        Ok(Pose {
            t,
            position,
            tangent,
            heading: tangent.y.atan2(tangent.x),
        })
    }
}

fn track_length(path: &Path) -> Result<f64> {
    if !path.can_evaluate() {
        return Err(LoopError::InsufficientPoints {
            required: loopline_spline::MIN_EVAL_POINTS,
            actual: path.len(),
        });
    }
    let total = path.total_length();
    if Tolerance::default().is_zero(total) {
        return Err(LoopError::Geometry("track has zero length".into()));
    }
    Ok(total)
}
