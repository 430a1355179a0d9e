use loopline_math::Point2;

/// A control point of a closed path.
///
/// `length` caches the arc length of the segment that starts here and ends at
/// the next point. Only [`Path`](crate::Path) can update it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: Point2,
    pub(crate) length: f64,
}

impl ControlPoint {
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            length: 0.0,
        }
    }

    /// Cached arc length of the outgoing segment.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl From<Point2> for ControlPoint {
    fn from(position: Point2) -> Self {
        Self::new(position)
    }
}
