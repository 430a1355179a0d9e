//! Track editing commands: point insertion and removal, cursor navigation,
//! point selection and nudging.

use loopline_core::traits::Validate;
use loopline_core::{EditorConfig, LoopError, Result};
use loopline_math::{dvec2, wrap, Point2, Vector2};
use loopline_spline::{ClosestPoint, Path};

use crate::cursor::SelectionCursor;

/// Screen-space direction for nudging the selected point. `Up` is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self, step: f64) -> Vector2 {
        match self {
            Direction::Up => dvec2(0.0, -step),
            Direction::Down => dvec2(0.0, step),
            Direction::Left => dvec2(-step, 0.0),
            Direction::Right => dvec2(step, 0.0),
        }
    }
}

/// Editing state around a [`Path`]: the active segment cursor, the selected
/// control point and the lap counter.
#[derive(Debug, Clone)]
pub struct TrackEditor {
    path: Path,
    cursor: SelectionCursor,
    selected: usize,
    lap: u32,
    config: EditorConfig,
}

impl Default for TrackEditor {
    fn default() -> Self {
        Self {
            path: Path::new(),
            cursor: SelectionCursor::default(),
            selected: 0,
            lap: 1,
            config: EditorConfig::default(),
        }
    }
}

impl TrackEditor {
    pub fn new(config: EditorConfig) -> Result<Self> {
        Self::from_points(&[], config)
    }

    pub fn from_points(positions: &[Point2], config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let mut editor = Self {
            path: Path::from_points_with_config(positions, config.sampling)?,
            config,
            ..Self::default()
        };
        editor.cursor.normalize(editor.path.len());
        Ok(editor)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cursor(&self) -> SelectionCursor {
        self.cursor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current lap, starting at 1.
    pub fn lap(&self) -> u32 {
        self.lap
    }

    /// Index of the selected control point, if the path has any.
    pub fn selected_point(&self) -> Option<usize> {
        (!self.path.is_empty()).then_some(self.selected)
    }

    pub fn add_point(&mut self, position: Point2) {
        self.path.add_point(position);
        log::debug!(
            "Added point ({}, {}), path has {} points",
            position.x,
            position.y,
            self.path.len()
        );
    }

    /// Remove the most recently added point and pull the cursor and the
    /// selection back inside the shorter path.
    pub fn remove_point(&mut self) -> Option<Point2> {
        let removed = self.path.remove_point()?;
        let len = self.path.len();
        self.cursor.normalize(len);
        self.selected = self.selected.min(len.saturating_sub(1));
        log::debug!(
            "Removed point ({}, {}), path has {} points",
            removed.x,
            removed.y,
            len
        );
        Some(removed)
    }

    /// Advance the active segment. Wrapping back to the first point starts a
    /// new lap.
    pub fn next_node(&mut self) -> Result<()> {
        if self.cursor.advance(self.path.len())? {
            self.lap += 1;
            log::debug!("Lap {} started", self.lap);
        }
        Ok(())
    }

    pub fn prev_node(&mut self) -> Result<()> {
        self.cursor.retreat(self.path.len())
    }

    pub fn select_next_point(&mut self) -> Result<usize> {
        let len = self.non_empty_len()?;
        self.selected = wrap(self.selected + 1, len);
        Ok(self.selected)
    }

    pub fn select_prev_point(&mut self) -> Result<usize> {
        let len = self.non_empty_len()?;
        self.selected = wrap(self.selected + len - 1, len);
        Ok(self.selected)
    }

    /// Move the selected point one nudge step in `direction`.
    pub fn nudge_selected(&mut self, direction: Direction) -> Result<Point2> {
        self.non_empty_len()?;
        let moved = self
            .path
            .move_point(self.selected, direction.offset(self.config.nudge_step))?;
        log::debug!(
            "Nudged point {} {:?} to ({}, {})",
            self.selected,
            direction,
            moved.x,
            moved.y
        );
        Ok(moved)
    }

    /// Closest curve sample to `query` within the active segment range.
    pub fn closest_on_active_segment(&self, query: Point2) -> Result<ClosestPoint> {
        self.path
            .closest_point(self.cursor.node, self.cursor.next_node, query)
    }

    fn non_empty_len(&self) -> Result<usize> {
        match self.path.len() {
            0 => Err(LoopError::InsufficientPoints {
                required: 1,
                actual: 0,
            }),
            len => Ok(len),
        }
    }
}
