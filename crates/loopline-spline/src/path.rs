use loopline_core::error::{LoopError, Result};
use loopline_core::traits::{BoundingBox, Validate};
use loopline_core::{SamplingConfig, Tolerance};
use loopline_math::{Aabb2, Point2, Vector2};
use rayon::prelude::*;

use crate::arc_length::{self, segment_length_unchecked};
use crate::closest::{self, ClosestPoint};
use crate::curve::CatmullRomLoop;
use crate::eval;
use crate::point::ControlPoint;
use crate::tessellate::sample_loop;
use crate::MIN_EVAL_POINTS;

/// A closed loop of control points with cached segment lengths.
///
/// Every structural change recomputes all segment lengths, since inserting,
/// removing or moving a point changes the neighbourhood of up to four
/// segments. With fewer than four points every cached length is zero.
#[derive(Debug, Clone, Default)]
pub struct Path {
    points: Vec<ControlPoint>,
    config: SamplingConfig,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SamplingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            points: Vec::new(),
            config,
        })
    }

    pub fn from_points(positions: &[Point2]) -> Self {
        let mut path = Self {
            points: positions.iter().copied().map(ControlPoint::new).collect(),
            config: SamplingConfig::default(),
        };
        path.recompute_lengths();
        path
    }

    pub fn from_points_with_config(positions: &[Point2], config: SamplingConfig) -> Result<Self> {
        config.validate()?;
        let mut path = Self {
            points: positions.iter().copied().map(ControlPoint::new).collect(),
            config,
        };
        path.recompute_lengths();
        Ok(path)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path holds enough points for curve evaluation.
    pub fn can_evaluate(&self) -> bool {
        self.points.len() >= MIN_EVAL_POINTS
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn positions(&self) -> Vec<Point2> {
        self.points.iter().map(|cp| cp.position).collect()
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Replace the sampling configuration and refresh the length caches.
    ///
    /// An invalid configuration is rejected and the current one is kept.
    pub fn set_config(&mut self, config: SamplingConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.recompute_lengths();
        Ok(())
    }

    /// Append a control point after the current last point.
    pub fn add_point(&mut self, position: Point2) {
        self.points.push(ControlPoint::new(position));
        self.recompute_lengths();
    }

    /// Remove the most recently added control point.
    pub fn remove_point(&mut self) -> Option<Point2> {
        let removed = self.points.pop()?;
        self.recompute_lengths();
        Some(removed.position)
    }

    /// Move control point `index` to `position`.
    pub fn set_point(&mut self, index: usize, position: Point2) -> Result<()> {
        let len = self.points.len();
        let cp = self
            .points
            .get_mut(index)
            .ok_or(LoopError::IndexOutOfRange { index, len })?;
        cp.position = position;
        self.recompute_lengths();
        Ok(())
    }

    /// Translate control point `index` by `delta`.
    pub fn move_point(&mut self, index: usize, delta: Vector2) -> Result<Point2> {
        let len = self.points.len();
        let current = self
            .points
            .get(index)
            .ok_or(LoopError::IndexOutOfRange { index, len })?
            .position;
        let moved = current + delta;
        self.set_point(index, moved)?;
        Ok(moved)
    }

    /// Recompute every cached segment length.
    fn recompute_lengths(&mut self) {
        if !self.can_evaluate() {
            for cp in &mut self.points {
                cp.length = 0.0;
            }
            return;
        }

        let samples = self.config.samples_per_segment();
        let points = &self.points;
        let lengths: Vec<f64> = (0..points.len())
            .into_par_iter()
            .map(|i| segment_length_unchecked(points, i, samples))
            .collect();

        for (cp, length) in self.points.iter_mut().zip(lengths) {
            cp.length = length;
        }
        log::trace!(
            "Recomputed {} segment lengths, total {}",
            self.points.len(),
            self.total_length()
        );
    }

    /// Cached length of the segment starting at `index`.
    pub fn cached_length(&self, index: usize) -> Result<f64> {
        self.points
            .get(index)
            .map(|cp| cp.length)
            .ok_or(LoopError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Total arc length of the closed loop.
    pub fn total_length(&self) -> f64 {
        arc_length::total_length(&self.points)
    }

    pub fn evaluate(&self, t: f64) -> Result<Point2> {
        eval::evaluate(&self.points, t)
    }

    pub fn gradient(&self, t: f64) -> Result<Vector2> {
        eval::gradient(&self.points, t)
    }

    /// Freshly integrated length of the segment starting at `node`.
    pub fn segment_length(&self, node: usize) -> Result<f64> {
        arc_length::segment_length(&self.points, node, &self.config)
    }

    pub fn normalized_offset(&self, offset: f64) -> Result<f64> {
        arc_length::normalized_offset(&self.points, offset, &self.config)
    }

    pub fn closest_parameter(&self, node: usize, next_node: usize, query: Point2) -> Result<f64> {
        closest::closest_parameter(&self.points, node, next_node, query, &self.config)
    }

    pub fn closest_point(&self, node: usize, next_node: usize, query: Point2) -> Result<ClosestPoint> {
        closest::closest_point(&self.points, node, next_node, query, &self.config)
    }

    /// Bounds of the curve itself, sampled at the configured resolution.
    ///
    /// The loop bulges outside its control points, so this is usually larger
    /// than [`BoundingBox::bounding_box`].
    pub fn curve_bounds(&self) -> Result<Aabb2> {
        let samples = sample_loop(&self.points, self.config.samples_per_segment())?;
        Aabb2::from_points(&samples).ok_or(LoopError::InsufficientPoints {
            required: MIN_EVAL_POINTS,
            actual: self.points.len(),
        })
    }

    /// Borrow the path as a [`Curve`](crate::Curve).
    pub fn as_curve(&self) -> Result<CatmullRomLoop<'_>> {
        CatmullRomLoop::new(&self.points)
    }
}

impl Validate for Path {
    fn validate(&self) -> Result<()> {
        self.config.validate()?;
        eval::ensure_evaluable(&self.points)?;

        for (i, cp) in self.points.iter().enumerate() {
            if !cp.position.is_finite() {
                return Err(LoopError::Geometry(format!(
                    "control point {} has non-finite position {:?}",
                    i, cp.position
                )));
            }
        }

        let tolerance = Tolerance::loose();
        let samples = self.config.samples_per_segment();
        for (i, cp) in self.points.iter().enumerate() {
            let fresh = segment_length_unchecked(&self.points, i, samples);
            if !tolerance.linear_eq(fresh, cp.length) {
                return Err(LoopError::Geometry(format!(
                    "stale length cache at point {}: cached {}, actual {}",
                    i, cp.length, fresh
                )));
            }
        }

        Ok(())
    }
}

impl BoundingBox for Path {
    type Bounds = Aabb2;

    fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.positions())
    }
}
