//! Curve model: control points and the sampled polyline.
//!
//! The polyline is derived data. Mutations mark it stale and callers trigger
//! [`CurveModel::recompute`] (or [`CurveModel::refresh`]) before reading it.

use crate::error::{CurveError, CurveResult};
use glam::Vec2;

/// Default parametric step between samples.
pub const DEFAULT_PRECISION: f32 = 0.01;

/// Upper bound on the number of samples a precision may request.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Linear interpolation between two points, applied per coordinate.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Evaluate the Bézier curve defined by `points` at parameter `t`.
///
/// Uses iterative De Casteljau reduction: each pass replaces `w[i]` with
/// `lerp(w[i], w[i + 1], t)` and drops the last element until two points
/// remain, which are interpolated once more. Fewer than two points yield
/// the origin.
pub fn de_casteljau(points: &[Vec2], t: f32) -> Vec2 {
    if points.len() < 2 {
        return Vec2::ZERO;
    }

    let mut work = points.to_vec();
    while work.len() > 2 {
        for i in 0..work.len() - 1 {
            work[i] = lerp(work[i], work[i + 1], t);
        }
        work.pop();
    }
    lerp(work[0], work[1], t)
}

/// Number of samples produced for a given precision.
fn sample_count_for(precision: f32) -> usize {
    (1.0 / precision).floor() as usize + 1
}

/// Ordered control points plus the polyline sampled from them.
#[derive(Debug, Clone)]
pub struct CurveModel {
    /// Control points in De Casteljau order.
    points: Vec<Vec2>,
    /// Parametric step between consecutive samples.
    precision: f32,
    /// Sampled polyline, valid as of the last recompute.
    samples: Vec<Vec2>,
    /// Set by every mutation, cleared by recompute.
    stale: bool,
    /// Bumped whenever indices may have changed meaning (append/remove).
    generation: u64,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveModel {
    /// Create an empty curve at the default precision.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            precision: DEFAULT_PRECISION,
            samples: vec![Vec2::ZERO; sample_count_for(DEFAULT_PRECISION)],
            stale: false,
            generation: 0,
        }
    }

    /// Create a curve from an initial point list and precision.
    ///
    /// The returned model has already been recomputed once.
    pub fn with_points(points: Vec<Vec2>, precision: f32) -> CurveResult<Self> {
        let mut curve = Self::new();
        curve.set_precision(precision)?;
        curve.points = points;
        curve.recompute();
        Ok(curve)
    }

    /// Append a control point at the end of the sequence.
    pub fn push_point(&mut self, point: Vec2) {
        self.points.push(point);
        self.generation += 1;
        self.stale = true;
    }

    /// Remove the control point at `index`, shifting later points down.
    pub fn remove_point(&mut self, index: usize) -> CurveResult<Vec2> {
        self.check_index(index)?;
        let removed = self.points.remove(index);
        self.generation += 1;
        self.stale = true;
        Ok(removed)
    }

    /// Overwrite the control point at `index`.
    pub fn set_point(&mut self, index: usize, point: Vec2) -> CurveResult<()> {
        self.check_index(index)?;
        self.points[index] = point;
        self.stale = true;
        Ok(())
    }

    /// Set the sampling step and resize the sample buffer to match.
    ///
    /// Sample values are not recomputed here.
    pub fn set_precision(&mut self, precision: f32) -> CurveResult<()> {
        if !precision.is_finite() || precision <= 0.0 || precision > 1.0 {
            return Err(CurveError::InvalidPrecision(precision));
        }
        if (1.0 / precision).floor() >= MAX_SAMPLES as f32 {
            return Err(CurveError::InvalidPrecision(precision));
        }

        self.precision = precision;
        self.samples.clear();
        self.samples.resize(sample_count_for(precision), Vec2::ZERO);
        self.stale = true;
        Ok(())
    }

    /// Re-evaluate every sample from the current points and precision.
    pub fn recompute(&mut self) {
        let precision = self.precision;
        let points = &self.points;
        for (k, sample) in self.samples.iter_mut().enumerate() {
            let t = (k as f32 * precision).min(1.0);
            *sample = de_casteljau(points, t);
        }
        self.stale = false;
        log::debug!(
            "Recomputed {} samples from {} control points",
            self.samples.len(),
            self.points.len()
        );
    }

    /// Recompute only if a mutation happened since the last recompute.
    /// Returns true if samples were recomputed.
    pub fn refresh(&mut self) -> bool {
        if self.stale {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Evaluate the curve at an arbitrary parameter.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        de_casteljau(&self.points, t)
    }

    /// Control points in order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Get a control point by index.
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Sampled polyline as of the last recompute.
    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// Current sampling step.
    pub fn precision(&self) -> f32 {
        self.precision
    }

    /// Number of samples the current precision produces.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Whether the samples are out of date with respect to points/precision.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// A curve needs at least two points; otherwise every sample is the origin.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Index-space generation, bumped on append and remove.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn check_index(&self, index: usize) -> CurveResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(CurveError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}
