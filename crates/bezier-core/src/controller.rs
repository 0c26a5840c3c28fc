//! Interaction controller: picking, dragging, inserting and deleting control points.

use crate::curve::CurveModel;
use crate::error::CurveError;
use crate::viewport::Bounds;
use glam::Vec2;

/// Editor-level input, already resolved from raw pointer/key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// Pointer moved to a new position.
    PointerMoved(Vec2),
    /// Primary button pressed at the current cursor position.
    PointerPressed,
    /// Primary button released.
    PointerReleased,
    /// Double press: append a point here and start dragging it.
    InsertGesture(Vec2),
    /// Delete the point currently being dragged.
    DeleteCommand,
    /// Scale the precision by `1 + k * delta`.
    PrecisionAdjust(f32),
}

/// Result of handling an [`EditorEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing in the curve changed.
    Unchanged,
    /// The curve was mutated and recomputed.
    CurveChanged,
    /// The model rejected the mutation; the command was discarded.
    Rejected(CurveError),
}

impl Outcome {
    /// Check if the curve needs to be redrawn.
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::CurveChanged)
    }
}

/// A captured control point: its index plus the model generation it was
/// captured in. A generation mismatch means the index may point elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub index: usize,
    pub generation: u64,
}

/// Drag state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Capture),
}

/// Index of the control point nearest to `cursor`, if it lies within `radius`.
///
/// The globally nearest point wins; ties go to the lowest index.
pub fn pick_nearest(points: &[Vec2], cursor: Vec2, radius: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let dist = p.distance(cursor);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.filter(|&(_, d)| d <= radius).map(|(i, _)| i)
}

/// Maps editor events to curve mutations.
///
/// Only one point can be dragged at a time. The controller does not own the
/// curve; every call borrows it from the owning context.
#[derive(Debug, Clone)]
pub struct InteractionController {
    /// Last known pointer position.
    cursor: Vec2,
    /// Current drag state.
    state: DragState,
    /// Maximum pick distance.
    pub capture_radius: f32,
    /// Dragged points are clamped into these bounds.
    pub bounds: Bounds,
    /// Precision adjust sensitivity `k`.
    pub sensitivity: f32,
}

impl InteractionController {
    /// Create a controller.
    pub fn new(capture_radius: f32, bounds: Bounds, sensitivity: f32) -> Self {
        Self {
            cursor: Vec2::ZERO,
            state: DragState::Idle,
            capture_radius,
            bounds,
            sensitivity,
        }
    }

    /// Last known pointer position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Index of the point being dragged, if any.
    pub fn captured_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(capture) => Some(capture.index),
            DragState::Idle => None,
        }
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Handle one event against the curve.
    pub fn handle(&mut self, event: EditorEvent, curve: &mut CurveModel) -> Outcome {
        match event {
            EditorEvent::PointerMoved(position) => self.pointer_moved(position, curve),
            EditorEvent::PointerPressed => self.pointer_pressed(curve),
            EditorEvent::PointerReleased => {
                self.release();
                Outcome::Unchanged
            }
            EditorEvent::InsertGesture(position) => self.insert(position, curve),
            EditorEvent::DeleteCommand => self.delete(curve),
            EditorEvent::PrecisionAdjust(delta) => self.adjust_precision(delta, curve),
        }
    }

    /// Drop any capture without touching the curve.
    pub fn release(&mut self) {
        if let DragState::Dragging(capture) = self.state {
            log::debug!("Released point {}", capture.index);
        }
        self.state = DragState::Idle;
    }

    /// Resolve the current capture, dropping it if the curve's index space
    /// changed underneath it.
    fn live_capture(&mut self, curve: &CurveModel) -> Option<Capture> {
        let DragState::Dragging(capture) = self.state else {
            return None;
        };
        if capture.generation != curve.generation() {
            log::warn!(
                "Dropping stale capture of point {} (generation {} != {})",
                capture.index,
                capture.generation,
                curve.generation()
            );
            self.state = DragState::Idle;
            return None;
        }
        Some(capture)
    }

    fn pointer_moved(&mut self, position: Vec2, curve: &mut CurveModel) -> Outcome {
        self.cursor = position;
        let Some(capture) = self.live_capture(curve) else {
            return Outcome::Unchanged;
        };

        let target = self.bounds.clamp(position);
        match curve.set_point(capture.index, target) {
            Ok(()) => {
                curve.recompute();
                Outcome::CurveChanged
            }
            Err(err) => self.reject(err),
        }
    }

    fn pointer_pressed(&mut self, curve: &CurveModel) -> Outcome {
        if self.is_dragging() {
            return Outcome::Unchanged;
        }
        if let Some(index) = pick_nearest(curve.points(), self.cursor, self.capture_radius) {
            log::debug!("Captured point {} at {:?}", index, self.cursor);
            self.state = DragState::Dragging(Capture {
                index,
                generation: curve.generation(),
            });
        }
        Outcome::Unchanged
    }

    fn insert(&mut self, position: Vec2, curve: &mut CurveModel) -> Outcome {
        self.cursor = position;
        curve.push_point(position);
        let index = curve.len() - 1;
        log::debug!("Inserted point {} at {:?}", index, position);
        self.state = DragState::Dragging(Capture {
            index,
            generation: curve.generation(),
        });
        curve.recompute();
        Outcome::CurveChanged
    }

    fn delete(&mut self, curve: &mut CurveModel) -> Outcome {
        let Some(capture) = self.live_capture(curve) else {
            return Outcome::Unchanged;
        };
        match curve.remove_point(capture.index) {
            Ok(removed) => {
                log::debug!("Deleted point {} at {:?}", capture.index, removed);
                self.state = DragState::Idle;
                curve.recompute();
                Outcome::CurveChanged
            }
            Err(err) => self.reject(err),
        }
    }

    fn adjust_precision(&mut self, delta: f32, curve: &mut CurveModel) -> Outcome {
        let precision = curve.precision() * (1.0 + self.sensitivity * delta);
        match curve.set_precision(precision) {
            Ok(()) => {
                log::debug!("Precision set to {} ({} samples)", precision, curve.sample_count());
                curve.recompute();
                Outcome::CurveChanged
            }
            Err(err) => self.reject(err),
        }
    }

    fn reject(&self, err: CurveError) -> Outcome {
        log::warn!("Discarded edit: {}", err);
        Outcome::Rejected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(points: &[(f32, f32)], radius: f32) -> (InteractionController, CurveModel) {
        let points = points.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        let curve = CurveModel::with_points(points, 0.5).unwrap();
        let bounds = Bounds::new(Vec2::ZERO, Vec2::new(800.0, 600.0));
        (InteractionController::new(radius, bounds, 0.1), curve)
    }

    #[test]
    fn test_pick_nearest_prefers_global_minimum() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(1.0, 0.0)];
        assert_eq!(pick_nearest(&points, Vec2::new(1.2, 0.0), 5.0), Some(2));
    }

    #[test]
    fn test_pick_nearest_tie_goes_to_first() {
        let points = [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
        assert_eq!(pick_nearest(&points, Vec2::ZERO, 5.0), Some(0));
    }

    #[test]
    fn test_pick_nearest_outside_radius() {
        let points = [Vec2::new(10.0, 10.0)];
        assert_eq!(pick_nearest(&points, Vec2::ZERO, 1.0), None);
        assert_eq!(pick_nearest(&[], Vec2::ZERO, 1.0), None);
    }

    #[test]
    fn test_drag_scenario() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);

        ctl.handle(EditorEvent::PointerMoved(Vec2::new(10.0, 10.1)), &mut curve);
        assert_eq!(ctl.handle(EditorEvent::PointerPressed, &mut curve), Outcome::Unchanged);
        assert_eq!(ctl.captured_index(), Some(1));

        let outcome = ctl.handle(EditorEvent::PointerMoved(Vec2::new(5.0, 5.0)), &mut curve);
        assert!(outcome.changed());
        assert_eq!(curve.points()[1], Vec2::new(5.0, 5.0));
        assert_eq!(
            curve.samples(),
            &[Vec2::new(0.0, 0.0), Vec2::new(2.5, 2.5), Vec2::new(5.0, 5.0)]
        );

        ctl.handle(EditorEvent::PointerReleased, &mut curve);
        assert_eq!(ctl.state(), DragState::Idle);
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(50.0, 50.0)), &mut curve);
        assert_eq!(curve.points()[1], Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_press_outside_radius_stays_idle() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(5.0, 5.0)), &mut curve);
        ctl.handle(EditorEvent::PointerPressed, &mut curve);
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn test_second_press_keeps_existing_drag() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);
        ctl.handle(EditorEvent::PointerMoved(Vec2::ZERO), &mut curve);
        ctl.handle(EditorEvent::PointerPressed, &mut curve);
        ctl.cursor = Vec2::new(10.0, 10.0);
        ctl.handle(EditorEvent::PointerPressed, &mut curve);
        assert_eq!(ctl.captured_index(), Some(0));
    }

    #[test]
    fn test_drag_clamped_to_bounds() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(10.0, 10.0)), &mut curve);
        ctl.handle(EditorEvent::PointerPressed, &mut curve);
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(-40.0, 900.0)), &mut curve);
        assert_eq!(curve.points()[1], Vec2::new(0.0, 600.0));
        assert_eq!(ctl.cursor(), Vec2::new(-40.0, 900.0));
    }

    #[test]
    fn test_insert_scenario() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (100.0, 100.0)], 1.0);
        let outcome = ctl.handle(EditorEvent::InsertGesture(Vec2::new(50.0, 50.0)), &mut curve);
        assert!(outcome.changed());
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.points()[2], Vec2::new(50.0, 50.0));
        assert_eq!(ctl.captured_index(), Some(2));
        assert!(!curve.is_stale());

        // The new point follows the cursor.
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(60.0, 40.0)), &mut curve);
        assert_eq!(curve.points()[2], Vec2::new(60.0, 40.0));
    }

    #[test]
    fn test_delete_captured_point() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)], 1.0);
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(10.0, 10.0)), &mut curve);
        ctl.handle(EditorEvent::PointerPressed, &mut curve);

        let outcome = ctl.handle(EditorEvent::DeleteCommand, &mut curve);
        assert!(outcome.changed());
        assert_eq!(curve.points(), &[Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]);
        assert!(!ctl.is_dragging());
        assert_eq!(curve.samples()[1], Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_delete_without_capture_is_ignored() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);
        assert_eq!(ctl.handle(EditorEvent::DeleteCommand, &mut curve), Outcome::Unchanged);
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn test_precision_adjust() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);
        // 0.5 * (1 - 0.1 * 5) = 0.25
        let outcome = ctl.handle(EditorEvent::PrecisionAdjust(-5.0), &mut curve);
        assert!(outcome.changed());
        assert_eq!(curve.sample_count(), 5);
        assert!(!curve.is_stale());
    }

    #[test]
    fn test_precision_adjust_rejected() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0)], 1.0);
        let before = curve.samples().to_vec();

        let outcome = ctl.handle(EditorEvent::PrecisionAdjust(-20.0), &mut curve);
        assert!(matches!(outcome, Outcome::Rejected(CurveError::InvalidPrecision(_))));
        assert!((curve.precision() - 0.5).abs() < f32::EPSILON);
        assert_eq!(curve.samples(), before.as_slice());
    }

    #[test]
    fn test_stale_capture_dropped() {
        let (mut ctl, mut curve) = setup(&[(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)], 1.0);
        ctl.handle(EditorEvent::PointerMoved(Vec2::new(20.0, 20.0)), &mut curve);
        ctl.handle(EditorEvent::PointerPressed, &mut curve);
        assert_eq!(ctl.captured_index(), Some(2));

        // Someone else shrinks the curve behind the controller's back.
        curve.remove_point(0).unwrap();
        curve.recompute();

        let outcome = ctl.handle(EditorEvent::PointerMoved(Vec2::new(1.0, 1.0)), &mut curve);
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(!ctl.is_dragging());
        assert_eq!(curve.points(), &[Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)]);
    }
}
