//! Editor context owning the curve and its interaction state.

use crate::config::EditorConfig;
use crate::controller::{EditorEvent, InteractionController, Outcome};
use crate::curve::CurveModel;
use crate::error::CurveResult;
use crate::input::{InputState, KeyEvent, PointerEvent};
use crate::viewport::Viewport;
use glam::Vec2;
use kurbo::Affine;
use std::time::{Duration, Instant};

/// Read-only view of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Sampled polyline in window coordinates.
    pub samples: &'a [Vec2],
    /// Control points in window coordinates.
    pub control_points: &'a [Vec2],
    /// Index of the point being dragged.
    pub captured: Option<usize>,
    /// Window pixels to normalized device coordinates.
    pub ndc_transform: Affine,
}

/// One curve being edited in one window.
#[derive(Debug, Clone)]
pub struct Editor {
    /// The curve.
    pub curve: CurveModel,
    /// Picking and drag state.
    pub controller: InteractionController,
    /// Raw input tracking and gesture recognition.
    pub input: InputState,
    /// Window geometry.
    pub viewport: Viewport,
}

impl Editor {
    /// Create an editor from a configuration and window size.
    ///
    /// The curve is recomputed once, so samples are valid on return.
    pub fn new(config: &EditorConfig, width: f64, height: f64) -> CurveResult<Self> {
        let curve = CurveModel::with_points(config.initial_points.clone(), config.default_precision)?;
        let viewport = Viewport::new(width, height);
        let controller = InteractionController::new(
            config.capture_radius,
            viewport.bounds(),
            config.precision_sensitivity,
        );
        let input = InputState::new(
            Duration::from_millis(config.double_click_ms),
            config.double_click_distance,
        );
        log::info!(
            "Editor ready: {} control points, {} samples",
            curve.len(),
            curve.sample_count()
        );
        Ok(Self {
            curve,
            controller,
            input,
            viewport,
        })
    }

    /// Apply a single editor event.
    pub fn apply(&mut self, event: EditorEvent) -> Outcome {
        self.controller.handle(event, &mut self.curve)
    }

    /// Feed a raw pointer event. Returns true if the curve changed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, now: Instant) -> bool {
        let events = self.input.handle_pointer_event(event, now);
        self.apply_all(events)
    }

    /// Feed a raw key event. Returns true if the curve changed.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        let events = self.input.handle_key_event(event);
        self.apply_all(events)
    }

    fn apply_all(&mut self, events: Vec<EditorEvent>) -> bool {
        let mut changed = false;
        for event in events {
            changed |= self.apply(event).changed();
        }
        changed
    }

    /// Resize the window; drag bounds follow the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.viewport.resize(width, height) {
            self.controller.bounds = self.viewport.bounds();
            log::debug!("Viewport resized to {}x{}", width, height);
        }
    }

    /// Sampled polyline as of the last recompute.
    pub fn current_samples(&self) -> &[Vec2] {
        self.curve.samples()
    }

    /// Control points in order.
    pub fn current_control_points(&self) -> &[Vec2] {
        self.curve.points()
    }

    /// Index of the point being dragged, if any.
    pub fn captured_index(&self) -> Option<usize> {
        self.controller.captured_index()
    }

    /// Bring samples up to date and return a snapshot for rendering.
    pub fn frame(&mut self) -> Frame<'_> {
        self.curve.refresh();
        Frame {
            samples: self.curve.samples(),
            control_points: self.curve.points(),
            captured: self.controller.captured_index(),
            ndc_transform: self.viewport.ndc_transform(),
        }
    }
}
