//! Bezier Editor Core Library
//!
//! Platform-agnostic curve evaluation, picking and editing logic for the
//! Bezier curve editor.

pub mod config;
pub mod controller;
pub mod curve;
pub mod editor;
pub mod error;
pub mod input;
pub mod viewport;

pub use config::EditorConfig;
pub use controller::{pick_nearest, Capture, DragState, EditorEvent, InteractionController, Outcome};
pub use curve::{de_casteljau, lerp, CurveModel, DEFAULT_PRECISION, MAX_SAMPLES};
pub use editor::{Editor, Frame};
pub use error::{CurveError, CurveResult};
pub use input::{InputState, KeyEvent, MouseButton, PointerEvent};
pub use viewport::{Bounds, Viewport};
