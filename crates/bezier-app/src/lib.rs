//! Bezier Editor Application
//!
//! Windowing and input plumbing around the editor core.

mod app;
mod event_handler;
mod renderer;
mod shortcuts;

pub use app::{App, AppConfig, AppError};
pub use event_handler::{button_event, key_event, key_name, scroll_event};
pub use renderer::{LogRenderer, Renderer, polyline_length, vertices};
pub use shortcuts::{Shortcut, ShortcutRegistry};
