//! Application shell: window, event loop and editor wiring.

use crate::event_handler::{button_event, key_event, scroll_event};
use crate::renderer::{LogRenderer, Renderer};
use bezier_core::input::PointerEvent;
use bezier_core::{CurveError, Editor, EditorConfig};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid editor config: {0}")]
    Editor(#[from] CurveError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Bezier Curves".to_string(),
            width: 800,
            height: 600,
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    editor: Editor,
    renderer: Box<dyn Renderer>,
}

impl App {
    /// Create an application with the log-only renderer.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        Self::with_renderer(config, Box::new(LogRenderer::default()))
    }

    /// Create an application drawing through the given renderer.
    pub fn with_renderer(config: AppConfig, renderer: Box<dyn Renderer>) -> Result<Self, AppError> {
        let editor = Editor::new(&config.editor, config.width as f64, config.height as f64)?;
        Ok(Self {
            config,
            window: None,
            editor,
            renderer,
        })
    }

    /// Run the application until the window is closed.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new(config)?;
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// The editor driven by this application.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        if self.editor.handle_pointer_event(event, Instant::now()) {
            self.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        log::info!("Surface size: {}x{}", size.width, size.height);
        self.editor.resize(size.width as f64, size.height as f64);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.editor.resize(size.width as f64, size.height as f64);
                self.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer(PointerEvent::Move {
                    position: Point::new(position.x, position.y),
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let position = self.editor.input.pointer_position;
                if let Some(event) = button_event(button, state, position) {
                    self.pointer(event);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let position = self.editor.input.pointer_position;
                self.pointer(scroll_event(delta, position));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let idle = !self.editor.controller.is_dragging();
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                    && idle
                {
                    event_loop.exit();
                    return;
                }
                if let Some(key) = key_event(&event.logical_key, event.state) {
                    if self.editor.handle_key_event(key) {
                        self.request_redraw();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let frame = self.editor.frame();
                self.renderer.render(&frame);
            }

            _ => {}
        }
    }
}
