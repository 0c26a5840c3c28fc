//! Input state management for mouse and keyboard events.
//!
//! Raw pointer/key events go in, [`EditorEvent`]s come out. This is where
//! double presses become insert gestures and the Delete key becomes a
//! delete command.

use crate::controller::EditorEvent;
use glam::Vec2;
use kurbo::Point;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Scroll {
        position: Point,
        delta: kurbo::Vec2,
    },
}

/// Keyboard event, identified by key name ("Delete", "Escape", "a", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Default double-press thresholds.
pub const DOUBLE_CLICK_TIME_MS: u64 = 300;
pub const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

fn to_vec2(point: Point) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}

/// Tracks pointer and key state and recognizes editor gestures.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current pointer position in window coordinates.
    pub pointer_position: Point,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Currently pressed keys.
    pressed_keys: HashSet<String>,
    /// Last press time for double-press detection.
    last_click_time: Option<Instant>,
    /// Last press position for double-press detection.
    last_click_position: Option<Point>,
    /// Maximum delay between the two presses of a double press.
    pub double_click_time: Duration,
    /// Maximum distance between the two presses of a double press.
    pub double_click_distance: f64,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DOUBLE_CLICK_TIME_MS),
            DOUBLE_CLICK_DISTANCE,
        )
    }
}

impl InputState {
    /// Create an input state with the given double-press thresholds.
    pub fn new(double_click_time: Duration, double_click_distance: f64) -> Self {
        Self {
            pointer_position: Point::ZERO,
            pressed_buttons: HashSet::new(),
            pressed_keys: HashSet::new(),
            last_click_time: None,
            last_click_position: None,
            double_click_time,
            double_click_distance,
        }
    }

    /// Process a pointer event that happened at `now`.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, now: Instant) -> Vec<EditorEvent> {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                if !self.pressed_buttons.insert(button) || button != MouseButton::Left {
                    return Vec::new();
                }

                if self.is_double_click(position, now) {
                    // Reset so a third press starts a fresh sequence
                    self.last_click_time = None;
                    self.last_click_position = None;
                    vec![EditorEvent::InsertGesture(to_vec2(position))]
                } else {
                    self.last_click_time = Some(now);
                    self.last_click_position = Some(position);
                    vec![
                        EditorEvent::PointerMoved(to_vec2(position)),
                        EditorEvent::PointerPressed,
                    ]
                }
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                let was_pressed = self.pressed_buttons.remove(&button);
                if was_pressed && button == MouseButton::Left {
                    vec![EditorEvent::PointerReleased]
                } else {
                    Vec::new()
                }
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
                vec![EditorEvent::PointerMoved(to_vec2(position))]
            }
            PointerEvent::Scroll { position, delta } => {
                self.pointer_position = position;
                if delta.y == 0.0 {
                    Vec::new()
                } else {
                    vec![EditorEvent::PrecisionAdjust(delta.y as f32)]
                }
            }
        }
    }

    /// Process a key event. Held keys that repeat are reported once.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Vec<EditorEvent> {
        match event {
            KeyEvent::Pressed(key) => {
                if !self.pressed_keys.insert(key.clone()) {
                    return Vec::new();
                }
                match key.as_str() {
                    "Delete" | "Backspace" => vec![EditorEvent::DeleteCommand],
                    "Escape" => vec![EditorEvent::PointerReleased],
                    _ => Vec::new(),
                }
            }
            KeyEvent::Released(key) => {
                self.pressed_keys.remove(&key);
                Vec::new()
            }
        }
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(key)
    }

    fn is_double_click(&self, position: Point, now: Instant) -> bool {
        let (Some(last_time), Some(last_pos)) = (self.last_click_time, self.last_click_position)
        else {
            return false;
        };
        let elapsed = now.saturating_duration_since(last_time);
        elapsed < self.double_click_time && position.distance(last_pos) < self.double_click_distance
    }
}
