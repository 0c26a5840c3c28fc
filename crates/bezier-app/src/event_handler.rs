//! Translation of winit events into core input events.

use bezier_core::input::{KeyEvent, MouseButton, PointerEvent};
use kurbo::{Point, Vec2};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};

/// Pixels of touchpad scroll that count as one wheel line.
pub const PIXELS_PER_LINE: f64 = 40.0;

/// Map a winit mouse button to a core button. Extra buttons are dropped.
pub fn translate_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Build a pointer down/up event at `position`.
pub fn button_event(
    button: WinitMouseButton,
    state: ElementState,
    position: Point,
) -> Option<PointerEvent> {
    let button = translate_mouse_button(button)?;
    Some(match state {
        ElementState::Pressed => PointerEvent::Down { position, button },
        ElementState::Released => PointerEvent::Up { position, button },
    })
}

/// Build a scroll event, normalizing pixel deltas to wheel lines.
pub fn scroll_event(delta: MouseScrollDelta, position: Point) -> PointerEvent {
    let delta = match delta {
        MouseScrollDelta::LineDelta(x, y) => Vec2::new(x as f64, y as f64),
        MouseScrollDelta::PixelDelta(p) => Vec2::new(p.x / PIXELS_PER_LINE, p.y / PIXELS_PER_LINE),
    };
    PointerEvent::Scroll { position, delta }
}

/// Name of a key as understood by the core input state.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(NamedKey::Delete) => Some("Delete".to_string()),
        Key::Named(NamedKey::Backspace) => Some("Backspace".to_string()),
        Key::Named(NamedKey::Escape) => Some("Escape".to_string()),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

/// Build a key event from a winit logical key.
pub fn key_event(key: &Key, state: ElementState) -> Option<KeyEvent> {
    let name = key_name(key)?;
    Some(match state {
        ElementState::Pressed => KeyEvent::Pressed(name),
        ElementState::Released => KeyEvent::Released(name),
    })
}
