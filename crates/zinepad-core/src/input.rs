//! Pointer, wheel and keyboard events delivered to the editor.

use crate::shapes::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// A pointer press, move or release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position in screen coordinates.
    pub position: Point,
    pub modifiers: Modifiers,
    /// Shape under the pointer as reported by the rendering surface.
    /// `None` means empty canvas.
    pub target: Option<ShapeId>,
}

impl PointerEvent {
    /// Event over empty canvas with no modifiers.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::NONE,
            target: None,
        }
    }

    pub fn on(mut self, target: ShapeId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_shift(self) -> Self {
        self.with_modifiers(Modifiers::SHIFT)
    }
}

/// A scroll-wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Position in screen coordinates.
    pub position: Point,
    /// Positive when scrolling down (zoom out).
    pub delta_y: f64,
}

impl WheelEvent {
    pub fn new(position: Point, delta_y: f64) -> Self {
        Self { position, delta_y }
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Other(String),
}

impl Key {
    /// Map a DOM/winit-style key name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Delete" => Key::Delete,
            "Backspace" => Key::Backspace,
            "Escape" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_pointer_builders() {
        let id = Uuid::new_v4();
        let event = PointerEvent::at(Point::new(1.0, 2.0)).on(id).with_shift();
        assert_eq!(event.target, Some(id));
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.ctrl);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("Delete"), Key::Delete);
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_name("a"), Key::Other("a".to_string()));
    }
}
