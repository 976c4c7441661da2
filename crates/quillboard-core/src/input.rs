//! Input event types delivered by the host input layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Modifiers with only ctrl held.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// A keyboard key, reduced to what the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Enter,
    Char(char),
}

/// An input event in surface coordinates.
///
/// The host is expected to deliver pointer-leave as a `PointerUp`; there
/// is no separate cancel path, so leaving the surface commits the active
/// gesture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    DoubleClick(Point),
    KeyDown { key: Key, modifiers: Modifiers },
}
