//! Pointer event types delivered by the host.

use crate::constants::PRIMARY_BUTTON;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Which pointer button an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Map a DOM-style button index (0 = primary, 1 = middle, 2 = secondary)
    pub fn from_index(index: u16) -> Self {
        match index {
            PRIMARY_BUTTON => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    pub fn index(&self) -> u16 {
        match self {
            Self::Primary => PRIMARY_BUTTON,
            Self::Middle => 1,
            Self::Secondary => 2,
            Self::Other(i) => *i,
        }
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// Modifier keys held during an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point, button: PointerButton, modifiers: Modifiers) -> Self {
        Self {
            position,
            button,
            modifiers,
        }
    }

    /// Primary-button event at `(x, y)` with no modifiers
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary, Modifiers::NONE)
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
