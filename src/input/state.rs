//! Input state machine for one marquee gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Armed         (primary pointer down, engine enabled, container mounted)
//! Armed -> Selecting    (a recompute sees the pointer beyond the threshold)
//! Armed -> Idle         (pointer up: click replay, or cancel)
//! Selecting -> Idle     (pointer up or cancel)
//! ```
//!
//! Selecting never drops back to Armed, even if the pointer returns inside the
//! threshold.

use super::event::PointerEvent;
use crate::geometry::{Point, Rect};

/// Geometry of the gesture in progress
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Content-space position of the pointer-down
    pub origin: Point,
    /// Content-space end point as of the last recompute
    pub current: Point,
    /// Latest raw pointer position (viewport), coalesced per frame
    pub last_pointer: Point,
    /// Latest pointer event, handed to the selection-started callback
    pub last_event: PointerEvent,
}

impl DragState {
    pub fn new(origin: Point, event: PointerEvent) -> Self {
        Self {
            origin,
            current: origin,
            last_pointer: event.position,
            last_event: event,
        }
    }

    /// Normalized drag rectangle in content space
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.origin, self.current)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture
    #[default]
    Idle,

    /// Pointer is down but has not moved past the threshold yet
    Armed(DragState),

    /// Threshold crossed: the marquee is live
    Selecting(DragState),
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }

    /// Armed or selecting
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn drag(&self) -> Option<&DragState> {
        match self {
            Self::Armed(drag) | Self::Selecting(drag) => Some(drag),
            Self::Idle => None,
        }
    }

    pub fn drag_mut(&mut self) -> Option<&mut DragState> {
        match self {
            Self::Armed(drag) | Self::Selecting(drag) => Some(drag),
            Self::Idle => None,
        }
    }

    /// Idle -> Armed
    pub fn arm(&mut self, drag: DragState) {
        *self = Self::Armed(drag);
    }

    /// Armed -> Selecting. Returns false (and changes nothing) from any other state.
    pub fn promote(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Armed(drag) => {
                *self = Self::Selecting(drag);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Any -> Idle, returning the state that was left
    pub fn reset(&mut self) -> InputState {
        std::mem::take(self)
    }

    /// Marquee rectangle, only while selecting
    pub fn marquee(&self) -> Option<Rect> {
        match self {
            Self::Selecting(drag) => Some(drag.rect()),
            _ => None,
        }
    }
}
