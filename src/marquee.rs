//! Visual feedback: the on-screen marquee.
//!
//! The marquee carries no state of its own. Its box is derived from the drag
//! state every time a recompute runs and it is hidden whenever the engine is
//! not selecting.

use crate::constants::{MARQUEE_BORDER, MARQUEE_BORDER_WIDTH, MARQUEE_FILL, MARQUEE_Z_INDEX};
use crate::geometry::Rect;
use crate::input::InputState;
use serde::{Deserialize, Serialize};

/// RGBA colour with 0-255 channels and a 0.0-1.0 alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    const fn from_tuple(c: (u8, u8, u8, f32)) -> Self {
        Self::new(c.0, c.1, c.2, c.3)
    }
}

/// How hosts should paint the marquee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeStyle {
    pub fill: Rgba,
    pub border: Rgba,
    pub border_width: f32,
    pub z_index: i32,
}

impl Default for MarqueeStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::from_tuple(MARQUEE_FILL),
            border: Rgba::from_tuple(MARQUEE_BORDER),
            border_width: MARQUEE_BORDER_WIDTH,
            z_index: MARQUEE_Z_INDEX,
        }
    }
}

/// Position and size of the marquee inside the container's content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for MarqueeGeometry {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Marquee box for the current input state; `None` means hidden.
pub fn marquee_geometry(state: &InputState) -> Option<MarqueeGeometry> {
    state.marquee().map(MarqueeGeometry::from)
}
