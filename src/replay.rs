//! Click replay.
//!
//! While armed the engine captures the pointer, which swallows the click the
//! host would normally deliver. When a gesture ends without ever crossing the
//! threshold the engine re-synthesizes that click at the release point.

use crate::geometry::Point;
use crate::input::{Modifiers, PointerButton, PointerEvent};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// A synthesized click, mirroring the release event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticClick {
    /// Viewport position of the release
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    pub bubbles: bool,
    pub cancelable: bool,
}

impl SyntheticClick {
    pub fn from_release(release: &PointerEvent) -> Self {
        Self {
            position: release.position,
            button: release.button,
            modifiers: release.modifiers,
            bubbles: true,
            cancelable: true,
        }
    }
}

/// Dispatch a click at the release point to the topmost element there.
///
/// Returns false when nothing is under the pointer or the target is an
/// editable text element.
pub fn replay_click<S: Surface>(surface: &mut S, release: &PointerEvent) -> bool {
    let Some(target) = surface.element_at(release.position) else {
        tracing::trace!(x = release.position.x, y = release.position.y, "No click replay target");
        return false;
    };

    if surface.is_text_input(&target) {
        tracing::trace!("Click replay skipped for text input");
        return false;
    }

    let click = SyntheticClick::from_release(release);
    surface.dispatch_click(&target, &click);
    tracing::trace!(x = click.position.x, y = click.position.y, "Replayed click");
    true
}
