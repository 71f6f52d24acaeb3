//! Pointer up and cancel: tear the gesture down.
//!
//! Both paths release the pointer capture, cancel any pending frame, hide the
//! marquee and drop the snapshot. Only pointer-up replays a click.

use super::event::PointerEvent;
use super::state::InputState;
use crate::area::SelectionArea;
use crate::replay::replay_click;
use crate::schedule::FrameScheduler;
use crate::surface::Surface;

impl<T, S: Surface, F: FrameScheduler> SelectionArea<T, S, F> {
    /// Handle the captured pointer release.
    ///
    /// Returns true if a gesture was active. If it never became a selection
    /// and passthrough clicks are enabled, a click is replayed at the release
    /// point.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        let Some(previous) = self.teardown() else {
            return false;
        };

        if previous.is_armed() && self.config.fire_passthrough_click {
            replay_click(&mut self.surface, event);
        }

        tracing::debug!(selecting = previous.is_selecting(), "Drag ended");
        self.callbacks.ended();
        true
    }

    /// Abort the active gesture without replaying a click.
    ///
    /// Returns false if nothing was in progress.
    pub fn cancel(&mut self) -> bool {
        let Some(previous) = self.teardown() else {
            return false;
        };

        tracing::debug!(selecting = previous.is_selecting(), "Drag cancelled");
        self.callbacks.ended();
        true
    }

    /// Returns the state that was active, or `None` if there was no gesture.
    fn teardown(&mut self) -> Option<InputState> {
        if self.input_state.is_idle() {
            return None;
        }

        self.release_resources();
        let previous = self.input_state.reset();
        self.surface.render_marquee(None, &self.config.marquee);
        self.cache = None;
        Some(previous)
    }
}
