//! Pointer move and scroll: record, coalesce, and recompute once per frame.
//!
//! ## Performance Notes
//!
//! Move and scroll events can arrive far faster than frames. Handlers only
//! store the latest pointer position and make sure exactly one frame is
//! requested; the resolver runs when that frame fires, using whatever position
//! was recorded last.

use super::coords::{CoordinateContext, CoordinateConverter};
use super::event::PointerEvent;
use crate::area::SelectionArea;
use crate::geometry::Rect;
use crate::perf::measure;
use crate::profile_scope;
use crate::resolver::{has_selection_changed, resolve_rect};
use crate::schedule::{FrameScheduler, FrameToken};
use crate::surface::Surface;

impl<T: Clone + PartialEq, S: Surface, F: FrameScheduler> SelectionArea<T, S, F> {
    /// Handle a captured pointer move. Ignored outside a drag.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let Some(drag) = self.input_state.drag_mut() else {
            return;
        };
        drag.last_pointer = event.position;
        drag.last_event = *event;
        self.queue_update();
    }

    /// Handle a scroll of the container (or any ancestor). Ignored outside a drag.
    pub fn scroll(&mut self) {
        if self.input_state.is_active() {
            self.queue_update();
        }
    }

    /// Called by the host when a requested frame fires.
    pub fn on_frame(&mut self, token: FrameToken) {
        if !self.frame.fire(token) {
            tracing::trace!(token = token.0, "Ignoring stale selection frame");
            return;
        }
        if self.input_state.is_active() {
            self.recompute();
        }
    }

    fn queue_update(&mut self) {
        self.frame.schedule(&mut self.scheduler);
    }

    fn recompute(&mut self) {
        profile_scope!("selection_recompute");

        let Some(container) = self.surface.container_rect() else {
            tracing::debug!("Container geometry unavailable, skipping selection frame");
            return;
        };
        let ctx = CoordinateContext::new(container, self.surface.scroll_offset());
        let threshold = self.config.threshold;

        let Some(drag) = self.input_state.drag() else {
            return;
        };
        let point = CoordinateConverter::viewport_to_content(drag.last_pointer, &ctx);

        if self.input_state.is_armed() {
            if drag.origin.chebyshev_distance(point) <= threshold {
                return;
            }
            let trigger = drag.last_event;
            self.input_state.promote();
            tracing::debug!(x = point.x, y = point.y, "Selection started");
            self.callbacks.started(&trigger);
        }

        let Some(drag) = self.input_state.drag_mut() else {
            return;
        };
        drag.current = point;
        let selection = drag.rect();

        self.surface
            .render_marquee(Some(selection), &self.config.marquee);
        self.publish(&selection);
    }

    fn publish(&mut self, selection: &Rect) {
        let Some(ref cache) = self.cache else {
            return;
        };

        let (resolution, elapsed_ms) = measure(|| resolve_rect(cache, selection));
        self.stats.record(resolution.candidates_tested, elapsed_ms);

        if has_selection_changed(&self.selected, &resolution.items) {
            tracing::trace!(count = resolution.items.len(), "Selection changed");
            self.selected = resolution.items;
            self.callbacks.changed(&self.selected);
        }
    }
}
