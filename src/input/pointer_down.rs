//! Pointer down: arm a drag and take the geometry snapshot.
//!
//! ## Performance Notes
//!
//! This is the only place element geometry is queried during a gesture: one
//! pass over the registry, O(n). Every later frame works from the snapshot.

use super::coords::{CoordinateContext, CoordinateConverter};
use super::event::PointerEvent;
use super::state::DragState;
use crate::area::SelectionArea;
use crate::cache::GeometryCache;
use crate::error::ArmError;
use crate::profile_scope;
use crate::schedule::FrameScheduler;
use crate::surface::Surface;

impl<T: Clone, S: Surface, F: FrameScheduler> SelectionArea<T, S, F> {
    /// Handle a pointer-down inside the container.
    ///
    /// Returns true if a drag was armed. A rejected pointer-down changes
    /// nothing and is not an error for the caller.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("pointer_down");

        match self.arm(event) {
            Ok(()) => true,
            Err(reason) => {
                tracing::trace!(%reason, "Pointer down did not arm a drag");
                false
            }
        }
    }

    fn arm(&mut self, event: &PointerEvent) -> Result<(), ArmError> {
        if self.config.disabled {
            return Err(ArmError::Disabled);
        }
        if !event.button.is_primary() {
            return Err(ArmError::NonPrimaryButton(event.button.index()));
        }
        if self.input_state.is_active() {
            return Err(ArmError::AlreadyActive);
        }

        let container = self.surface.container_rect().ok_or(ArmError::MissingContainer)?;
        let ctx = CoordinateContext::new(container, self.surface.scroll_offset());

        let surface = &self.surface;
        let cache = self.registry.with(|registry| {
            GeometryCache::capture(registry, |element| surface.element_rect(element), &ctx)
        });

        let origin = CoordinateConverter::viewport_to_content(event.position, &ctx);
        tracing::debug!(
            items = cache.len(),
            indexed = cache.is_indexed(),
            origin_x = origin.x,
            origin_y = origin.y,
            "Drag armed"
        );

        self.cache = Some(cache);
        self.input_state.arm(DragState::new(origin, *event));

        self.surface.capture_pointer();
        self.captured = true;
        Ok(())
    }
}
