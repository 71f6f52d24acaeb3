//! Host services the engine consumes.
//!
//! The engine is UI-agnostic. Whatever toolkit hosts it supplies container and
//! element geometry, global pointer capture, hit-testing for click replay and
//! a place to draw the marquee.

use crate::geometry::{Point, Rect};
use crate::marquee::MarqueeStyle;
use crate::replay::SyntheticClick;

pub trait Surface {
    /// Element handle stored in the registry
    type Element: Clone;

    /// Viewport-relative box of the selection container, `None` if unmounted
    fn container_rect(&self) -> Option<Rect>;

    /// Current scroll offsets of the container
    fn scroll_offset(&self) -> Point;

    /// Viewport-relative box of an element, `None` if it is not laid out
    fn element_rect(&self, element: &Self::Element) -> Option<Rect>;

    /// Start routing pointer move/up and scroll events to the engine from
    /// anywhere, not just inside the container.
    fn capture_pointer(&mut self);

    /// Undo [`Surface::capture_pointer`].
    fn release_pointer(&mut self);

    /// Topmost element under a viewport position
    fn element_at(&self, position: Point) -> Option<Self::Element>;

    /// Editable text elements never receive replayed clicks
    fn is_text_input(&self, _element: &Self::Element) -> bool {
        false
    }

    /// Deliver a synthesized click to `target`
    fn dispatch_click(&mut self, target: &Self::Element, click: &SyntheticClick);

    /// Show the marquee at a content-space rectangle, or hide it with `None`.
    /// `style` is the engine's configured [`MarqueeStyle`].
    fn render_marquee(&mut self, rect: Option<Rect>, style: &MarqueeStyle);
}
