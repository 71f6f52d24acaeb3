//! Coordinate conversion between viewport space and content space.
//!
//! Viewport space is what pointer events and element geometry queries report.
//! Content space is anchored to the scrollable content of the container:
//! `viewport - container_origin + scroll`. A point in content space does not
//! move when the container scrolls, which is why the geometry snapshot taken at
//! drag start stays valid for the whole drag.

use crate::geometry::{Point, Rect};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateContext {
    /// Viewport-relative origin of the container's box
    pub container_origin: Point,
    /// Current scroll offsets of the container
    pub scroll: Point,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(container_rect: Rect, scroll: Point) -> Self {
        Self {
            container_origin: container_rect.origin(),
            scroll,
        }
    }

    #[inline]
    fn offset(&self) -> (f64, f64) {
        (
            self.scroll.x - self.container_origin.x,
            self.scroll.y - self.container_origin.y,
        )
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a viewport position to content space
    #[inline]
    pub fn viewport_to_content(viewport_pos: Point, ctx: &CoordinateContext) -> Point {
        let (dx, dy) = ctx.offset();
        Point::new(viewport_pos.x + dx, viewport_pos.y + dy)
    }

    /// Convert a viewport-relative box to content space
    #[inline]
    pub fn rect_to_content(viewport_rect: Rect, ctx: &CoordinateContext) -> Rect {
        let (dx, dy) = ctx.offset();
        viewport_rect.translate(dx, dy)
    }
}
