//! Selection resolver: which snapshot entries does the drag rectangle overlap,
//! and is that any different from what was last published.

use crate::cache::GeometryCache;
use crate::geometry::{Point, Rect};

/// Output of one resolver pass
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    /// Overlapped items in snapshot order
    pub items: Vec<T>,
    /// Entries the exact test ran against
    pub candidates_tested: usize,
}

/// Resolve the rectangle spanned by `start` and `end` against the snapshot.
pub fn resolve<T: Clone>(cache: &GeometryCache<T>, start: Point, end: Point) -> Resolution<T> {
    resolve_rect(cache, &Rect::from_corners(start, end))
}

/// Resolve an already normalized selection rectangle against the snapshot.
pub fn resolve_rect<T: Clone>(cache: &GeometryCache<T>, selection: &Rect) -> Resolution<T> {
    let candidates = cache.candidates(selection);
    let candidates_tested = candidates.len();

    let items = candidates
        .into_iter()
        .filter(|cached| selection.overlaps(&cached.rect))
        .map(|cached| cached.item.clone())
        .collect();

    Resolution {
        items,
        candidates_tested,
    }
}

/// Positional diff: changed if the lengths differ or any slot differs.
///
/// The same items in a different order count as a change.
pub fn has_selection_changed<T: PartialEq>(previous: &[T], next: &[T]) -> bool {
    if previous.len() != next.len() {
        return true;
    }
    previous.iter().zip(next).any(|(a, b)| a != b)
}
