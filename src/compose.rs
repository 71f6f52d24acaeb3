//! Caller-side selection composition.
//!
//! The engine only reports what the marquee currently overlaps. Whether a new
//! gesture adds to or replaces the existing selection is decided here, from
//! the modifier keys of the event that started the gesture.

use crate::input::PointerEvent;

/// Union-vs-replace bookkeeping for one selection owner.
///
/// On gesture start the current selection becomes the baseline if Shift is
/// held, otherwise the baseline is cleared. Every engine result is then
/// merged as `baseline ∪ result`, baseline first, without duplicates.
#[derive(Debug, Clone)]
pub struct SelectionComposer<T> {
    baseline: Vec<T>,
    current: Vec<T>,
}

impl<T> Default for SelectionComposer<T> {
    fn default() -> Self {
        Self {
            baseline: Vec::new(),
            current: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> SelectionComposer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection
    pub fn with_selection(selection: Vec<T>) -> Self {
        Self {
            baseline: Vec::new(),
            current: selection,
        }
    }

    /// Call from the selection-started callback.
    pub fn begin(&mut self, event: &PointerEvent) {
        self.baseline = if event.modifiers.shift {
            self.current.clone()
        } else {
            Vec::new()
        };
    }

    /// Call from the selection-changed callback. Returns the merged selection.
    pub fn update(&mut self, items: &[T]) -> &[T] {
        let mut merged = self.baseline.clone();
        for item in items {
            if !merged.contains(item) {
                merged.push(item.clone());
            }
        }
        self.current = merged;
        &self.current
    }

    pub fn selection(&self) -> &[T] {
        &self.current
    }

    /// Replace the selection outside a gesture (e.g. a checkbox toggle)
    pub fn set_selection(&mut self, selection: Vec<T>) {
        self.current = selection;
    }

    pub fn clear(&mut self) {
        self.baseline.clear();
        self.current.clear();
    }
}
