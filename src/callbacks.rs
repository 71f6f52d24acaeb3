//! Notification sinks exposed to callers.

use crate::input::PointerEvent;

/// Callbacks fired by the engine. All are optional.
///
/// - `on_selection_started` fires once per gesture, when the threshold is
///   crossed, with the event that triggered the crossing. Callers inspect its
///   modifiers to decide between union and replace.
/// - `on_selection_changed` fires whenever the overlapped items differ from the
///   last published result. Items arrive in registry order.
/// - `on_selection_ended` fires once when the gesture ends.
pub struct SelectionCallbacks<T> {
    pub on_selection_started: Option<Box<dyn FnMut(&PointerEvent)>>,
    pub on_selection_changed: Option<Box<dyn FnMut(&[T])>>,
    pub on_selection_ended: Option<Box<dyn FnMut()>>,
}

impl<T> Default for SelectionCallbacks<T> {
    fn default() -> Self {
        Self {
            on_selection_started: None,
            on_selection_changed: None,
            on_selection_ended: None,
        }
    }
}

impl<T> SelectionCallbacks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_started(mut self, f: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_selection_started = Some(Box::new(f));
        self
    }

    pub fn on_changed(mut self, f: impl FnMut(&[T]) + 'static) -> Self {
        self.on_selection_changed = Some(Box::new(f));
        self
    }

    pub fn on_ended(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_selection_ended = Some(Box::new(f));
        self
    }

    pub(crate) fn started(&mut self, event: &PointerEvent) {
        if let Some(f) = self.on_selection_started.as_mut() {
            f(event);
        }
    }

    pub(crate) fn changed(&mut self, items: &[T]) {
        if let Some(f) = self.on_selection_changed.as_mut() {
            f(items);
        }
    }

    pub(crate) fn ended(&mut self) {
        if let Some(f) = self.on_selection_ended.as_mut() {
            f();
        }
    }
}
