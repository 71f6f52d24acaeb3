//! Registration registry: the live set of selectable items.
//!
//! Children register an element handle plus an opaque item under a stable id
//! and may do so as often as they like (every render is fine). The registry
//! is mutated freely while a drag is in flight; the drag only ever reads the
//! geometry snapshot taken at pointer-down, never the registry itself.
//!
//! ## Ordering
//!
//! Iteration follows first-insertion order. Upserting an id that is already
//! present keeps its position; unregistering and registering again moves it
//! to the end. Selection results inherit this order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier of one registered selectable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectableId(String);

impl SelectableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, process-unique id
    pub fn generate() -> Self {
        Self(format!("selectable-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SelectableId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone)]
struct RegistryEntry<T, E> {
    /// Insertion sequence, used to recover first-insertion order
    seq: u64,
    element: E,
    item: T,
}

/// Mapping of id -> (element handle, item).
#[derive(Debug)]
pub struct Registry<T, E> {
    entries: HashMap<SelectableId, RegistryEntry<T, E>>,
    next_seq: u64,
}

impl<T, E> Default for Registry<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Registry<T, E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Insert or replace the entry for `id`. Idempotent.
    pub fn register(&mut self, id: SelectableId, element: E, item: T) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.element = element;
            entry.item = item;
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(id, RegistryEntry { seq, element, item });
    }

    /// Remove the entry for `id`. Returns false if it was not registered.
    pub fn unregister(&mut self, id: &SelectableId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn contains(&self, id: &SelectableId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as `(element, item)` in first-insertion order.
    pub fn ordered(&self) -> Vec<(&E, &T)> {
        let mut entries: Vec<&RegistryEntry<T, E>> = self.entries.values().collect();
        entries.sort_unstable_by_key(|e| e.seq);
        entries.into_iter().map(|e| (&e.element, &e.item)).collect()
    }
}

/// Shared handle to one engine's registry.
///
/// Cloned and handed to child widgets explicitly; single-threaded by
/// construction, like the rest of the engine.
pub struct RegistryHandle<T, E> {
    inner: Rc<RefCell<Registry<T, E>>>,
}

impl<T, E> Clone for RegistryHandle<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, E> Default for RegistryHandle<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> RegistryHandle<T, E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry::new())),
        }
    }

    pub fn register(&self, id: SelectableId, element: E, item: T) {
        self.inner.borrow_mut().register(id, element, item);
    }

    pub fn unregister(&self, id: &SelectableId) -> bool {
        self.inner.borrow_mut().unregister(id)
    }

    pub fn contains(&self, id: &SelectableId) -> bool {
        self.inner.borrow().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Run `f` with shared access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&Registry<T, E>) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// True if both handles point at the same registry
    pub fn same_registry(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Child-side registration guard.
///
/// Registers on [`Selectable::mount`], re-registers when the element or the
/// item identity changes, and unregisters when dropped.
pub struct Selectable<T, E>
where
    T: Clone + PartialEq,
    E: Clone,
{
    id: SelectableId,
    registry: RegistryHandle<T, E>,
    element: E,
    item: T,
}

impl<T, E> Selectable<T, E>
where
    T: Clone + PartialEq,
    E: Clone,
{
    /// Register a new selectable under a generated id
    pub fn mount(registry: &RegistryHandle<T, E>, element: E, item: T) -> Self {
        Self::mount_with_id(registry, SelectableId::generate(), element, item)
    }

    pub fn mount_with_id(registry: &RegistryHandle<T, E>, id: SelectableId, element: E, item: T) -> Self {
        registry.register(id.clone(), element.clone(), item.clone());
        Self {
            id,
            registry: registry.clone(),
            element,
            item,
        }
    }

    pub fn id(&self) -> &SelectableId {
        &self.id
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    /// Update the item; re-registers only when it actually changed.
    /// Returns whether a re-registration happened.
    pub fn set_item(&mut self, item: T) -> bool {
        if self.item == item {
            return false;
        }
        self.item = item;
        self.registry
            .register(self.id.clone(), self.element.clone(), self.item.clone());
        true
    }

    /// The element handle was replaced (e.g. the widget re-rendered into a new node)
    pub fn set_element(&mut self, element: E) {
        self.element = element;
        self.registry
            .register(self.id.clone(), self.element.clone(), self.item.clone());
    }
}

impl<T, E> Drop for Selectable<T, E>
where
    T: Clone + PartialEq,
    E: Clone,
{
    fn drop(&mut self) {
        self.registry.unregister(&self.id);
    }
}
