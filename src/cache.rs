//! Geometry cache: a frozen content-space snapshot of every registered item.
//!
//! Built once per drag, at pointer-down, in a single pass over the registry.
//! Nothing queries element geometry again until the next drag, so a frame
//! during the drag costs comparisons only, never geometry queries.
//!
//! Large snapshots additionally bulk-load an R-tree so a frame visits only the
//! entries whose envelope meets the selection. Candidates always come back in
//! snapshot (registry) order regardless of which path produced them.

use crate::constants::SPATIAL_INDEX_MIN_ITEMS;
use crate::geometry::Rect;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::registry::Registry;
use rstar::{RTree, RTreeObject, AABB};

/// Snapshot of one item's box in content space
#[derive(Debug, Clone, PartialEq)]
pub struct CachedRect<T> {
    pub rect: Rect,
    pub item: T,
}

/// Envelope stored in the R-tree; points back into the snapshot by ordinal.
#[derive(Debug, Clone, Copy)]
struct IndexedBox {
    ordinal: usize,
    rect: Rect,
}

impl RTreeObject for IndexedBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.left, self.rect.top],
            [self.rect.right, self.rect.bottom],
        )
    }
}

impl PartialEq for IndexedBox {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

/// Immutable per-drag snapshot.
#[derive(Debug)]
pub struct GeometryCache<T> {
    entries: Vec<CachedRect<T>>,
    index: Option<RTree<IndexedBox>>,
    /// Registered items whose element could not be measured
    skipped: usize,
}

impl<T> Default for GeometryCache<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: None,
            skipped: 0,
        }
    }
}

impl<T: Clone> GeometryCache<T> {
    /// Snapshot the registry.
    ///
    /// `measure` returns an element's viewport-relative box, or `None` for an
    /// element that is no longer laid out; such entries are left out of this
    /// drag.
    pub fn capture<E>(
        registry: &Registry<T, E>,
        measure: impl Fn(&E) -> Option<Rect>,
        ctx: &CoordinateContext,
    ) -> Self {
        let ordered = registry.ordered();
        let mut entries = Vec::with_capacity(ordered.len());
        let mut skipped = 0;

        for (element, item) in ordered {
            match measure(element) {
                Some(rect) if is_finite(&rect) => entries.push(CachedRect {
                    rect: CoordinateConverter::rect_to_content(rect, ctx),
                    item: item.clone(),
                }),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "Selectables without geometry left out of snapshot");
        }

        let mut cache = Self::from_entries(entries);
        cache.skipped = skipped;
        cache
    }
}

impl<T> GeometryCache<T> {
    /// Build a cache from already content-space entries.
    pub fn from_entries(entries: Vec<CachedRect<T>>) -> Self {
        let index = (entries.len() >= SPATIAL_INDEX_MIN_ITEMS).then(|| {
            RTree::bulk_load(
                entries
                    .iter()
                    .enumerate()
                    .map(|(ordinal, e)| IndexedBox { ordinal, rect: e.rect })
                    .collect(),
            )
        });

        Self {
            entries,
            index,
            skipped: 0,
        }
    }

    pub fn entries(&self) -> &[CachedRect<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Entries that may overlap `selection`, in snapshot order.
    ///
    /// This is a superset filter; the exact rule is applied by the resolver.
    pub fn candidates(&self, selection: &Rect) -> Vec<&CachedRect<T>> {
        let Some(ref tree) = self.index else {
            return self.entries.iter().collect();
        };

        let envelope = AABB::from_corners(
            [selection.left, selection.top],
            [selection.right, selection.bottom],
        );
        let mut ordinals: Vec<usize> = tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|b| b.ordinal)
            .collect();
        ordinals.sort_unstable();

        ordinals.into_iter().map(|i| &self.entries[i]).collect()
    }
}

fn is_finite(rect: &Rect) -> bool {
    rect.left.is_finite() && rect.top.is_finite() && rect.right.is_finite() && rect.bottom.is_finite()
}
