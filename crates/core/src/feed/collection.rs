//! In-memory reconciliation of a trip's saved items against the change feed.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::events::ChangeEvent;
use crate::items::{ItemCategory, ItemDraft, ItemFilter, SavedItem};

/// Ordered, identity-keyed collection of a trip's saved items.
///
/// The collection is seeded once from a snapshot and then mutated only by
/// [`apply`](Self::apply) and [`optimistic_insert`](Self::optimistic_insert).
/// Insertion order is preserved: created items surface first, updates keep
/// their slot, deletions drop it. Identity lookup and ordered traversal both
/// go through an explicit ordered map (identity vector + identity-keyed
/// records), so neither costs a scan-and-splice.
#[derive(Debug, Default)]
pub struct ItemCollection {
    order: Vec<String>,
    records: HashMap<String, SavedItem>,
    /// Correlation token -> placeholder identity for in-flight local inserts.
    pending: HashMap<String, String>,
    /// Identities seen in a deleted event. The backend never reuses record
    /// identities, so a stray create/update arriving after the delete it
    /// logically precedes is dropped here instead of resurrecting the record.
    tombstones: HashSet<String>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a snapshot. Called once per session,
    /// before the event stream attaches.
    pub fn seed(&mut self, snapshot: Vec<SavedItem>) {
        self.order.clear();
        self.records.clear();
        self.pending.clear();
        self.tombstones.clear();
        for item in snapshot {
            // A duplicate identity in the snapshot keeps its first slot,
            // last state wins.
            if !self.records.contains_key(&item.id) {
                self.order.push(item.id.clone());
            }
            self.records.insert(item.id.clone(), item);
        }
    }

    /// Apply one change event, in arrival order.
    ///
    /// Unknown identities on update/delete are an expected race under
    /// at-least-once, unordered delivery and are absorbed silently. Applying
    /// the same event twice leaves the collection as if it were applied once.
    pub fn apply(&mut self, event: ChangeEvent) {
        match event {
            ChangeEvent::Created { item } => self.upsert_front(item),
            ChangeEvent::Updated { item } => {
                if self.records.contains_key(&item.id) {
                    self.records.insert(item.id.clone(), item);
                } else {
                    // Update racing a not-yet-seen create: treat as a create.
                    debug!("update for unknown item {}, treating as create", item.id);
                    self.upsert_front(item);
                }
            }
            ChangeEvent::Deleted { id } => {
                self.tombstones.insert(id.clone());
                if self.records.remove(&id).is_some() {
                    self.order.retain(|existing| existing != &id);
                } else {
                    debug!("delete for unknown item {id}");
                }
            }
        }
    }

    fn upsert_front(&mut self, item: SavedItem) {
        if self.tombstones.contains(&item.id) {
            debug!("dropping stray event for deleted item {}", item.id);
            return;
        }
        if let Some(client_ref) = item.client_ref.as_deref() {
            if let Some(placeholder_id) = self.pending.remove(client_ref) {
                // The authoritative record for a local optimistic insert has
                // arrived; retire the placeholder.
                self.records.remove(&placeholder_id);
                self.order.retain(|existing| existing != &placeholder_id);
            }
        }
        if self.records.contains_key(&item.id) {
            // Duplicate delivery: overwrite in place rather than duplicating.
            self.records.insert(item.id.clone(), item);
        } else {
            self.order.insert(0, item.id.clone());
            self.records.insert(item.id.clone(), item);
        }
    }

    /// Append a best-effort local record for an insert still in flight and
    /// remember its correlation token. Returns the placeholder identity.
    pub fn optimistic_insert(&mut self, draft: &ItemDraft) -> String {
        let placeholder = draft.to_local_record();
        let id = placeholder.id.clone();
        self.pending.insert(draft.client_ref.clone(), id.clone());
        if !self.records.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.records.insert(id.clone(), placeholder);
        id
    }

    /// Records matching the filter, in collection order. Pure and
    /// restartable; the collection is not touched.
    pub fn project<'a>(
        &'a self,
        filter: &'a ItemFilter,
    ) -> impl Iterator<Item = &'a SavedItem> + 'a {
        self.items().filter(move |item| filter.matches(item))
    }

    /// All records in collection order.
    pub fn items(&self) -> impl Iterator<Item = &SavedItem> {
        self.order.iter().filter_map(move |id| self.records.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&SavedItem> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Per-category tallies for the sidebar. Uncategorized items count under
    /// [`ItemCategory::Other`], matching how they render.
    pub fn category_counts(&self) -> HashMap<ItemCategory, usize> {
        let mut counts = HashMap::new();
        for item in self.items() {
            *counts
                .entry(item.category.unwrap_or(ItemCategory::Other))
                .or_insert(0) += 1;
        }
        counts
    }
}
