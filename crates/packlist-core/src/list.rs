//! The packing list store.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemDraft, ItemId};

/// Ordered collection of packing-list items.
///
/// Storage order is insertion order with the newest item first (adds
/// prepend). Sorting for display is a separate derivation and never
/// touches storage order. Every mutation is a total function over the
/// current collection: removing or toggling a missing id is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackingList {
    items: Vec<Item>,
    next_id: u64,
}

impl PackingList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter list with a couple of common items, all unpacked.
    pub fn sample() -> Self {
        let mut list = Self::new();
        list.add(ItemDraft::new("Shirt", 5).expect("valid draft"));
        list.add(ItemDraft::new("Pants", 2).expect("valid draft"));
        list
    }

    /// Add a new unpacked item at the front of the list.
    ///
    /// Returns the id assigned to the item.
    pub fn add(&mut self, draft: ItemDraft) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        self.items.insert(0, Item::from_draft(id, draft));
        id
    }

    /// Remove the item with the given id.
    ///
    /// Returns false (and leaves the list unchanged) if no item matches.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Flip the packed flag on the item with the given id.
    ///
    /// All other fields are unchanged. Returns false if no item matches.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = item.toggled();
                true
            }
            None => false,
        }
    }

    /// Items in storage (insertion) order, newest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
