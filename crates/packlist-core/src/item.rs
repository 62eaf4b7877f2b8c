//! Packing-list item types.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::ItemError;

/// Unique identifier for an item within a packing list.
///
/// Ids come from a monotonically increasing counter owned by the list,
/// so uniqueness is deterministic and testable without mocking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create a new ItemId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Validated input for adding an item.
///
/// This is the single validation boundary: the description is trimmed
/// here and blank descriptions and zero quantities are rejected, so the
/// store can treat every add as a total function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    description: CompactString,
    quantity: u32,
}

impl ItemDraft {
    /// Build a draft from raw input, trimming the description.
    pub fn new(description: &str, quantity: u32) -> Result<Self, ItemError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ItemError::BlankDescription);
        }
        if quantity == 0 {
            return Err(ItemError::ZeroQuantity);
        }

        Ok(Self {
            description: description.into(),
            quantity,
        })
    }

    /// The trimmed description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The quantity (always >= 1).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn into_parts(self) -> (CompactString, u32) {
        (self.description, self.quantity)
    }
}

/// A single entry in the packing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the list.
    pub id: ItemId,

    /// What to pack. Non-empty after trimming.
    pub description: CompactString,

    /// How many to pack. Always >= 1.
    pub quantity: u32,

    /// Whether the item has been packed for the trip.
    pub packed: bool,

    /// When the item was added. Display metadata only; never affects
    /// ordering.
    pub added_at: DateTime<Utc>,
}

impl Item {
    /// Create a new unpacked item from a validated draft.
    pub(crate) fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        let (description, quantity) = draft.into_parts();
        Self {
            id,
            description,
            quantity,
            packed: false,
            added_at: Utc::now(),
        }
    }

    /// A copy of this item with the packed flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}
