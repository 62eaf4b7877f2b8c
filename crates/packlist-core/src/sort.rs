//! Display-only sort derivation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::item::Item;
use crate::list::PackingList;

/// Sort order for the visible list.
///
/// A view concern only: deriving a sorted view never mutates the
/// underlying storage order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, FromRepr, Serialize, Deserialize,
)]
pub enum SortOrder {
    /// Storage order (newest first).
    #[default]
    #[strum(to_string = "Insertion")]
    Insertion,
    /// Case-insensitive by description, packed items last.
    #[strum(to_string = "A-Z")]
    Alphabetical,
    /// Quantity ascending, packed items last.
    #[strum(to_string = "Quantity")]
    Quantity,
}

impl SortOrder {
    /// Cycle to the next sort order.
    pub fn next(self) -> Self {
        let current = self as usize;
        let next = (current + 1) % Self::iter().count();
        Self::from_repr(next).unwrap_or_default()
    }

    /// Get a short label for display in the header.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Insertion => "INS",
            Self::Alphabetical => "A-Z",
            Self::Quantity => "QTY",
        }
    }

    /// Derive the display ordering for a list.
    ///
    /// For [`SortOrder::Insertion`] this is the storage order unchanged.
    /// Otherwise the primary comparator is applied with a stable sort,
    /// then packed items are moved after unpacked items via a stable
    /// partition, preserving the primary order within each group.
    pub fn view(&self, list: &PackingList) -> Vec<Item> {
        let mut items = list.items().to_vec();

        match self {
            Self::Insertion => return items,
            Self::Alphabetical => {
                items.sort_by(|a, b| {
                    a.description
                        .to_lowercase()
                        .cmp(&b.description.to_lowercase())
                });
            }
            Self::Quantity => {
                items.sort_by_key(|item| item.quantity);
            }
        }

        // Vec::sort_by is stable, so sorting by the packed flag keeps the
        // primary order within the unpacked and packed groups.
        items.sort_by_key(|item| item.packed);
        items
    }
}
