//! Core types and state transitions for packlist.
//!
//! This crate provides the fundamental data structures used throughout
//! the packlist ecosystem: items, the packing list store, and the
//! display-only sort and stats derivations.

mod error;
mod item;
mod list;
mod sort;
mod stats;

pub use error::ItemError;
pub use item::{Item, ItemDraft, ItemId};
pub use list::PackingList;
pub use sort::SortOrder;
pub use stats::PackingStats;
