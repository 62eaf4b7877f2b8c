//! Terminal user interface for packlist.
//!
//! This crate provides an interactive TUI for managing a packing list,
//! built with ratatui.
//!
//! # Overview
//!
//! The interface is a single scrollable list with an add form, a stats
//! footer, and an optional details panel:
//!
//! - **List** - Items in insertion or sorted order, packed items last
//! - **Add form** - Description input plus a 1-3 quantity selector
//! - **Stats** - Packing progress summary, recomputed on every change
//!
//! # Usage
//!
//! ```rust,no_run
//! use packlist_core::{PackingList, SortOrder};
//!
//! packlist_tui::run(PackingList::sample(), SortOrder::default()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k` - Move down/up
//! - `Space`/`Enter` - Toggle packed
//! - `d` - Delete item
//! - `a` - Add item
//! - `s` - Cycle sort order
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use theme::Theme;

use packlist_core::{PackingList, SortOrder};

/// Run the TUI application over the given list.
pub fn run(list: PackingList, order: SortOrder) -> AppResult<()> {
    // Create tokio runtime for the event loop
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(list, order).run(terminal));
    ratatui::restore();

    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
