//! Packing progress statistics.

use serde::{Deserialize, Serialize};

use crate::list::PackingList;

/// Summary statistics derived from the current list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingStats {
    /// Total number of items.
    pub total: usize,
    /// Number of items marked packed.
    pub packed: usize,
}

impl PackingStats {
    /// Derive stats from a list.
    pub fn of(list: &PackingList) -> Self {
        Self {
            total: list.len(),
            packed: list.items().iter().filter(|item| item.packed).count(),
        }
    }

    /// Percentage of items packed, rounded to the nearest integer.
    ///
    /// An empty list reports 0 rather than dividing by zero.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.packed as f64 / self.total as f64 * 100.0).round() as u8
    }

    /// Human-readable progress line for the stats footer.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "Start adding items to your packing list!".to_string();
        }

        let percentage = self.percentage();
        if percentage == 100 {
            "You got everything!".to_string()
        } else {
            format!(
                "You have {} items in the list. You already packed {} ({}%).",
                self.total, self.packed, percentage
            )
        }
    }
}
