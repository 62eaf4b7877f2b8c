//! Error types for item validation.

use thiserror::Error;

/// Errors that can occur when validating item input.
///
/// The store itself has no error paths; these only surface at the
/// input boundary when an [`ItemDraft`](crate::ItemDraft) is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// Description is empty after trimming whitespace.
    #[error("Description cannot be blank")]
    BlankDescription,

    /// Quantity must be at least 1.
    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ItemError::BlankDescription.to_string(),
            "Description cannot be blank"
        );
        assert_eq!(
            ItemError::ZeroQuantity.to_string(),
            "Quantity must be at least 1"
        );
    }
}
