//! Store error types
//!
//! `ListNotFound`/`ItemNotFound` and the duplicate variants are expected
//! outcomes the HTTP layer maps to 404/409. `Storage` wraps SQLite transport
//! failures and must surface as a server error, never as not-found.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No list with the requested name (or id) exists
    #[error("List not found")]
    ListNotFound,

    /// No item with the requested name exists in the list
    #[error("Item not found")]
    ItemNotFound,

    /// A list with this name already exists
    #[error("List already exists")]
    DuplicateList,

    /// An item with this name already exists in the list
    #[error("Item already exists in this list")]
    DuplicateItem,

    /// Underlying SQLite failure
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The connection mutex was poisoned by a panicking thread
    #[error("storage connection is no longer usable")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_api_detail_strings() {
        assert_eq!(StoreError::ListNotFound.to_string(), "List not found");
        assert_eq!(StoreError::ItemNotFound.to_string(), "Item not found");
        assert_eq!(StoreError::DuplicateList.to_string(), "List already exists");
        assert_eq!(
            StoreError::DuplicateItem.to_string(),
            "Item already exists in this list"
        );
    }
}
