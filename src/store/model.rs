//! Persisted entity types

use serde::Serialize;

/// A named container of items. `id` is store-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub id: i64,
    pub name: String,
}

/// A named entry owned by exactly one list.
///
/// `(list_id, name)` is unique; the same name may appear in different lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub is_in_cart: bool,
}
