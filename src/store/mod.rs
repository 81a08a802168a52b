//! Persistent store for lists and items
//!
//! The store owns the relational schema and enforces the data invariants:
//! list names are globally unique, `(list_id, name)` is unique per list, and
//! deleting a list removes its items atomically. The HTTP layer never touches
//! SQL directly; it goes through [`Store`].

mod errors;
mod model;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use model::{Item, List};
pub use sqlite::Store;
