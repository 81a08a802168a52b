//! eggs - a small self-hostable HTTP service for managing lists and their items
//!
//! Lists have globally unique names. Items belong to exactly one list, have a
//! name unique within that list, and carry an in-cart flag. The crate is split
//! into the SQLite-backed store (uniqueness and cascade invariants live there)
//! and the HTTP layer that maps requests onto it.

pub mod cli;
pub mod http_server;
pub mod store;
pub mod validation;
