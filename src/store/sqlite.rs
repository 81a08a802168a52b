//! SQLite-backed store implementation
//!
//! One connection behind a mutex; every operation takes the lock once, so
//! conflicting mutations are serialized and each call is a single atomic
//! round trip. Uniqueness is enforced by unique indexes and cascade deletion
//! by the `ON DELETE CASCADE` foreign key, so a failed statement leaves the
//! database exactly as it was.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::errors::{StoreError, StoreResult};
use super::model::{Item, List};

/// SQLite-backed store for lists and items.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Create an in-memory database, used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create the schema if it does not exist yet.
    ///
    /// `foreign_keys` is a per-connection pragma and must be re-enabled on
    /// every open for the cascade to fire.
    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                list_id INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                is_in_cart INTEGER NOT NULL DEFAULT 0,
                UNIQUE (list_id, name)
            );
            ",
        )?;
        Ok(())
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    // ==================
    // List Operations
    // ==================

    /// All lists, in insertion order.
    pub fn all_lists(&self) -> StoreResult<Vec<List>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM lists ORDER BY id")?;
        let lists = stmt
            .query_map([], row_to_list)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lists)
    }

    /// Insert a new list. Fails with `DuplicateList` if the name is taken.
    pub fn create_list(&self, name: &str) -> StoreResult<List> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO lists (name) VALUES (?1)", params![name])
            .map_err(|e| map_constraint(e, StoreError::DuplicateList))?;
        Ok(List {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Look up a list by name. Fails with `ListNotFound` if absent.
    pub fn find_list(&self, name: &str) -> StoreResult<List> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, name FROM lists WHERE name = ?1",
            params![name],
            row_to_list,
        )
        .optional()?
        .ok_or(StoreError::ListNotFound)
    }

    /// Delete a list by name, cascading to its items.
    ///
    /// The cascade runs inside the same statement, so the list and its items
    /// disappear atomically.
    pub fn delete_list(&self, name: &str) -> StoreResult<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM lists WHERE name = ?1", params![name])?;
        if deleted == 0 {
            return Err(StoreError::ListNotFound);
        }
        Ok(())
    }

    // ==================
    // Item Operations
    // ==================

    /// All items in a list, in insertion order.
    pub fn items_in_list(&self, list_id: i64) -> StoreResult<Vec<Item>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, list_id, name, is_in_cart FROM items WHERE list_id = ?1 ORDER BY id",
        )?;
        let items = stmt
            .query_map(params![list_id], row_to_item)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Insert a new item into a list, with `is_in_cart` defaulting to false.
    ///
    /// Fails with `DuplicateItem` if the name is taken within the list, and
    /// with `ListNotFound` if `list_id` does not reference a live list.
    pub fn create_item(&self, list_id: i64, name: &str) -> StoreResult<Item> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO items (list_id, name) VALUES (?1, ?2)",
            params![list_id, name],
        )
        .map_err(|e| map_constraint(e, StoreError::DuplicateItem))?;
        Ok(Item {
            id: conn.last_insert_rowid(),
            list_id,
            name: name.to_string(),
            is_in_cart: false,
        })
    }

    /// Look up an item by list id and name. Fails with `ItemNotFound` if absent.
    pub fn find_item(&self, list_id: i64, name: &str) -> StoreResult<Item> {
        let conn = self.conn()?;
        find_item_on(&conn, list_id, name)
    }

    /// Set the in-cart flag on an item and return the updated row.
    ///
    /// Idempotent: writing the current value again succeeds and returns the
    /// same representation.
    pub fn set_in_cart(&self, list_id: i64, name: &str, is_in_cart: bool) -> StoreResult<Item> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE items SET is_in_cart = ?1 WHERE list_id = ?2 AND name = ?3",
            params![is_in_cart, list_id, name],
        )?;
        if updated == 0 {
            return Err(StoreError::ItemNotFound);
        }
        find_item_on(&conn, list_id, name)
    }

    /// Delete an item by list id and name. Fails with `ItemNotFound` if absent.
    pub fn delete_item(&self, list_id: i64, name: &str) -> StoreResult<()> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM items WHERE list_id = ?1 AND name = ?2",
            params![list_id, name],
        )?;
        if deleted == 0 {
            return Err(StoreError::ItemNotFound);
        }
        Ok(())
    }
}

fn find_item_on(conn: &Connection, list_id: i64, name: &str) -> StoreResult<Item> {
    conn.query_row(
        "SELECT id, list_id, name, is_in_cart FROM items WHERE list_id = ?1 AND name = ?2",
        params![list_id, name],
        row_to_item,
    )
    .optional()?
    .ok_or(StoreError::ItemNotFound)
}

fn row_to_list(row: &Row<'_>) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        list_id: row.get(1)?,
        name: row.get(2)?,
        is_in_cart: row.get(3)?,
    })
}

/// Translate a failed insert into the domain error.
///
/// A unique-index violation becomes `duplicate`; a foreign-key violation on
/// the items table means the referenced list is gone, so it becomes
/// `ListNotFound`. Anything else is a transport failure.
fn map_constraint(e: rusqlite::Error, duplicate: StoreError) -> StoreError {
    if let rusqlite::Error::SqliteFailure(err, _) = &e {
        if err.code == rusqlite::ErrorCode::ConstraintViolation {
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
                return StoreError::ListNotFound;
            }
            return duplicate;
        }
    }
    StoreError::Storage(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find_list() {
        let store = Store::open_in_memory().unwrap();
        let created = store.create_list("todo").unwrap();
        assert_eq!(created.name, "todo");

        let found = store.find_list("todo").unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn test_duplicate_list_is_conflict() {
        let store = Store::open_in_memory().unwrap();
        store.create_list("todo").unwrap();
        assert!(matches!(
            store.create_list("todo"),
            Err(StoreError::DuplicateList)
        ));

        // The failed insert must not have changed the store.
        let names: Vec<String> = store.all_lists().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["todo"]);
    }

    #[test]
    fn test_lists_come_back_in_insertion_order() {
        let store = Store::open_in_memory().unwrap();
        store.create_list("b").unwrap();
        store.create_list("a").unwrap();
        store.create_list("c").unwrap();

        let names: Vec<String> = store.all_lists().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_find_missing_list() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(
            store.find_list("nope"),
            Err(StoreError::ListNotFound)
        ));
    }

    #[test]
    fn test_delete_missing_list() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(
            store.delete_list("nope"),
            Err(StoreError::ListNotFound)
        ));
    }

    #[test]
    fn test_create_item_defaults_to_not_in_cart() {
        let store = Store::open_in_memory().unwrap();
        let list = store.create_list("shopping").unwrap();
        let item = store.create_item(list.id, "milk").unwrap();
        assert_eq!(item.list_id, list.id);
        assert!(!item.is_in_cart);
    }

    #[test]
    fn test_duplicate_item_in_same_list_is_conflict() {
        let store = Store::open_in_memory().unwrap();
        let list = store.create_list("shopping").unwrap();
        store.create_item(list.id, "milk").unwrap();
        assert!(matches!(
            store.create_item(list.id, "milk"),
            Err(StoreError::DuplicateItem)
        ));
        assert_eq!(store.items_in_list(list.id).unwrap().len(), 1);
    }

    #[test]
    fn test_same_item_name_allowed_across_lists() {
        let store = Store::open_in_memory().unwrap();
        let a = store.create_list("a").unwrap();
        let b = store.create_list("b").unwrap();
        store.create_item(a.id, "milk").unwrap();
        store.create_item(b.id, "milk").unwrap();
        assert_eq!(store.items_in_list(a.id).unwrap().len(), 1);
        assert_eq!(store.items_in_list(b.id).unwrap().len(), 1);
    }

    #[test]
    fn test_create_item_for_dead_list_is_not_found() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(
            store.create_item(42, "milk"),
            Err(StoreError::ListNotFound)
        ));
    }

    #[test]
    fn test_delete_list_cascades_to_items() {
        let store = Store::open_in_memory().unwrap();
        let list = store.create_list("shopping").unwrap();
        store.create_item(list.id, "milk").unwrap();
        store.create_item(list.id, "eggs").unwrap();

        store.delete_list("shopping").unwrap();

        assert!(matches!(
            store.find_list("shopping"),
            Err(StoreError::ListNotFound)
        ));
        assert!(store.items_in_list(list.id).unwrap().is_empty());
        assert!(matches!(
            store.find_item(list.id, "milk"),
            Err(StoreError::ItemNotFound)
        ));
    }

    #[test]
    fn test_set_in_cart_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        let list = store.create_list("shopping").unwrap();
        store.create_item(list.id, "milk").unwrap();

        let first = store.set_in_cart(list.id, "milk", true).unwrap();
        let second = store.set_in_cart(list.id, "milk", true).unwrap();
        assert!(first.is_in_cart);
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_in_cart_on_missing_item() {
        let store = Store::open_in_memory().unwrap();
        let list = store.create_list("shopping").unwrap();
        assert!(matches!(
            store.set_in_cart(list.id, "milk", true),
            Err(StoreError::ItemNotFound)
        ));
    }

    #[test]
    fn test_delete_item() {
        let store = Store::open_in_memory().unwrap();
        let list = store.create_list("shopping").unwrap();
        store.create_item(list.id, "milk").unwrap();
        store.delete_item(list.id, "milk").unwrap();
        assert!(matches!(
            store.find_item(list.id, "milk"),
            Err(StoreError::ItemNotFound)
        ));
        assert!(matches!(
            store.delete_item(list.id, "milk"),
            Err(StoreError::ItemNotFound)
        ));
    }
}
