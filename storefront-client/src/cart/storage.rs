//! Durable cart persistence
//!
//! The carts map is serialized as one JSON blob under a fixed key. Absence
//! or corruption of the slot is never fatal; the store starts empty.

use std::path::Path;
use std::sync::Mutex;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

use super::CartsMap;

/// Single-slot table: key = [`CARTS_KEY`], value = JSON carts map.
pub(crate) const CARTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("carts");

/// Fixed slot name for the persisted carts map.
pub(crate) const CARTS_KEY: &str = "establishment-carts";

/// Cart persistence errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cart storage i/o: {0}")]
    Io(String),

    #[error("corrupt cart data: {0}")]
    Corrupt(String),
}

/// Persistence adapter for the carts map.
pub trait CartStorage: Send {
    /// Load the persisted carts map; `None` when nothing was persisted yet.
    fn load(&self) -> Result<Option<CartsMap>, StorageError>;

    /// Persist the full carts map, replacing any previous snapshot.
    fn save(&self, carts: &CartsMap) -> Result<(), StorageError>;
}

/// redb-backed storage (durable local key-value slot).
pub struct RedbCartStorage {
    db: Database,
}

impl RedbCartStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path).map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(Self { db })
    }
}

impl CartStorage for RedbCartStorage {
    fn load(&self) -> Result<Option<CartsMap>, StorageError> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let table = match txn.open_table(CARTS_TABLE) {
            Ok(table) => table,
            // First run: the table does not exist yet.
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        match table
            .get(CARTS_KEY)
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            Some(raw) => serde_json::from_slice(raw.value())
                .map(Some)
                .map_err(|e| StorageError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, carts: &CartsMap) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(carts).map_err(|e| StorageError::Io(e.to_string()))?;
        let txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        {
            let mut table = txn
                .open_table(CARTS_TABLE)
                .map_err(|e| StorageError::Io(e.to_string()))?;
            table
                .insert(CARTS_KEY, bytes.as_slice())
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        txn.commit().map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryCartStorage {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload raw bytes into the slot (for corrupt-data scenarios).
    pub fn with_raw(bytes: Vec<u8>) -> Self {
        Self {
            slot: Mutex::new(Some(bytes)),
        }
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Option<CartsMap>, StorageError> {
        let guard = self
            .slot
            .lock()
            .map_err(|_| StorageError::Io("poisoned lock".into()))?;
        match guard.as_ref() {
            Some(bytes) => serde_json::from_slice(bytes)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, carts: &CartsMap) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(carts).map_err(|e| StorageError::Io(e.to_string()))?;
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| StorageError::Io("poisoned lock".into()))?;
        *guard = Some(bytes);
        Ok(())
    }
}
