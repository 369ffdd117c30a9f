//! Repository layer for catalog storage

pub mod json_file;

pub use json_file::JsonFileStore;

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::models::{BookRecord, BookStatus};

/// Errors raised by the storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read catalog file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write catalog file {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog file {} is not valid JSON: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode catalog as JSON: {0}")]
    Encode(serde_json::Error),
}

/// Storage contract for the catalog: load the whole title-keyed mapping,
/// overwrite it wholesale on save.
#[cfg_attr(test, automock)]
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> Result<IndexMap<String, BookRecord>, StorageError>;
    fn save(&self, books: &IndexMap<String, BookRecord>) -> Result<(), StorageError>;
}

/// In-memory catalog backed by a store.
///
/// The catalog is read once at startup and held in memory; every mutation
/// is followed by a whole-file save. Clones share the same catalog.
#[derive(Clone)]
pub struct BookRepository {
    books: Arc<RwLock<IndexMap<String, BookRecord>>>,
    store: Arc<dyn CatalogStore>,
}

impl BookRepository {
    /// Load the catalog from the store.
    ///
    /// A missing file yields an empty catalog. An unreadable or corrupt
    /// file also degrades to an empty catalog, with a warning, so the
    /// application can still start. Records marked available are
    /// stripped of any stray loan fields left by older writers.
    pub fn load(store: Arc<dyn CatalogStore>) -> Self {
        let mut books = match store.load() {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!("Failed to load catalog, starting empty: {}", e);
                IndexMap::new()
            }
        };
        for record in books.values_mut() {
            if record.status == BookStatus::Available {
                record.clear_loan();
            }
        }
        Self {
            books: Arc::new(RwLock::new(books)),
            store,
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, BookRecord>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, BookRecord>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the store with the current in-memory catalog.
    ///
    /// On failure the in-memory state keeps any mutation already applied;
    /// the on-disk copy is stale until the next successful save.
    pub fn persist(&self) -> Result<(), StorageError> {
        let books = self.read();
        if let Err(e) = self.store.save(&books) {
            tracing::error!("Catalog save failed, on-disk copy is stale: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Number of titles in the catalog
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Field-for-field copy of the full mapping
    pub fn snapshot(&self) -> IndexMap<String, BookRecord> {
        self.read().clone()
    }
}
