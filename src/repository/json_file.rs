//! Flat-file JSON implementation of the catalog store

use std::fs;
use std::io;
use std::path::PathBuf;

use indexmap::IndexMap;

use super::{CatalogStore, StorageError};
use crate::models::BookRecord;

/// Whole-file JSON store. The file holds a single object keyed by book
/// title; key order is the order titles entered the catalog.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<IndexMap<String, BookRecord>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            // First run: no catalog file yet
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(IndexMap::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&text).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, books: &IndexMap<String, BookRecord>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(books).map_err(StorageError::Encode)?;
        fs::write(&self.path, json).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
