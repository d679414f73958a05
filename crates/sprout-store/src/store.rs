//! Store state and the file handle that persists it
//!
//! The store is one JSON file holding every record plus a `lastUpdated`
//! timestamp. Every save is a full snapshot overwrite; there is no partial
//! or append-only format. The model assumes a single active writer, so a
//! concurrent writer's snapshot simply wins (last write replaces the file).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record::{Record, RecordInput};

/// The full collection of records plus last-update metadata.
///
/// Record identity is positional: a record is referenced externally by its
/// zero-based index in `records`, which is insertion order. Display layers
/// may sort however they like, but links always carry the raw index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
  pub records: Vec<Record>,
  pub last_updated: DateTime<Utc>,
}

impl Store {
  pub fn empty() -> Self {
    Self { records: Vec::new(), last_updated: Utc::now() }
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Look up a record by its insertion-order index.
  pub fn get(&self, index: usize) -> Result<&Record, StoreError> {
    self
      .records
      .get(index)
      .ok_or_else(|| StoreError::invalid_index(index.to_string(), self.records.len()))
  }

  /// Parse a raw index value, e.g. from a URL query or CLI argument.
  /// Anything that is not a base-10 integer inside `[0, len)` is rejected;
  /// negative values fail the integer parse and land in the same error.
  pub fn resolve_index(&self, raw: &str) -> Result<usize, StoreError> {
    let index = raw
      .trim()
      .parse::<usize>()
      .map_err(|_| StoreError::invalid_index(raw, self.records.len()))?;
    if index >= self.records.len() {
      return Err(StoreError::invalid_index(raw, self.records.len()));
    }
    Ok(index)
  }
}

/// Handle on the backing file. Operations take the in-memory [`Store`]
/// explicitly; there is no process-wide cached copy. Load once at startup,
/// save after every mutation.
#[derive(Debug, Clone)]
pub struct StoreFile {
  path: PathBuf,
}

impl StoreFile {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Load the store from disk. A missing file is initialized as an empty
  /// store and persisted before returning. A file that exists but does not
  /// parse as the expected shape surfaces as [`StoreError::Corrupt`] so the
  /// caller never mutates past the corruption.
  pub fn load(&self) -> Result<Store, StoreError> {
    if !self.path.exists() {
      let mut store = Store::empty();
      self.save(&mut store)?;
      return Ok(store);
    }

    let raw = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
    serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(&self.path, e))
  }

  /// Persist the entire store, overwriting the previous file contents.
  /// Refreshes `lastUpdated` on every save.
  pub fn save(&self, store: &mut Store) -> Result<(), StoreError> {
    store.last_updated = Utc::now();

    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(&self.path, e))?;
      }
    }

    let json =
      serde_json::to_string_pretty(store).map_err(|e| StoreError::encode(e.to_string()))?;
    fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))
  }

  /// Validate and append one submission, then persist the new snapshot.
  /// Returns the new record's index, which equals the pre-append count.
  /// A validation failure stores and writes nothing.
  pub fn append(&self, store: &mut Store, input: RecordInput) -> Result<usize, StoreError> {
    input.validate()?;
    store.records.push(input.into_record());
    self.save(store)?;
    Ok(store.records.len() - 1)
  }
}
