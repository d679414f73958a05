//! Shared application state

use std::sync::Arc;
use tokio::sync::Mutex;

use sprout_store::{Store, StoreFile};

/// State handed to every handler. The store is loaded once at startup and
/// kept in memory behind a mutex; each mutation saves a full snapshot back
/// through the file handle. One process, one writer.
#[derive(Clone)]
pub struct AppState {
  pub file: Arc<StoreFile>,
  pub store: Arc<Mutex<Store>>,
  pub base_url: String,
}

impl AppState {
  pub fn new(file: StoreFile, store: Store, base_url: impl Into<String>) -> Self {
    Self {
      file: Arc::new(file),
      store: Arc::new(Mutex::new(store)),
      base_url: base_url.into(),
    }
  }
}
