//! Error types for store operations

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
  #[error("validation failed: {}", problems.join("; "))]
  Validation { problems: Vec<String> },

  #[error("'{raw}' is not a valid record index (store holds {len} record(s))")]
  InvalidIndex { raw: String, len: usize },

  #[error("store file {} is corrupt: {source}", path.display())]
  Corrupt {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to access store file {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to encode store data: {message}")]
  Encode { message: String },
}

impl StoreError {
  pub fn validation(problems: Vec<String>) -> Self {
    Self::Validation { problems }
  }

  pub fn invalid_index(raw: impl Into<String>, len: usize) -> Self {
    Self::InvalidIndex { raw: raw.into(), len }
  }

  pub fn corrupt(path: &Path, source: serde_json::Error) -> Self {
    Self::Corrupt { path: path.to_path_buf(), source }
  }

  pub fn io(path: &Path, source: std::io::Error) -> Self {
    Self::Io { path: path.to_path_buf(), source }
  }

  pub fn encode(message: impl Into<String>) -> Self {
    Self::Encode { message: message.into() }
  }

  /// Whether this error came from rejecting a submission, as opposed to a
  /// storage-level failure. Callers use this to report inline instead of
  /// treating it as an operator problem.
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Validation { .. })
  }
}
