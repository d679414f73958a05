//! Sprout Store - Flat-File Measurement Record Storage
//!
//! Durable, insertion-ordered collection of plant growth measurement records
//! persisted as a single JSON file. A record's identity is its zero-based
//! position in insertion order; appending is the only mutation, so indices
//! stay stable for the lifetime of the store.

pub mod error;
pub mod export;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use export::render_csv;
pub use record::{ImageAttachment, Record, RecordInput};
pub use store::{Store, StoreFile};
