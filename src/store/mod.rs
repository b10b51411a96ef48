//! Per-entity record persistence.
//!
//! Services only see the [`RecordStore`] trait; the flat-file implementation
//! lives in [`json_file`].

pub mod json_file;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::error::StorageResult;

pub use json_file::JsonFileStore;

/// An entity kept in its own collection, keyed by an integer id.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name, used for the backing file and in error messages.
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    /// Stamp a record with the id and creation time chosen by the store.
    fn assign(&mut self, id: i64, created_at: DateTime<Utc>);
}

/// Storage interface for one collection of records.
///
/// Every operation stands alone. Nothing spans two calls or two collections.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Insert a record, assigning `max(existing ids) + 1` and the current time.
    async fn save(&self, record: T) -> StorageResult<T>;

    /// Replace the record with the same id.
    async fn update(&self, record: T) -> StorageResult<T>;

    /// Remove a record and return it.
    async fn delete(&self, id: i64) -> StorageResult<T>;

    async fn find_by_id(&self, id: i64) -> StorageResult<T>;

    async fn find_all(&self) -> StorageResult<Vec<T>>;
}

pub type SharedStore<T> = Arc<dyn RecordStore<T>>;

/// Next id for a collection: one past the largest id present.
pub fn next_id<T: Record>(records: &[T]) -> i64 {
    records.iter().map(Record::id).max().unwrap_or(0) + 1
}
