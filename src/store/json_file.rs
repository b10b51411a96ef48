use async_trait::async_trait;
use chrono::Utc;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::{next_id, Record, RecordStore};
use crate::error::{StorageError, StorageResult};

/// A collection stored as one JSON array in one file.
///
/// Each operation re-reads the whole file and, for writes, rewrites it. The
/// per-file mutex makes every single operation exclusive within the
/// collection; it does not group operations together.
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Store for `T` at `<dir>/<collection>.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{}.json", T::COLLECTION)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> StorageResult<Vec<T>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // A collection emptied by an older writer may hold `null`.
        let records: Option<Vec<T>> = serde_json::from_slice(&bytes).map_err(|e| {
            log::error!("Failed to decode {}: {}", self.path().display(), e);
            e
        })?;
        Ok(records.unwrap_or_default())
    }

    async fn write_all(&self, records: &[T]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut encoded = serde_json::to_vec(records)?;
        encoded.push(b'\n');

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &encoded).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    fn not_found(id: i64) -> StorageError {
        StorageError::NotFound {
            collection: T::COLLECTION,
            id,
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for JsonFileStore<T> {
    async fn save(&self, mut record: T) -> StorageResult<T> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;

        record.assign(next_id(&records), Utc::now());
        records.push(record.clone());

        self.write_all(&records).await?;
        Ok(record)
    }

    async fn update(&self, record: T) -> StorageResult<T> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| Self::not_found(record.id()))?;
        *slot = record.clone();

        self.write_all(&records).await?;
        Ok(record)
    }

    async fn delete(&self, id: i64) -> StorageResult<T> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all().await?;

        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        let removed = records.remove(index);

        self.write_all(&records).await?;
        Ok(removed)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<T> {
        let _guard = self.lock.lock().await;
        self.read_all()
            .await?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn find_all(&self) -> StorageResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }
}
