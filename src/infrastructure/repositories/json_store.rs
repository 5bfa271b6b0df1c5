use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store file {path} unreadable or unwritable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is not valid JSON: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A JSON array persisted as one file.
///
/// Reads and writes always cover the whole collection. Every write goes
/// through `write_lock`, so a load-modify-save in [`JsonFileStore::update`]
/// cannot interleave with another writer in this process. Files are replaced
/// by writing a sibling temp file and renaming it over the original.
pub struct JsonFileStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Load the whole collection. A missing file is an empty collection.
    pub async fn load_all(&self) -> Result<Vec<T>, StoreError> {
        self.read_file().await
    }

    /// Replace the whole collection
    pub async fn save_all(&self, records: &[T]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_file(records).await
    }

    /// Read-modify-write under the store lock. The closure's return value is
    /// handed back to the caller; nothing is written if loading fails.
    pub async fn update<R, F>(&self, mutate: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> R + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_file().await?;
        let outcome = mutate(&mut records);
        self.write_file(&records).await?;
        Ok(outcome)
    }

    async fn read_file(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Serialization {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_file(&self, records: &[T]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|source| self.io_error(source))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            bytes = bytes.len(),
            "Store written"
        );

        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
