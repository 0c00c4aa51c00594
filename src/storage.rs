//! Snapshot Storage
//!
//! The key-value string store behind the board, and JSON snapshot helpers.
//! In the browser this is `localStorage`.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("malformed snapshot: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("cannot encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A string-keyed string store
pub trait SnapshotStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Decode the value under `key`. `Ok(None)` when nothing is stored.
pub fn load_snapshot<S, T>(storage: &S, key: &str) -> StorageResult<Option<T>>
where
    S: SnapshotStorage + ?Sized,
    T: DeserializeOwned,
{
    match storage.read(key)? {
        Some(raw) => serde_json::from_str(&raw).map(Some).map_err(StorageError::Malformed),
        None => Ok(None),
    }
}

pub fn save_snapshot<S, T>(storage: &S, key: &str, value: &T) -> StorageResult<()>
where
    S: SnapshotStorage + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(StorageError::Encode)?;
    storage.write(key, &raw)
}

// ========================
// Browser
// ========================

/// `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl SnapshotStorage for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

// ========================
// In-memory (tests)
// ========================

#[cfg(test)]
pub use memory::MemoryStorage;
