//! Key-value persistence
//!
//! Everything eventmap keeps across restarts (favorites, theme, language) is
//! a named string value. The [`KeyValueStore`] trait is the only seam the rest
//! of the crate depends on; [`SqliteStore`] backs the binary and
//! [`MemoryStore`] backs tests and embedders that bring their own durability.

mod memory;
mod sqlite;

use std::future::Future;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors raised by a key-value backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// `SQLite` failed to read or write
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem error (e.g. creating the data directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable get/set of named string values.
///
/// Implementations must be safe to share between tasks. A missing key is
/// `Ok(None)`, never an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get_value(&self, key: &str)
    -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value
    fn set_value(&self, key: &str, value: &str)
    -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl<S: KeyValueStore> KeyValueStore for std::sync::Arc<S> {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_value(key).await
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_value(key, value).await
    }
}
