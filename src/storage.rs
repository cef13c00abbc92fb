//! Key-value storage backing the keyword cache.
//!
//! Mirrors a browser's session storage: string keys, string values, whole-value writes.

mod memory;
mod session_file;

pub use memory::MemoryStorage;
pub use session_file::{SessionFileStorage, session_id_from_env, session_path};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode session store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Session-scoped string store.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
