//! Session keyword cache
//!
//! Maps a submitted keyword to the suggestions fetched for it, with a fixed time-to-live.
//! Expiry is only checked when an entry is read; nothing sweeps the store in the background.

mod entry;
mod keyword_cache;

pub use entry::CacheEntry;
pub use keyword_cache::{KeywordCache, now_millis};

use thiserror::Error;

use crate::lookup::LookupError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Stored keyword cache is corrupt: {0}")]
    Corrupt(serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),
}
