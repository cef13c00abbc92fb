use thiserror::Error;

use crate::cache::CacheError;
use crate::lookup::LookupError;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Could not determine a cache directory for the session store")]
    CacheDirUnavailable,

    #[error("Keyword cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Lookup client error: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
