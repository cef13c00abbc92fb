//! Remote suggestion lookup
//!
//! The lookup is a plain request/response call: keyword in, ordered suggestions out.
//! `HttpLookup` talks to the suggestion service; the worker runs lookups off the UI thread.

mod http;
pub mod worker;

pub use http::HttpLookup;

use thiserror::Error;

use crate::suggestion::Suggestion;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Lookup service returned HTTP {0}")]
    Status(u16),

    #[error("Could not decode suggestions: {0}")]
    Decode(String),

    #[error("Failed to start lookup runtime: {0}")]
    Runtime(String),

    #[error("Lookup worker is not running")]
    Unavailable,
}

/// Fetches suggestions for a keyword. Blocking; callers on the UI thread go through the worker.
pub trait SuggestionLookup {
    fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, LookupError>;
}

impl<T: SuggestionLookup + ?Sized> SuggestionLookup for Box<T> {
    fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        (**self).lookup(query)
    }
}

/// Request sent from the search controller to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub token: u64,
    pub keyword: String,
}

/// Result of one lookup, tagged with the token of the request that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub token: u64,
    pub keyword: String,
    pub result: Result<Vec<Suggestion>, LookupError>,
}
