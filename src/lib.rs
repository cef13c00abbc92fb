//! kwsuggest library - Interactive search prompt with debounced suggestions
//!
//! This library exposes the core functionality of kwsuggest for testing purposes.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod input;
pub mod lookup;
pub mod navigation;
pub mod navigator;
pub mod notification;
pub mod search;
pub mod storage;
pub mod suggestion;

#[cfg(test)]
pub mod test_utils;
pub mod theme;

// Re-export commonly used types for convenience
pub use app::{App, Submission};
pub use cache::KeywordCache;
pub use config::Config;
pub use suggestion::Suggestion;
