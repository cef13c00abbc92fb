//! Shared test utilities for kwsuggest
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::cache::KeywordCache;
    use crate::config::{CacheConfig, Config};
    use crate::lookup::{LookupError, SuggestionLookup};
    use crate::storage::MemoryStorage;
    use crate::suggestion::Suggestion;

    type Scripted = Result<Vec<Suggestion>, LookupError>;

    /// Scripted lookup. Each keyword answers its queued results in order and keeps
    /// repeating the last one; unknown keywords answer an empty list.
    #[derive(Clone, Default)]
    pub struct FakeLookup {
        responses: Arc<Mutex<HashMap<String, VecDeque<Scripted>>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeLookup {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(self, keyword: &str, suggestions: Vec<Suggestion>) -> Self {
            self.push(keyword, Ok(suggestions));
            self
        }

        pub fn failing(self, keyword: &str, error: LookupError) -> Self {
            self.push(keyword, Err(error));
            self
        }

        fn push(&self, keyword: &str, result: Scripted) {
            self.responses
                .lock()
                .unwrap()
                .entry(keyword.to_string())
                .or_default()
                .push_back(result);
        }

        pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.calls)
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl SuggestionLookup for FakeLookup {
        fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
            self.calls.lock().unwrap().push(query.to_string());

            let mut responses = self.responses.lock().unwrap();
            match responses.get_mut(query) {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
                Some(queue) => queue.front().cloned().unwrap_or(Ok(Vec::new())),
                None => Ok(Vec::new()),
            }
        }
    }

    pub fn flu_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion::new("A1", "Influenza"),
            Suggestion::new("A2", "Flu-like illness"),
        ]
    }

    pub fn memory_cache() -> KeywordCache {
        memory_cache_with(&CacheConfig::default())
    }

    pub fn memory_cache_with(config: &CacheConfig) -> KeywordCache {
        KeywordCache::new(Box::new(MemoryStorage::new()), config)
    }

    pub fn cache_over(storage: MemoryStorage) -> KeywordCache {
        KeywordCache::new(Box::new(storage), &CacheConfig::default())
    }

    /// Helper to create App with default config and an empty in-memory cache
    pub fn test_app() -> App {
        App::new(memory_cache(), &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Types each character of `text` into the app
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
