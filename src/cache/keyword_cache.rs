use chrono::Utc;

use super::{CacheEntry, CacheError};
use crate::config::CacheConfig;
use crate::lookup::SuggestionLookup;
use crate::storage::{KeyValueStorage, StorageError};
use crate::suggestion::Suggestion;

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Keyword cache over a session-scoped key-value store.
///
/// The whole store is one JSON array under `storage_key`. Every mutation rewrites it.
pub struct KeywordCache {
    storage: Box<dyn KeyValueStorage>,
    storage_key: String,
    ttl_ms: i64,
    refresh_replaces_suggestions: bool,
    recent_skips_expired: bool,
}

impl KeywordCache {
    pub fn new(storage: Box<dyn KeyValueStorage>, config: &CacheConfig) -> Self {
        Self {
            storage,
            storage_key: config.storage_key.clone(),
            ttl_ms: i64::try_from(config.ttl_ms).unwrap_or(i64::MAX),
            refresh_replaces_suggestions: config.refresh_replaces_suggestions,
            recent_skips_expired: config.recent_skips_expired,
        }
    }

    pub fn storage(&self) -> &dyn KeyValueStorage {
        &*self.storage
    }

    /// Cached suggestions for `keyword`, or `None` when absent or expired.
    pub fn get(&mut self, keyword: &str) -> Option<Vec<Suggestion>> {
        self.get_at(keyword, now_millis())
    }

    /// Like [`get`](Self::get) at an explicit time. An expired entry is dropped from the store.
    pub fn get_at(&mut self, keyword: &str, now: i64) -> Option<Vec<Suggestion>> {
        let mut entries = self.load_entries();
        let index = entries.iter().position(|e| e.keyword == keyword)?;

        if !entries[index].is_expired_at(now) {
            #[cfg(debug_assertions)]
            log::debug!("Cache hit for {:?}", keyword);
            return Some(entries.swap_remove(index).suggestions);
        }

        #[cfg(debug_assertions)]
        log::debug!("Cache entry for {:?} expired, evicting", keyword);

        entries.remove(index);
        if let Err(e) = self.save_entries(&entries) {
            log::warn!("Failed to write back after evicting {:?}: {}", keyword, e);
        }
        None
    }

    /// Fetches suggestions for `keyword` and records them.
    ///
    /// Always calls the lookup, even when the keyword is cached and fresh.
    pub fn set<L: SuggestionLookup + ?Sized>(
        &mut self,
        keyword: &str,
        lookup: &L,
    ) -> Result<(), CacheError> {
        self.set_at(keyword, lookup, now_millis())
    }

    pub fn set_at<L: SuggestionLookup + ?Sized>(
        &mut self,
        keyword: &str,
        lookup: &L,
        now: i64,
    ) -> Result<(), CacheError> {
        let suggestions = lookup.lookup(keyword)?;
        self.store_fetched_at(keyword, suggestions, now)
    }

    /// Records fetched suggestions for `keyword` with a fresh expiry.
    ///
    /// An existing entry only has its expiry refreshed unless
    /// `refresh_replaces_suggestions` is on; a new entry is appended.
    pub fn store_fetched_at(
        &mut self,
        keyword: &str,
        suggestions: Vec<Suggestion>,
        now: i64,
    ) -> Result<(), CacheError> {
        let expire_at = now.saturating_add(self.ttl_ms);
        let mut entries = self.load_entries();

        match entries.iter_mut().find(|e| e.keyword == keyword) {
            Some(entry) => {
                entry.expire_at = expire_at;
                if self.refresh_replaces_suggestions {
                    entry.suggestions = suggestions;
                }
            }
            None => entries.push(CacheEntry {
                keyword: keyword.to_string(),
                expire_at,
                suggestions,
            }),
        }

        self.save_entries(&entries)
    }

    /// Stored keywords in insertion order, or `None` for an empty store.
    ///
    /// Expired entries that have not been read yet are still listed unless
    /// `recent_skips_expired` is on.
    pub fn recent_keywords(&self) -> Option<Vec<String>> {
        self.recent_keywords_at(now_millis())
    }

    pub fn recent_keywords_at(&self, now: i64) -> Option<Vec<String>> {
        let keywords: Vec<String> = self
            .load_entries()
            .into_iter()
            .filter(|e| !self.recent_skips_expired || !e.is_expired_at(now))
            .map(|e| e.keyword)
            .collect();

        if keywords.is_empty() {
            None
        } else {
            Some(keywords)
        }
    }

    /// Snapshot of the stored entries. A corrupt store reads as empty.
    pub fn entries(&self) -> Vec<CacheEntry> {
        self.load_entries()
    }

    fn load_entries(&self) -> Vec<CacheEntry> {
        match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Treating keyword cache as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn read_entries(&self) -> Result<Vec<CacheEntry>, CacheError> {
        match self.storage.get_item(&self.storage_key) {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(CacheError::Corrupt),
        }
    }

    fn save_entries(&mut self, entries: &[CacheEntry]) -> Result<(), CacheError> {
        let raw = serde_json::to_string(entries).map_err(StorageError::from)?;
        self.storage.set_item(&self.storage_key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "keyword_cache_tests.rs"]
mod keyword_cache_tests;
