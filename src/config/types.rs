// Configuration type definitions

use serde::Deserialize;

/// Keyword cache section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Replace the stored suggestions when an existing keyword is set again.
    /// Off keeps the refresh-expiry-only behavior.
    #[serde(default)]
    pub refresh_replaces_suggestions: bool,
    /// Leave expired entries out of the recent keyword list.
    #[serde(default)]
    pub recent_skips_expired: bool,
}

fn default_ttl_ms() -> u64 {
    60 * 60 * 1000
}

fn default_storage_key() -> String {
    "kwsuggest.recent-keywords".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_ms: default_ttl_ms(),
            storage_key: default_storage_key(),
            refresh_replaces_suggestions: false,
            recent_skips_expired: false,
        }
    }
}

/// Debounced search section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Only apply the response of the most recently issued lookup.
    #[serde(default)]
    pub latest_request_wins: bool,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            latest_request_wins: false,
        }
    }
}

/// Remote lookup section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    "http://localhost:4000/sick".to_string()
}

fn default_query_param() -> String {
    "q".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            endpoint: default_endpoint(),
            query_param: default_query_param(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Results navigation section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub results_url: Option<String>,
    #[serde(default = "default_query_param")]
    pub results_param: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            results_url: None,
            results_param: default_query_param(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}
